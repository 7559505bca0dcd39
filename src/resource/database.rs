//! Databases inside a datastore

use super::{envelope, item_path, Status};
use crate::api::{unwrap_many, unwrap_one, with_query, DbaasClient};
use crate::error::Result;
use serde::{Deserialize, Serialize};

pub const DATABASES_URI: &str = "/databases";

const DATABASE_KEY: &str = "database";
const DATABASES_KEY: &str = "databases";

/// Database as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Database {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    pub project_id: String,
    pub name: String,
    pub owner_id: String,
    pub lc_collate: String,
    pub lc_ctype: String,
    pub datastore_id: String,
    pub status: Status,
}

/// Options for [`create_database`]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DatabaseCreateOpts {
    pub datastore_id: String,
    pub owner_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lc_collate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lc_ctype: Option<String>,
}

/// Options for [`update_database`]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DatabaseUpdateOpts {
    pub owner_id: String,
}

/// Filters for [`list_databases`]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseQueryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datastore_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

pub async fn list_databases(
    client: &DbaasClient,
    params: Option<&DatabaseQueryParams>,
) -> Result<Vec<Database>> {
    let uri = with_query(DATABASES_URI, params)?;
    let body = client.get(&uri).await?;
    unwrap_many(&body, DATABASES_KEY)
}

pub async fn get_database(client: &DbaasClient, database_id: &str) -> Result<Database> {
    let body = client.get(&item_path(DATABASES_URI, database_id)).await?;
    unwrap_one(&body, DATABASE_KEY)
}

pub async fn create_database(client: &DbaasClient, opts: &DatabaseCreateOpts) -> Result<Database> {
    let body = client
        .post(DATABASES_URI, &envelope(DATABASE_KEY, opts))
        .await?;
    unwrap_one(&body, DATABASE_KEY)
}

/// Change the owner of a database
pub async fn update_database(
    client: &DbaasClient,
    database_id: &str,
    opts: &DatabaseUpdateOpts,
) -> Result<Database> {
    let body = client
        .put(
            &item_path(DATABASES_URI, database_id),
            &envelope(DATABASE_KEY, opts),
        )
        .await?;
    unwrap_one(&body, DATABASE_KEY)
}

pub async fn delete_database(client: &DbaasClient, database_id: &str) -> Result<()> {
    client.delete(&item_path(DATABASES_URI, database_id)).await?;
    Ok(())
}
