//! Database grants for users

use super::{envelope, item_path, Status};
use crate::api::{unwrap_many, unwrap_one, with_query, DbaasClient};
use crate::error::Result;
use serde::{Deserialize, Serialize};

pub const GRANTS_URI: &str = "/grants";

const GRANT_KEY: &str = "grant";
const GRANTS_KEY: &str = "grants";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Grant {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    pub project_id: String,
    pub datastore_id: String,
    pub database_id: String,
    pub user_id: String,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GrantCreateOpts {
    pub datastore_id: String,
    pub database_id: String,
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GrantQueryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datastore_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

pub async fn list_grants(client: &DbaasClient, params: Option<&GrantQueryParams>) -> Result<Vec<Grant>> {
    let uri = with_query(GRANTS_URI, params)?;
    let body = client.get(&uri).await?;
    unwrap_many(&body, GRANTS_KEY)
}

pub async fn get_grant(client: &DbaasClient, grant_id: &str) -> Result<Grant> {
    let body = client.get(&item_path(GRANTS_URI, grant_id)).await?;
    unwrap_one(&body, GRANT_KEY)
}

pub async fn create_grant(client: &DbaasClient, opts: &GrantCreateOpts) -> Result<Grant> {
    let body = client.post(GRANTS_URI, &envelope(GRANT_KEY, opts)).await?;
    unwrap_one(&body, GRANT_KEY)
}

pub async fn delete_grant(client: &DbaasClient, grant_id: &str) -> Result<()> {
    client.delete(&item_path(GRANTS_URI, grant_id)).await?;
    Ok(())
}
