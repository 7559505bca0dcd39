//! Extensions installed into a database

use super::{envelope, item_path, Status};
use crate::api::{unwrap_many, unwrap_one, with_query, DbaasClient};
use crate::error::Result;
use serde::{Deserialize, Serialize};

pub const EXTENSIONS_URI: &str = "/extensions";

const EXTENSION_KEY: &str = "extension";
const EXTENSIONS_KEY: &str = "extensions";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Extension {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    pub available_extension_id: String,
    pub datastore_id: String,
    pub database_id: String,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ExtensionCreateOpts {
    pub available_extension_id: String,
    pub datastore_id: String,
    pub database_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtensionQueryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_extension_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datastore_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

pub async fn list_extensions(
    client: &DbaasClient,
    params: Option<&ExtensionQueryParams>,
) -> Result<Vec<Extension>> {
    let uri = with_query(EXTENSIONS_URI, params)?;
    let body = client.get(&uri).await?;
    unwrap_many(&body, EXTENSIONS_KEY)
}

pub async fn get_extension(client: &DbaasClient, extension_id: &str) -> Result<Extension> {
    let body = client.get(&item_path(EXTENSIONS_URI, extension_id)).await?;
    unwrap_one(&body, EXTENSION_KEY)
}

pub async fn create_extension(client: &DbaasClient, opts: &ExtensionCreateOpts) -> Result<Extension> {
    let body = client
        .post(EXTENSIONS_URI, &envelope(EXTENSION_KEY, opts))
        .await?;
    unwrap_one(&body, EXTENSION_KEY)
}

pub async fn delete_extension(client: &DbaasClient, extension_id: &str) -> Result<()> {
    client.delete(&item_path(EXTENSIONS_URI, extension_id)).await?;
    Ok(())
}
