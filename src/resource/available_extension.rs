//! Extensions that can be installed, per datastore type

use super::{item_path, null_as_default};
use crate::api::{unwrap_many, unwrap_one, DbaasClient};
use crate::error::Result;
use serde::{Deserialize, Serialize};

pub const AVAILABLE_EXTENSIONS_URI: &str = "/available-extensions";

const AVAILABLE_EXTENSION_KEY: &str = "available-extension";
const AVAILABLE_EXTENSIONS_KEY: &str = "available-extensions";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AvailableExtension {
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub datastore_type_ids: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub dependency_ids: Vec<String>,
}

pub async fn list_available_extensions(client: &DbaasClient) -> Result<Vec<AvailableExtension>> {
    let body = client.get(AVAILABLE_EXTENSIONS_URI).await?;
    unwrap_many(&body, AVAILABLE_EXTENSIONS_KEY)
}

pub async fn get_available_extension(
    client: &DbaasClient,
    available_extension_id: &str,
) -> Result<AvailableExtension> {
    let body = client
        .get(&item_path(AVAILABLE_EXTENSIONS_URI, available_extension_id))
        .await?;
    unwrap_one(&body, AVAILABLE_EXTENSION_KEY)
}
