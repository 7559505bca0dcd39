//! Supported database engines and versions

use super::item_path;
use crate::api::{unwrap_many, unwrap_one, DbaasClient};
use crate::error::Result;
use serde::{Deserialize, Serialize};

pub const DATASTORE_TYPES_URI: &str = "/datastore-types";

const DATASTORE_TYPE_KEY: &str = "datastore-type";
const DATASTORE_TYPES_KEY: &str = "datastore-types";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatastoreType {
    pub id: String,
    pub engine: String,
    pub version: String,
}

pub async fn list_datastore_types(client: &DbaasClient) -> Result<Vec<DatastoreType>> {
    let body = client.get(DATASTORE_TYPES_URI).await?;
    unwrap_many(&body, DATASTORE_TYPES_KEY)
}

pub async fn get_datastore_type(client: &DbaasClient, datastore_type_id: &str) -> Result<DatastoreType> {
    let body = client
        .get(&item_path(DATASTORE_TYPES_URI, datastore_type_id))
        .await?;
    unwrap_one(&body, DATASTORE_TYPE_KEY)
}
