//! Flavors (compute sizes) offered for datastores

use super::{item_path, null_as_default};
use crate::api::{unwrap_many, unwrap_one, DbaasClient};
use crate::error::Result;
use serde::{Deserialize, Serialize};

pub const FLAVORS_URI: &str = "/flavors";

const FLAVOR_KEY: &str = "flavor";
const FLAVORS_KEY: &str = "flavors";

/// Hardware line backing a flavor
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlavorHost {
    pub line: String,
    pub processor: String,
    pub available_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlavorResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub fl_size: String,
    #[serde(deserialize_with = "null_as_default")]
    pub datastore_type_ids: Vec<String>,
    pub vcpus: u32,
    pub ram: u32,
    pub disk: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<FlavorHost>,
}

pub async fn list_flavors(client: &DbaasClient) -> Result<Vec<FlavorResponse>> {
    let body = client.get(FLAVORS_URI).await?;
    unwrap_many(&body, FLAVORS_KEY)
}

pub async fn get_flavor(client: &DbaasClient, flavor_id: &str) -> Result<FlavorResponse> {
    let body = client.get(&item_path(FLAVORS_URI, flavor_id)).await?;
    unwrap_one(&body, FLAVOR_KEY)
}
