//! Logical replication slots

use super::{envelope, item_path, Status};
use crate::api::{unwrap_many, unwrap_one, with_query, DbaasClient};
use crate::error::Result;
use serde::{Deserialize, Serialize};

pub const LOGICAL_REPLICATION_SLOTS_URI: &str = "/logical-replication-slots";

const SLOT_KEY: &str = "logical-replication-slot";
const SLOTS_KEY: &str = "logical-replication-slots";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogicalReplicationSlot {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    pub project_id: String,
    pub name: String,
    pub datastore_id: String,
    pub database_id: String,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LogicalReplicationSlotCreateOpts {
    pub name: String,
    pub datastore_id: String,
    pub database_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogicalReplicationSlotQueryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datastore_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

pub async fn list_logical_replication_slots(
    client: &DbaasClient,
    params: Option<&LogicalReplicationSlotQueryParams>,
) -> Result<Vec<LogicalReplicationSlot>> {
    let uri = with_query(LOGICAL_REPLICATION_SLOTS_URI, params)?;
    let body = client.get(&uri).await?;
    unwrap_many(&body, SLOTS_KEY)
}

pub async fn get_logical_replication_slot(
    client: &DbaasClient,
    slot_id: &str,
) -> Result<LogicalReplicationSlot> {
    let body = client
        .get(&item_path(LOGICAL_REPLICATION_SLOTS_URI, slot_id))
        .await?;
    unwrap_one(&body, SLOT_KEY)
}

pub async fn create_logical_replication_slot(
    client: &DbaasClient,
    opts: &LogicalReplicationSlotCreateOpts,
) -> Result<LogicalReplicationSlot> {
    let body = client
        .post(LOGICAL_REPLICATION_SLOTS_URI, &envelope(SLOT_KEY, opts))
        .await?;
    unwrap_one(&body, SLOT_KEY)
}

pub async fn delete_logical_replication_slot(client: &DbaasClient, slot_id: &str) -> Result<()> {
    client
        .delete(&item_path(LOGICAL_REPLICATION_SLOTS_URI, slot_id))
        .await?;
    Ok(())
}
