//! Datastores
//!
//! A datastore is a managed database cluster. Besides the usual CRUD calls it
//! exposes action sub-paths (resize, pooler, firewall, config, password,
//! backups, security groups, log platform). Every call that takes a datastore
//! id checks it is a UUID before sending anything.

use super::{envelope, item_path, null_as_default, DiskType, Status};
use crate::api::{
    coerce_config, unwrap_many, unwrap_one, with_query, ConfigMap, ConfigValue, DbaasClient,
};
use crate::error::{DbaasError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DATASTORES_URI: &str = "/datastores";

const DATASTORE_KEY: &str = "datastore";
const DATASTORES_KEY: &str = "datastores";

/// Node of a datastore cluster
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Instance {
    pub id: String,
    pub ip: String,
    pub floating_ip: String,
    pub role: String,
    pub role_name: String,
    pub status: Status,
    pub hostname: String,
    pub availability_zone: String,
}

/// Custom flavor of a datastore
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Flavor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_type: Option<DiskType>,
    pub vcpus: u32,
    pub ram: u32,
    pub disk: u32,
}

/// Restore source for a new datastore
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Restore {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datastore_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_time: Option<String>,
}

/// Connection pooler settings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Pooler {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

/// Options for [`update_datastore_pooler`]
pub type DatastorePoolerOpts = Pooler;

/// Allowed source address
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Firewall {
    pub ip: String,
}

/// Number of floating IPs to attach on creation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FloatingIps {
    pub master: u32,
    pub replica: u32,
}

/// Log platform target of a datastore
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogPlatform {
    pub log_group: String,
}

/// Options for [`enable_log_platform`]
pub type DatastoreLogPlatformOpts = LogPlatform;

/// Disk parameters for datastore creation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Disk {
    #[serde(rename = "type")]
    pub disk_type: String,
    pub size: u32,
}

/// Disk parameters for datastore resize
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResizeDisk {
    pub size: u32,
}

/// Datastore as returned by the API
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Datastore {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    pub creation_finished_at: String,
    pub project_id: String,
    pub name: String,
    pub type_id: String,
    pub subnet_id: String,
    pub flavor_id: String,
    pub status: Status,
    #[serde(deserialize_with = "null_as_default")]
    pub connection: BTreeMap<String, String>,
    #[serde(deserialize_with = "null_as_default")]
    pub firewall: Vec<Firewall>,
    #[serde(deserialize_with = "null_as_default")]
    pub instances: Vec<Instance>,
    /// Applied configuration. Parameters reset by the server come back as `None`.
    #[serde(deserialize_with = "null_as_default")]
    pub config: BTreeMap<String, Option<ConfigValue>>,
    #[serde(deserialize_with = "null_as_default")]
    pub pooler: Pooler,
    #[serde(deserialize_with = "null_as_default")]
    pub flavor: Flavor,
    pub node_count: u32,
    pub enabled: bool,
    pub allow_restore: bool,
    pub is_maintenance: bool,
    pub is_protected: bool,
    pub backup_retention_days: u32,
    pub databases_count: u32,
    pub topics_count: u32,
    pub disk_used: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub security_groups: Vec<String>,
    pub log_platform: Option<LogPlatform>,
}

/// Options for [`create_datastore`]
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DatastoreCreateOpts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavor: Option<Flavor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore: Option<Restore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pooler: Option<Pooler>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floating_ips: Option<FloatingIps>,
    #[serde(skip_serializing_if = "ConfigMap::is_empty")]
    pub config: ConfigMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk: Option<Disk>,
    pub type_id: String,
    pub subnet_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavor_id: Option<String>,
    pub project_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redis_password: Option<String>,
    pub name: String,
    pub node_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_retention_days: Option<u32>,
}

/// Options for [`update_datastore`]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DatastoreUpdateOpts {
    pub name: String,
}

/// Options for [`resize_datastore`]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DatastoreResizeOpts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavor: Option<Flavor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk: Option<ResizeDisk>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavor_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_count: Option<u32>,
}

/// Options for [`update_datastore_firewall`]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DatastoreFirewallOpts {
    pub ips: Vec<String>,
}

/// Options for [`update_datastore_config`]. Sent without an envelope.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DatastoreConfigOpts {
    pub config: ConfigMap,
}

/// Options for [`update_datastore_password`] (Redis only)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DatastorePasswordOpts {
    pub redis_password: String,
}

/// Options for [`update_datastore_backups`]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DatastoreBackupsOpts {
    pub backup_retention_days: u32,
}

/// Options for [`update_datastore_security_groups`]. Sent without an envelope.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DatastoreSecurityGroupOpts {
    pub security_groups: Vec<String>,
}

/// Filters for [`list_datastores`]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatastoreQueryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavor_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_restore: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_maintenance: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_protected: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
}

/// Reject anything that is not a UUID before it reaches the API
pub fn validate_datastore_id(datastore_id: &str) -> Result<()> {
    uuid::Uuid::parse_str(datastore_id)
        .map(|_| ())
        .map_err(|source| DbaasError::InvalidId {
            field: "datastore_id",
            value: datastore_id.to_string(),
            source,
        })
}

fn datastore_path(datastore_id: &str) -> Result<String> {
    validate_datastore_id(datastore_id)?;
    Ok(item_path(DATASTORES_URI, datastore_id))
}

fn action_path(datastore_id: &str, action: &str) -> Result<String> {
    Ok(format!("{}/{}", datastore_path(datastore_id)?, action))
}

/// List datastores
pub async fn list_datastores(
    client: &DbaasClient,
    params: Option<&DatastoreQueryParams>,
) -> Result<Vec<Datastore>> {
    let uri = with_query(DATASTORES_URI, params)?;
    let body = client.get(&uri).await?;
    unwrap_many(&body, DATASTORES_KEY)
}

/// Get a datastore by id
pub async fn get_datastore(client: &DbaasClient, datastore_id: &str) -> Result<Datastore> {
    let body = client.get(&datastore_path(datastore_id)?).await?;
    unwrap_one(&body, DATASTORE_KEY)
}

/// Create a datastore. String config values are coerced first.
pub async fn create_datastore(
    client: &DbaasClient,
    opts: &DatastoreCreateOpts,
) -> Result<Datastore> {
    let opts = DatastoreCreateOpts {
        config: coerce_config(opts.config.clone()),
        ..opts.clone()
    };
    let body = client
        .post(DATASTORES_URI, &envelope(DATASTORE_KEY, &opts))
        .await?;
    unwrap_one(&body, DATASTORE_KEY)
}

/// Rename a datastore
pub async fn update_datastore(
    client: &DbaasClient,
    datastore_id: &str,
    opts: &DatastoreUpdateOpts,
) -> Result<Datastore> {
    let path = datastore_path(datastore_id)?;
    let body = client.put(&path, &envelope(DATASTORE_KEY, opts)).await?;
    unwrap_one(&body, DATASTORE_KEY)
}

pub async fn delete_datastore(client: &DbaasClient, datastore_id: &str) -> Result<()> {
    client.delete(&datastore_path(datastore_id)?).await?;
    Ok(())
}

/// Change flavor, disk size or node count
pub async fn resize_datastore(
    client: &DbaasClient,
    datastore_id: &str,
    opts: &DatastoreResizeOpts,
) -> Result<Datastore> {
    let path = action_path(datastore_id, "resize")?;
    let body = client.post(&path, &envelope("resize", opts)).await?;
    unwrap_one(&body, DATASTORE_KEY)
}

pub async fn update_datastore_pooler(
    client: &DbaasClient,
    datastore_id: &str,
    opts: &DatastorePoolerOpts,
) -> Result<Datastore> {
    let path = action_path(datastore_id, "pooler")?;
    let body = client.put(&path, &envelope("pooler", opts)).await?;
    unwrap_one(&body, DATASTORE_KEY)
}

/// Replace the datastore's allowed source addresses
pub async fn update_datastore_firewall(
    client: &DbaasClient,
    datastore_id: &str,
    opts: &DatastoreFirewallOpts,
) -> Result<Datastore> {
    let path = action_path(datastore_id, "firewall")?;
    let body = client.put(&path, &envelope("firewall", opts)).await?;
    unwrap_one(&body, DATASTORE_KEY)
}

/// Update configuration parameters. String values are coerced first.
pub async fn update_datastore_config(
    client: &DbaasClient,
    datastore_id: &str,
    opts: &DatastoreConfigOpts,
) -> Result<Datastore> {
    let path = action_path(datastore_id, "config")?;
    let opts = DatastoreConfigOpts {
        config: coerce_config(opts.config.clone()),
    };
    let body = client.put(&path, &opts).await?;
    unwrap_one(&body, DATASTORE_KEY)
}

pub async fn update_datastore_password(
    client: &DbaasClient,
    datastore_id: &str,
    opts: &DatastorePasswordOpts,
) -> Result<Datastore> {
    let path = action_path(datastore_id, "password")?;
    let body = client.put(&path, &envelope("password", opts)).await?;
    unwrap_one(&body, DATASTORE_KEY)
}

pub async fn update_datastore_backups(
    client: &DbaasClient,
    datastore_id: &str,
    opts: &DatastoreBackupsOpts,
) -> Result<Datastore> {
    let path = action_path(datastore_id, "backups")?;
    let body = client.put(&path, &envelope("backups", opts)).await?;
    unwrap_one(&body, DATASTORE_KEY)
}

pub async fn update_datastore_security_groups(
    client: &DbaasClient,
    datastore_id: &str,
    opts: &DatastoreSecurityGroupOpts,
) -> Result<Datastore> {
    let path = action_path(datastore_id, "security-groups")?;
    let body = client.put(&path, opts).await?;
    unwrap_one(&body, DATASTORE_KEY)
}

/// Start shipping datastore logs to a log group
pub async fn enable_log_platform(
    client: &DbaasClient,
    datastore_id: &str,
    opts: &DatastoreLogPlatformOpts,
) -> Result<Datastore> {
    let path = action_path(datastore_id, "log-platform")?;
    let body = client.put(&path, &envelope("log_platform", opts)).await?;
    unwrap_one(&body, DATASTORE_KEY)
}

pub async fn disable_log_platform(client: &DbaasClient, datastore_id: &str) -> Result<()> {
    client
        .delete(&action_path(datastore_id, "log-platform")?)
        .await?;
    Ok(())
}
