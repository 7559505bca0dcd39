//! Resource clients
//!
//! One module per DBaaS resource kind. Each module defines the resource's
//! response struct, its request option structs, a `*_URI` constant and free
//! async functions that take a [`DbaasClient`](crate::api::DbaasClient).
//!
//! # Architecture
//!
//! - Typed modules ([`datastore`], [`database`], [`user`], ...) map one function
//!   to one endpoint
//! - [`dispatch`] - Maps resource keys (`"datastores"`, `"users"`, ...) to the
//!   typed list/get/delete functions for the CLI
//!
//! # Example
//!
//! ```no_run
//! use dbaas::api::DbaasClient;
//! use dbaas::resource::{list_databases, DatabaseQueryParams};
//!
//! async fn databases_of(client: &DbaasClient, datastore_id: &str) -> dbaas::Result<usize> {
//!     let params = DatabaseQueryParams {
//!         datastore_id: Some(datastore_id.to_string()),
//!         ..Default::default()
//!     };
//!     Ok(list_databases(client, Some(&params)).await?.len())
//! }
//! ```

pub mod acl;
pub mod available_extension;
pub mod configuration_parameter;
pub mod database;
pub mod datastore;
pub mod datastore_type;
pub mod dispatch;
pub mod extension;
pub mod flavor;
pub mod floating_ip;
pub mod grant;
pub mod logical_replication_slot;
pub mod prometheus_metrics_token;
pub mod topic;
pub mod user;

pub use acl::*;
pub use available_extension::*;
pub use configuration_parameter::*;
pub use database::*;
pub use datastore::*;
pub use datastore_type::*;
pub use dispatch::{delete_resource, get_resource, list_resource, RESOURCE_KEYS};
pub use extension::*;
pub use flavor::*;
pub use floating_ip::*;
pub use grant::*;
pub use logical_replication_slot::*;
pub use prometheus_metrics_token::*;
pub use topic::*;
pub use user::*;

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Lifecycle state shared by every stateful resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Active,
    Deleted,
    Degraded,
    DiskFull,
    Error,
    PendingCreate,
    PendingUpdate,
    PendingDelete,
    Down,
    Resizing,
    /// Any state this client does not know about yet
    #[default]
    #[serde(other)]
    Unknown,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "ACTIVE",
            Status::Deleted => "DELETED",
            Status::Degraded => "DEGRADED",
            Status::DiskFull => "DISK_FULL",
            Status::Error => "ERROR",
            Status::PendingCreate => "PENDING_CREATE",
            Status::PendingUpdate => "PENDING_UPDATE",
            Status::PendingDelete => "PENDING_DELETE",
            Status::Down => "DOWN",
            Status::Resizing => "RESIZING",
            Status::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Disk type of a datastore flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiskType {
    Local,
    NetworkUltra,
    /// Any disk type this client does not know about yet
    #[serde(other)]
    Unknown,
}

/// Treat an explicit JSON `null` like a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Request body wrapped in a single named key: `{"<key>": value}`
pub(crate) struct Envelope<'a, T: ?Sized> {
    key: &'a str,
    value: &'a T,
}

pub(crate) fn envelope<'a, T: ?Sized>(key: &'a str, value: &'a T) -> Envelope<'a, T> {
    Envelope { key, value }
}

impl<T: Serialize + ?Sized> Serialize for Envelope<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, self.value)?;
        map.end()
    }
}

/// Path of a single resource: `<uri>/<id>`
pub(crate) fn item_path(uri: &str, id: &str) -> String {
    format!("{}/{}", uri, id)
}
