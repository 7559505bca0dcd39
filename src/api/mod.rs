//! DBaaS API interaction module
//!
//! Core plumbing shared by every resource client: the HTTP transport, the
//! request pipeline that turns responses into typed results or errors, the
//! list query encoder and datastore config coercion.
//!
//! # Module Structure
//!
//! - [`client`] - Main DBaaS client and response envelope decoding
//! - [`http`] - HTTP transport for REST API calls
//! - [`query`] - Query string encoding for list filters
//! - [`coerce`] - Typed datastore configuration values
//!
//! # Example
//!
//! ```no_run
//! use dbaas::api::client::DbaasClient;
//!
//! async fn example() -> dbaas::Result<()> {
//!     let client = DbaasClient::new("token", "https://ru-1.dbaas.selcloud.ru/v1")?;
//!     let datastores = dbaas::resource::list_datastores(&client, None).await?;
//!     println!("{} datastores", datastores.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod coerce;
pub mod http;
pub mod query;

pub use client::{unwrap_many, unwrap_one, DbaasClient, Payload};
pub use coerce::{coerce_config, ConfigMap, ConfigValue};
pub use query::with_query;
