//! Client library for the Selectel DBaaS v1 REST API
//!
//! Every API call is a free async function in [`resource`] that takes a
//! [`DbaasClient`], performs exactly one HTTP round trip and returns a typed
//! result or a [`DbaasError`].
//!
//! # Example
//!
//! ```no_run
//! use dbaas::resource::{create_database, DatabaseCreateOpts};
//! use dbaas::DbaasClient;
//!
//! #[tokio::main]
//! async fn main() -> dbaas::Result<()> {
//!     let client = DbaasClient::new("token", "https://ru-1.dbaas.selcloud.ru/v1")?;
//!     let opts = DatabaseCreateOpts {
//!         datastore_id: "20d7bcf4-f8d6-4bf6-b8f6-46cb440a87f4".into(),
//!         owner_id: "20d7bcf4-f8d6-4bf6-b8f6-46cb440a87f4".into(),
//!         name: "db".into(),
//!         ..Default::default()
//!     };
//!     let database = create_database(&client, &opts).await?;
//!     println!("{} is {}", database.name, database.status);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod error;
pub mod resource;

pub use api::DbaasClient;
pub use error::{ApiError, DbaasError, ErrorCategory, Result};
