//! Kafka topic ACLs

use super::{envelope, item_path, Status};
use crate::api::{unwrap_many, unwrap_one, with_query, DbaasClient};
use crate::error::Result;
use serde::{Deserialize, Serialize};

pub const ACLS_URI: &str = "/acls";

const ACL_KEY: &str = "acl";
const ACLS_KEY: &str = "acls";

/// ACL as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Acl {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    pub project_id: String,
    pub datastore_id: String,
    pub pattern: String,
    pub pattern_type: String,
    pub user_id: String,
    pub status: Status,
    pub allow_read: bool,
    pub allow_write: bool,
}

/// Options for [`create_acl`]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AclCreateOpts {
    pub datastore_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    pub pattern_type: String,
    pub user_id: String,
    pub allow_read: bool,
    pub allow_write: bool,
}

/// Options for [`update_acl`]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AclUpdateOpts {
    pub allow_read: bool,
    pub allow_write: bool,
}

/// Filters for [`list_acls`]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AclQueryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datastore_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

pub async fn list_acls(client: &DbaasClient, params: Option<&AclQueryParams>) -> Result<Vec<Acl>> {
    let uri = with_query(ACLS_URI, params)?;
    let body = client.get(&uri).await?;
    unwrap_many(&body, ACLS_KEY)
}

pub async fn get_acl(client: &DbaasClient, acl_id: &str) -> Result<Acl> {
    let body = client.get(&item_path(ACLS_URI, acl_id)).await?;
    unwrap_one(&body, ACL_KEY)
}

pub async fn create_acl(client: &DbaasClient, opts: &AclCreateOpts) -> Result<Acl> {
    let body = client.post(ACLS_URI, &envelope(ACL_KEY, opts)).await?;
    unwrap_one(&body, ACL_KEY)
}

/// Change read/write permissions of an ACL
pub async fn update_acl(client: &DbaasClient, acl_id: &str, opts: &AclUpdateOpts) -> Result<Acl> {
    let body = client
        .put(&item_path(ACLS_URI, acl_id), &envelope(ACL_KEY, opts))
        .await?;
    unwrap_one(&body, ACL_KEY)
}

pub async fn delete_acl(client: &DbaasClient, acl_id: &str) -> Result<()> {
    client.delete(&item_path(ACLS_URI, acl_id)).await?;
    Ok(())
}
