//! Datastore users

use super::{envelope, item_path, Status};
use crate::api::{unwrap_many, unwrap_one, with_query, DbaasClient};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const USERS_URI: &str = "/users";

const USER_KEY: &str = "user";
const USERS_KEY: &str = "users";

/// User as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    pub project_id: String,
    pub datastore_id: String,
    pub name: String,
    pub status: Status,
}

/// Options for [`create_user`]
#[derive(Clone, PartialEq, Eq, Default, Serialize)]
pub struct UserCreateOpts {
    pub datastore_id: String,
    pub name: String,
    pub password: String,
}

/// Options for [`update_user`]
#[derive(Clone, PartialEq, Eq, Default, Serialize)]
pub struct UserUpdateOpts {
    pub password: String,
}

// Passwords stay out of logs and panics
impl fmt::Debug for UserCreateOpts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserCreateOpts")
            .field("datastore_id", &self.datastore_id)
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for UserUpdateOpts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserUpdateOpts")
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Filters for [`list_users`]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserQueryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datastore_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

pub async fn list_users(client: &DbaasClient, params: Option<&UserQueryParams>) -> Result<Vec<User>> {
    let uri = with_query(USERS_URI, params)?;
    let body = client.get(&uri).await?;
    unwrap_many(&body, USERS_KEY)
}

pub async fn get_user(client: &DbaasClient, user_id: &str) -> Result<User> {
    let body = client.get(&item_path(USERS_URI, user_id)).await?;
    unwrap_one(&body, USER_KEY)
}

pub async fn create_user(client: &DbaasClient, opts: &UserCreateOpts) -> Result<User> {
    let body = client.post(USERS_URI, &envelope(USER_KEY, opts)).await?;
    unwrap_one(&body, USER_KEY)
}

/// Change a user's password
pub async fn update_user(client: &DbaasClient, user_id: &str, opts: &UserUpdateOpts) -> Result<User> {
    let body = client
        .put(&item_path(USERS_URI, user_id), &envelope(USER_KEY, opts))
        .await?;
    unwrap_one(&body, USER_KEY)
}

pub async fn delete_user(client: &DbaasClient, user_id: &str) -> Result<()> {
    client.delete(&item_path(USERS_URI, user_id)).await?;
    Ok(())
}
