//! Kafka topics

use super::{envelope, item_path, Status};
use crate::api::{unwrap_many, unwrap_one, with_query, DbaasClient};
use crate::error::Result;
use serde::{Deserialize, Serialize};

pub const TOPICS_URI: &str = "/topics";

const TOPIC_KEY: &str = "topic";
const TOPICS_KEY: &str = "topics";

/// Topic as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Topic {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    pub project_id: String,
    pub datastore_id: String,
    pub name: String,
    pub status: Status,
    pub partitions: u16,
}

/// Options for [`create_topic`]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TopicCreateOpts {
    pub datastore_id: String,
    pub name: String,
    pub partitions: u16,
}

/// Options for [`update_topic`]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TopicUpdateOpts {
    pub partitions: u16,
}

/// Filters for [`list_topics`]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TopicQueryParams {
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

pub async fn list_topics(client: &DbaasClient, params: Option<&TopicQueryParams>) -> Result<Vec<Topic>> {
    let uri = with_query(TOPICS_URI, params)?;
    let body = client.get(&uri).await?;
    unwrap_many(&body, TOPICS_KEY)
}

pub async fn get_topic(client: &DbaasClient, topic_id: &str) -> Result<Topic> {
    let body = client.get(&item_path(TOPICS_URI, topic_id)).await?;
    unwrap_one(&body, TOPIC_KEY)
}

pub async fn create_topic(client: &DbaasClient, opts: &TopicCreateOpts) -> Result<Topic> {
    let body = client.post(TOPICS_URI, &envelope(TOPIC_KEY, opts)).await?;
    unwrap_one(&body, TOPIC_KEY)
}

/// Change the partition count of a topic
pub async fn update_topic(client: &DbaasClient, topic_id: &str, opts: &TopicUpdateOpts) -> Result<Topic> {
    let body = client
        .put(&item_path(TOPICS_URI, topic_id), &envelope(TOPIC_KEY, opts))
        .await?;
    unwrap_one(&body, TOPIC_KEY)
}

pub async fn delete_topic(client: &DbaasClient, topic_id: &str) -> Result<()> {
    client.delete(&item_path(TOPICS_URI, topic_id)).await?;
    Ok(())
}
