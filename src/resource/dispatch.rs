//! Resource Dispatch
//!
//! Maps resource keys to the typed resource functions and hands results back
//! as JSON, so callers that only know a resource by name (the CLI) can list,
//! get and delete anything.

use super::*;
use crate::api::DbaasClient;
use crate::error::{DbaasError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// Every resource key accepted by the dispatch functions
pub const RESOURCE_KEYS: &[&str] = &[
    "datastores",
    "databases",
    "users",
    "acls",
    "grants",
    "topics",
    "extensions",
    "available-extensions",
    "flavors",
    "datastore-types",
    "configuration-parameters",
    "logical-replication-slots",
    "prometheus-metrics-tokens",
];

/// List a resource, applying `key=value` filters
pub async fn list_resource(
    client: &DbaasClient,
    resource_key: &str,
    filters: &[(String, String)],
) -> Result<Value> {
    tracing::debug!(
        "list_resource: resource={}, filters={}",
        resource_key,
        filters.len()
    );

    match resource_key {
        "datastores" => {
            let params: Option<DatastoreQueryParams> = parse_filters(resource_key, filters)?;
            to_json(list_datastores(client, params.as_ref()).await?)
        },
        "databases" => {
            let params: Option<DatabaseQueryParams> = parse_filters(resource_key, filters)?;
            to_json(list_databases(client, params.as_ref()).await?)
        },
        "users" => {
            let params: Option<UserQueryParams> = parse_filters(resource_key, filters)?;
            to_json(list_users(client, params.as_ref()).await?)
        },
        "acls" => {
            let params: Option<AclQueryParams> = parse_filters(resource_key, filters)?;
            to_json(list_acls(client, params.as_ref()).await?)
        },
        "grants" => {
            let params: Option<GrantQueryParams> = parse_filters(resource_key, filters)?;
            to_json(list_grants(client, params.as_ref()).await?)
        },
        "topics" => {
            let params: Option<TopicQueryParams> = parse_filters(resource_key, filters)?;
            to_json(list_topics(client, params.as_ref()).await?)
        },
        "extensions" => {
            let params: Option<ExtensionQueryParams> = parse_filters(resource_key, filters)?;
            to_json(list_extensions(client, params.as_ref()).await?)
        },
        "logical-replication-slots" => {
            let params: Option<LogicalReplicationSlotQueryParams> =
                parse_filters(resource_key, filters)?;
            to_json(list_logical_replication_slots(client, params.as_ref()).await?)
        },
        "available-extensions" => {
            reject_filters(resource_key, filters)?;
            to_json(list_available_extensions(client).await?)
        },
        "flavors" => {
            reject_filters(resource_key, filters)?;
            to_json(list_flavors(client).await?)
        },
        "datastore-types" => {
            reject_filters(resource_key, filters)?;
            to_json(list_datastore_types(client).await?)
        },
        "configuration-parameters" => {
            reject_filters(resource_key, filters)?;
            to_json(list_configuration_parameters(client).await?)
        },
        "prometheus-metrics-tokens" => {
            reject_filters(resource_key, filters)?;
            to_json(list_prometheus_metric_tokens(client).await?)
        },
        _ => Err(DbaasError::UnknownResource(resource_key.to_string())),
    }
}

/// Get a single resource by id
pub async fn get_resource(client: &DbaasClient, resource_key: &str, id: &str) -> Result<Value> {
    tracing::debug!("get_resource: resource={}, id={}", resource_key, id);

    match resource_key {
        "datastores" => to_json(get_datastore(client, id).await?),
        "databases" => to_json(get_database(client, id).await?),
        "users" => to_json(get_user(client, id).await?),
        "acls" => to_json(get_acl(client, id).await?),
        "grants" => to_json(get_grant(client, id).await?),
        "topics" => to_json(get_topic(client, id).await?),
        "extensions" => to_json(get_extension(client, id).await?),
        "available-extensions" => to_json(get_available_extension(client, id).await?),
        "flavors" => to_json(get_flavor(client, id).await?),
        "datastore-types" => to_json(get_datastore_type(client, id).await?),
        "configuration-parameters" => to_json(get_configuration_parameter(client, id).await?),
        "logical-replication-slots" => to_json(get_logical_replication_slot(client, id).await?),
        "prometheus-metrics-tokens" => to_json(get_prometheus_metric_token(client, id).await?),
        _ => Err(DbaasError::UnknownResource(resource_key.to_string())),
    }
}

/// Delete a resource by id
pub async fn delete_resource(client: &DbaasClient, resource_key: &str, id: &str) -> Result<()> {
    tracing::info!("delete_resource: resource={}, id={}", resource_key, id);

    match resource_key {
        "datastores" => delete_datastore(client, id).await,
        "databases" => delete_database(client, id).await,
        "users" => delete_user(client, id).await,
        "acls" => delete_acl(client, id).await,
        "grants" => delete_grant(client, id).await,
        "topics" => delete_topic(client, id).await,
        "extensions" => delete_extension(client, id).await,
        "logical-replication-slots" => delete_logical_replication_slot(client, id).await,
        "prometheus-metrics-tokens" => delete_prometheus_metric_token(client, id).await,
        "available-extensions" | "flavors" | "datastore-types" | "configuration-parameters" => {
            Err(DbaasError::Unsupported {
                resource: resource_key.to_string(),
                operation: "delete",
            })
        },
        _ => Err(DbaasError::UnknownResource(resource_key.to_string())),
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn to_json<T: Serialize>(value: T) -> Result<Value> {
    serde_json::to_value(value).map_err(DbaasError::Encode)
}

/// `true`/`false` become booleans only where the field accepts one
fn filter_value<Q: DeserializeOwned>(key: &str, raw: &str) -> Value {
    let typed = match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => return Value::String(raw.to_string()),
    };

    let mut single = Map::new();
    single.insert(key.to_string(), typed.clone());
    match serde_json::from_value::<Q>(Value::Object(single)) {
        Ok(_) => typed,
        Err(_) => Value::String(raw.to_string()),
    }
}

/// Build a query struct from `key=value` filters
fn parse_filters<Q: DeserializeOwned>(
    resource_key: &str,
    filters: &[(String, String)],
) -> Result<Option<Q>> {
    if filters.is_empty() {
        return Ok(None);
    }

    let map: Map<String, Value> = filters
        .iter()
        .map(|(key, raw)| (key.clone(), filter_value::<Q>(key, raw)))
        .collect();

    serde_json::from_value(Value::Object(map))
        .map(Some)
        .map_err(|err| DbaasError::InvalidFilter {
            resource: resource_key.to_string(),
            detail: err.to_string(),
        })
}

fn reject_filters(resource_key: &str, filters: &[(String, String)]) -> Result<()> {
    match filters.first() {
        None => Ok(()),
        Some((key, _)) => Err(DbaasError::InvalidFilter {
            resource: resource_key.to_string(),
            detail: format!("`{}` is not supported, this resource takes no filters", key),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filters(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_filters_empty() {
        let params: Option<DatastoreQueryParams> = parse_filters("datastores", &[]).unwrap();
        assert!(params.is_none());
    }

    #[test]
    fn test_parse_filters_typed() {
        let params: Option<DatastoreQueryParams> = parse_filters(
            "datastores",
            &filters(&[("enabled", "false"), ("status", "ACTIVE"), ("name", "db")]),
        )
        .unwrap();
        let params = params.unwrap();

        assert_eq!(params.enabled, Some(false));
        assert_eq!(params.status, Some(Status::Active));
        assert_eq!(params.name.as_deref(), Some("db"));
    }

    #[test]
    fn test_parse_filters_string_named_true() {
        let params: Option<UserQueryParams> =
            parse_filters("users", &filters(&[("name", "true")])).unwrap();
        assert_eq!(params.unwrap().name.as_deref(), Some("true"));
    }

    #[test]
    fn test_parse_filters_mixed_bool_and_string() {
        let params: Option<DatastoreQueryParams> = parse_filters(
            "datastores",
            &filters(&[("enabled", "false"), ("name", "true")]),
        )
        .unwrap();
        let params = params.unwrap();

        assert_eq!(params.enabled, Some(false));
        assert_eq!(params.name.as_deref(), Some("true"));
    }

    #[test]
    fn test_parse_filters_bad_bool_value() {
        let err = parse_filters::<DatastoreQueryParams>("datastores", &filters(&[("enabled", "yes")]))
            .unwrap_err();
        assert!(matches!(err, DbaasError::InvalidFilter { .. }));
    }

    #[test]
    fn test_parse_filters_unknown_key() {
        let err = parse_filters::<UserQueryParams>("users", &filters(&[("colour", "red")]))
            .unwrap_err();
        match err {
            DbaasError::InvalidFilter { resource, detail } => {
                assert_eq!(resource, "users");
                assert!(detail.contains("colour"));
            },
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_reject_filters() {
        assert!(reject_filters("flavors", &[]).is_ok());
        assert!(reject_filters("flavors", &filters(&[("name", "x")])).is_err());
    }

    #[test]
    fn test_unknown_resource_key() {
        let client = DbaasClient::new("token", "http://127.0.0.1:9").unwrap();
        let result = tokio_test::block_on(list_resource(&client, "backups", &[]));
        assert!(matches!(result, Err(DbaasError::UnknownResource(key)) if key == "backups"));
    }

    #[test]
    fn test_delete_read_only_resource() {
        let client = DbaasClient::new("token", "http://127.0.0.1:9").unwrap();
        let result = tokio_test::block_on(delete_resource(&client, "flavors", "id"));
        assert!(matches!(result, Err(DbaasError::Unsupported { .. })));
    }

    #[test]
    fn test_resource_keys_are_unique() {
        let mut keys = RESOURCE_KEYS.to_vec();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), RESOURCE_KEYS.len());
    }
}
