//! Tokens for the Prometheus metrics endpoint

use super::{envelope, item_path};
use crate::api::{unwrap_many, unwrap_one, DbaasClient};
use crate::error::Result;
use serde::{Deserialize, Serialize};

pub const PROMETHEUS_METRICS_TOKENS_URI: &str = "/prometheus-metrics-tokens";

const TOKEN_KEY: &str = "prometheus-metrics-token";
const TOKENS_KEY: &str = "prometheus-metrics-tokens";

/// Metrics token. `value` is the secret used to scrape metrics.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PrometheusMetricToken {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    pub project_id: String,
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PrometheusMetricTokenCreateOpts {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PrometheusMetricTokenUpdateOpts {
    pub name: String,
}

pub async fn list_prometheus_metric_tokens(client: &DbaasClient) -> Result<Vec<PrometheusMetricToken>> {
    let body = client.get(PROMETHEUS_METRICS_TOKENS_URI).await?;
    unwrap_many(&body, TOKENS_KEY)
}

pub async fn get_prometheus_metric_token(
    client: &DbaasClient,
    token_id: &str,
) -> Result<PrometheusMetricToken> {
    let body = client
        .get(&item_path(PROMETHEUS_METRICS_TOKENS_URI, token_id))
        .await?;
    unwrap_one(&body, TOKEN_KEY)
}

pub async fn create_prometheus_metric_token(
    client: &DbaasClient,
    opts: &PrometheusMetricTokenCreateOpts,
) -> Result<PrometheusMetricToken> {
    let body = client
        .post(PROMETHEUS_METRICS_TOKENS_URI, &envelope(TOKEN_KEY, opts))
        .await?;
    unwrap_one(&body, TOKEN_KEY)
}

/// Rename a token
pub async fn update_prometheus_metric_token(
    client: &DbaasClient,
    token_id: &str,
    opts: &PrometheusMetricTokenUpdateOpts,
) -> Result<PrometheusMetricToken> {
    let body = client
        .put(
            &item_path(PROMETHEUS_METRICS_TOKENS_URI, token_id),
            &envelope(TOKEN_KEY, opts),
        )
        .await?;
    unwrap_one(&body, TOKEN_KEY)
}

pub async fn delete_prometheus_metric_token(client: &DbaasClient, token_id: &str) -> Result<()> {
    client
        .delete(&item_path(PROMETHEUS_METRICS_TOKENS_URI, token_id))
        .await?;
    Ok(())
}
