//! DBaaS Client
//!
//! Main client for the DBaaS API. Owns the token and endpoint, runs every
//! request through [`DbaasClient::execute`] and decodes response envelopes.

use super::http::{sanitize_for_log, DbaasHttpClient};
use crate::error::{ApiErrorEnvelope, DbaasError, Result};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use url::Url;

/// Request body handed to [`DbaasClient::execute`]
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Already-encoded JSON, sent as-is
    Raw(Vec<u8>),
}

impl Payload {
    /// Serialize a value to a JSON payload
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        serde_json::to_vec(value)
            .map(Payload::Raw)
            .map_err(DbaasError::Encode)
    }

    fn into_bytes(self) -> Vec<u8> {
        match self {
            Payload::Raw(bytes) => bytes,
        }
    }
}

/// Main DBaaS client
#[derive(Clone)]
pub struct DbaasClient {
    http: DbaasHttpClient,
    token: String,
    endpoint: String,
}

impl DbaasClient {
    /// Create a client with a default HTTP stack
    pub fn new(token: impl Into<String>, endpoint: &str) -> Result<Self> {
        let http = DbaasHttpClient::new()?;
        Self::build(http, token.into(), endpoint)
    }

    /// Create a client on top of a caller-configured `reqwest::Client`
    pub fn with_http_client(
        client: reqwest::Client,
        token: impl Into<String>,
        endpoint: &str,
    ) -> Result<Self> {
        Self::build(DbaasHttpClient::with_client(client), token.into(), endpoint)
    }

    fn build(http: DbaasHttpClient, token: String, endpoint: &str) -> Result<Self> {
        Url::parse(endpoint).map_err(|source| DbaasError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            source,
        })?;

        Ok(Self {
            http,
            token,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build the full URL for an API path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint, path)
    }

    /// Run one request and classify the response.
    /// Returns the raw body of a 2xx/3xx response.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        payload: Option<Payload>,
    ) -> Result<Vec<u8>> {
        tracing::debug!("{} {}", method, path);

        let url = self.url(path);
        let response = match self
            .http
            .send(method.clone(), &url, &self.token, payload.map(Payload::into_bytes))
            .await
        {
            Ok(response) => response,
            Err(err) => {
                tracing::error!("{} {} failed: {}", method, path, err);
                return Err(err);
            }
        };

        let status = response.status;

        if status.is_server_error() {
            let body = String::from_utf8_lossy(&response.body).into_owned();
            // Security: Only log sanitized/truncated error body to avoid leaking sensitive data
            tracing::error!("API error: {} - {}", status, sanitize_for_log(&body));
            return Err(DbaasError::Server {
                status: status.as_u16(),
                body,
                path: path.to_string(),
            });
        }

        if status.is_client_error() {
            return Err(
                match serde_json::from_slice::<ApiErrorEnvelope>(&response.body) {
                    Ok(envelope) => DbaasError::Api(envelope.error),
                    Err(source) => DbaasError::UnexpectedResponse {
                        status: status.as_u16(),
                        body: String::from_utf8_lossy(&response.body).into_owned(),
                        source,
                    },
                },
            );
        }

        Ok(response.body)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Vec<u8>> {
        self.execute(Method::GET, path, None).await
    }

    /// Make a POST request with a JSON body
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Vec<u8>> {
        self.execute(Method::POST, path, Some(Payload::json(body)?))
            .await
    }

    /// Make a PUT request with a JSON body
    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Vec<u8>> {
        self.execute(Method::PUT, path, Some(Payload::json(body)?))
            .await
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> Result<Vec<u8>> {
        self.execute(Method::DELETE, path, None).await
    }

    /// Make a DELETE request that carries a JSON body
    pub async fn delete_with_body<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Vec<u8>> {
        self.execute(Method::DELETE, path, Some(Payload::json(body)?))
            .await
    }
}

impl fmt::Debug for DbaasClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbaasClient")
            .field("endpoint", &self.endpoint)
            .field("token", &"<redacted>")
            .field("user_agent", &self.http.user_agent())
            .finish()
    }
}

fn decode_error(key: &str, source: serde_json::Error) -> DbaasError {
    DbaasError::Decode {
        context: key.to_string(),
        source,
    }
}

fn envelope_entry(body: &[u8], key: &str) -> Result<Option<Value>> {
    let mut object: serde_json::Map<String, Value> =
        serde_json::from_slice(body).map_err(|e| decode_error(key, e))?;
    Ok(object.remove(key))
}

/// Decode `{"<key>": {...}}` into `T`
pub fn unwrap_one<T: DeserializeOwned>(body: &[u8], key: &str) -> Result<T> {
    let value = envelope_entry(body, key)?.ok_or_else(|| {
        decode_error(
            key,
            serde::de::Error::custom(format!("missing `{}` envelope", key)),
        )
    })?;

    serde_json::from_value(value).map_err(|e| decode_error(key, e))
}

/// Decode `{"<key>": [...]}` into `Vec<T>`. A missing or null list is empty.
pub fn unwrap_many<T: DeserializeOwned>(body: &[u8], key: &str) -> Result<Vec<T>> {
    match envelope_entry(body, key)? {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(value) => serde_json::from_value(value).map_err(|e| decode_error(key, e)),
    }
}
