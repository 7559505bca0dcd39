//! HTTP transport for DBaaS REST API calls

use crate::error::{DbaasError, Result};
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, StatusCode};

/// Header carrying the API token on every request
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// Default user agent sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!("dbaas/", env!("CARGO_PKG_VERSION"));

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Sanitize response body for logging
/// Truncates long responses and strips non-printable characters
pub(crate) fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        let mut cut = MAX_LOG_BODY_LENGTH;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}... [truncated, {} bytes total]", &body[..cut], body.len())
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// Raw response handed back to the request pipeline
#[derive(Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// HTTP client wrapper for DBaaS API calls
#[derive(Clone, Debug)]
pub struct DbaasHttpClient {
    client: Client,
    user_agent: String,
}

impl DbaasHttpClient {
    /// Create a new HTTP client
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(DbaasError::Transport)?;

        Ok(Self::with_client(client))
    }

    /// Wrap a caller-configured client (timeouts, proxies, TLS roots, ...)
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Send one request and read the whole body.
    /// Non-2xx statuses are not errors at this layer.
    pub async fn send(
        &self,
        method: Method,
        url: &str,
        token: &str,
        body: Option<Vec<u8>>,
    ) -> Result<RawResponse> {
        let mut request = self
            .client
            .request(method, url)
            .header(USER_AGENT, &self.user_agent)
            .header(AUTH_TOKEN_HEADER, token);

        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();

        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_short_body_unchanged() {
        assert_eq!(sanitize_for_log("internal error"), "internal error");
    }

    #[test]
    fn test_sanitize_strips_control_chars() {
        assert_eq!(sanitize_for_log("line1\nline2\t"), "line1line2");
    }

    #[test]
    fn test_sanitize_truncates_long_body() {
        let body = "a".repeat(1000);
        let out = sanitize_for_log(&body);
        assert!(out.starts_with(&"a".repeat(200)));
        assert!(out.ends_with("[truncated, 1000 bytes total]"));
    }

    #[test]
    fn test_user_agent_has_crate_name() {
        let http = DbaasHttpClient::with_client(Client::new());
        assert!(http.user_agent().starts_with("dbaas/"));
    }
}
