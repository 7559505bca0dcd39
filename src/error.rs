//! Error Handling
//!
//! A single error type for every DBaaS API call. Errors fall into a small set of
//! categories so callers can branch on them without string matching:
//!
//! - `Transport`: the HTTP exchange itself could not complete
//! - `Server`: the API answered with a 5xx status
//! - `Client`: the API answered with a 4xx status (usually a structured [`ApiError`])
//! - `Decode`: a successful response did not have the expected shape
//! - `Validation`: the request was rejected locally before anything was sent

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, DbaasError>;

/// Structured error body returned by the API for 4xx responses
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
}

impl ApiError {
    pub const NOT_FOUND_TITLE: &'static str = "Not Found";
    pub const BAD_REQUEST_TITLE: &'static str = "Bad Request";

    pub fn is_not_found(&self) -> bool {
        self.code == 404
    }

    pub fn is_bad_request(&self) -> bool {
        self.code == 400
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}. Code: {}", self.title, self.message, self.code)
    }
}

impl std::error::Error for ApiError {}

/// Wire shape: `{"error": {"code": .., "title": .., "message": ..}}`
#[derive(Deserialize)]
pub(crate) struct ApiErrorEnvelope {
    pub(crate) error: ApiError,
}

/// Broad classification of a [`DbaasError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Transport,
    Server,
    Client,
    Decode,
    Validation,
}

/// Main error type for DBaaS operations
#[derive(Error, Debug)]
pub enum DbaasError {
    /// The request never produced a response (DNS, refused connection, reset, ...)
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// 5xx response. The body is kept raw since its shape is not guaranteed.
    #[error("http status {status}: service failed.\n{body}\n{path}")]
    Server {
        status: u16,
        body: String,
        path: String,
    },

    /// 4xx response carrying the API's structured error
    #[error(transparent)]
    Api(#[from] ApiError),

    /// 4xx response whose body is not an API error object
    #[error("can't unmarshal response (status {status}):\n{body}")]
    UnexpectedResponse {
        status: u16,
        body: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("error during unmarshal of `{context}`: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("error marshalling params to JSON: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("invalid {field} `{value}`: {source}")]
    InvalidId {
        field: &'static str,
        value: String,
        #[source]
        source: uuid::Error,
    },

    #[error("invalid endpoint `{endpoint}`: {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    #[error("unknown resource: {0}")]
    UnknownResource(String),

    #[error("invalid filter for {resource}: {detail}")]
    InvalidFilter { resource: String, detail: String },

    #[error("{resource} does not support {operation}")]
    Unsupported {
        resource: String,
        operation: &'static str,
    },
}

impl DbaasError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Transport(_) => ErrorCategory::Transport,
            Self::Server { .. } => ErrorCategory::Server,
            Self::Api(_) | Self::UnexpectedResponse { .. } => ErrorCategory::Client,
            Self::Decode { .. } => ErrorCategory::Decode,
            Self::Encode(_)
            | Self::InvalidId { .. }
            | Self::InvalidEndpoint { .. }
            | Self::UnknownResource(_)
            | Self::InvalidFilter { .. }
            | Self::Unsupported { .. } => ErrorCategory::Validation,
        }
    }

    /// HTTP status associated with the error, if the server answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } | Self::UnexpectedResponse { status, .. } => Some(*status),
            Self::Api(err) => Some(err.code),
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    pub fn is_bad_request(&self) -> bool {
        self.status_code() == Some(400)
    }

    /// Short message for terminal display.
    /// Security: never echoes raw server bodies or the request path.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(err) => match err.code {
                401 => "Authentication failed. Check your DBaaS token.".to_string(),
                403 => "Permission denied for this project.".to_string(),
                404 => format!("Resource not found: {}", sanitize_message(&err.message)),
                409 => "Resource conflict. The resource may already exist or be in use.".to_string(),
                429 => "Rate limit exceeded. Please try again later.".to_string(),
                _ => format!("{}: {}", err.title, sanitize_message(&err.message)),
            },
            Self::Server { status, .. } => {
                format!("DBaaS service failed (HTTP {}). Please try again.", status)
            }
            Self::Transport(_) => {
                "Request failed. Check your network connection and endpoint.".to_string()
            }
            Self::UnexpectedResponse { status, .. } => {
                format!("Request rejected with HTTP {}.", status)
            }
            Self::Decode { context, .. } => format!("Unexpected response shape for `{}`.", context),
            other => sanitize_message(&other.to_string()),
        }
    }
}

/// Keep printable ASCII only and cap the length
fn sanitize_message(message: &str) -> String {
    const MAX_LEN: usize = 160;

    let sanitized: String = message
        .chars()
        .filter(|c| c.is_ascii_graphic() || *c == ' ')
        .take(MAX_LEN)
        .collect();

    if sanitized.len() < message.len() && sanitized.len() == MAX_LEN {
        format!("{}...", sanitized)
    } else {
        sanitized
    }
}
