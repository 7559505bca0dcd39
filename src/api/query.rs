//! Query string encoding for list endpoints

use crate::error::{DbaasError, Result};
use serde::Serialize;
use serde_json::Value;

/// Append the set fields of `params` to `path` as a query string.
///
/// `params` must serialize to a JSON object. Unset (`None`/null) fields are
/// skipped, keys come out sorted, and values are percent-encoded.
pub fn with_query<Q: Serialize>(path: &str, params: Option<&Q>) -> Result<String> {
    let Some(params) = params else {
        return Ok(path.to_string());
    };

    let Value::Object(map) = serde_json::to_value(params).map_err(DbaasError::Encode)? else {
        return Ok(path.to_string());
    };

    let mut query_parts: Vec<String> = Vec::new();

    for (key, value) in &map {
        let value = match value {
            Value::Null => continue,
            Value::String(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            other => other.to_string(),
        };
        query_parts.push(format!(
            "{}={}",
            urlencoding::encode(key),
            urlencoding::encode(&value)
        ));
    }

    if query_parts.is_empty() {
        Ok(path.to_string())
    } else if path.contains('?') {
        Ok(format!("{}&{}", path, query_parts.join("&")))
    } else {
        Ok(format!("{}?{}", path, query_parts.join("&")))
    }
}
