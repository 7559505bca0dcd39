//! Datastore configuration values
//!
//! The API takes datastore configuration as a loosely typed JSON object, while
//! callers usually build it from strings (CLI flags, env, config files).
//! [`ConfigValue`] is the closed set of types the API accepts, and
//! [`ConfigValue::coerce`] is the one place where a string is reinterpreted.
//!
//! Coercion order is int, then float, then bool, then string. The order is part
//! of the contract: `"1"` always becomes the integer `1`, never `true` and never
//! the string `"1"`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Configuration parameters keyed by name
pub type ConfigMap = BTreeMap<String, ConfigValue>;

/// A single datastore configuration value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    String(String),
}

impl ConfigValue {
    /// Best-effort conversion of a string into the type it most likely represents
    pub fn coerce(raw: &str) -> Self {
        if let Ok(v) = raw.parse::<i64>() {
            return Self::Int(v);
        }
        // NaN and infinities have no JSON representation
        if let Ok(v) = raw.parse::<f64>() {
            if v.is_finite() {
                return Self::Float(v);
            }
        }
        if let Some(v) = parse_bool(raw) {
            return Self::Bool(v);
        }
        Self::String(raw.to_string())
    }

    /// Coerce string values, pass typed values through
    pub fn coerced(self) -> Self {
        match self {
            Self::String(s) => Self::coerce(&s),
            other => other,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Coerce every string value of a configuration map
pub fn coerce_config(config: ConfigMap) -> ConfigMap {
    config
        .into_iter()
        .map(|(name, value)| (name, value.coerced()))
        .collect()
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Bool(v) => write!(f, "{}", v),
            Self::String(v) => f.write_str(v),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
