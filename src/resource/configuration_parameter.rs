//! Configuration parameters a datastore type accepts
//!
//! Bounds, defaults and choices depend on the parameter's `type` (int, float,
//! bool, str), so they are kept as raw JSON values.

use super::item_path;
use crate::api::{unwrap_many, unwrap_one, DbaasClient};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const CONFIGURATION_PARAMETERS_URI: &str = "/configuration-parameters";

const PARAMETER_KEY: &str = "configuration-parameter";
const PARAMETERS_KEY: &str = "configuration-parameters";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigurationParameter {
    pub id: String,
    pub datastore_type_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
    pub unit: String,
    pub min: Value,
    pub max: Value,
    pub default_value: Value,
    pub choices: Option<Vec<Value>>,
    pub invalid_values: Option<Vec<Value>>,
    pub is_restart_required: bool,
    pub is_changeable: bool,
}

pub async fn list_configuration_parameters(
    client: &DbaasClient,
) -> Result<Vec<ConfigurationParameter>> {
    let body = client.get(CONFIGURATION_PARAMETERS_URI).await?;
    unwrap_many(&body, PARAMETERS_KEY)
}

pub async fn get_configuration_parameter(
    client: &DbaasClient,
    parameter_id: &str,
) -> Result<ConfigurationParameter> {
    let body = client
        .get(&item_path(CONFIGURATION_PARAMETERS_URI, parameter_id))
        .await?;
    unwrap_one(&body, PARAMETER_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_any_typed_fields() {
        let param: ConfigurationParameter = serde_json::from_value(json!({
            "name": "concurrent_insert",
            "type": "str",
            "choices": ["NEVER", "AUTO", "ALWAYS", "0", "1", "2"],
            "min": null,
            "max": null,
            "default_value": "AUTO",
            "is_changeable": true
        }))
        .unwrap();

        assert_eq!(param.param_type, "str");
        assert_eq!(param.choices.as_ref().map(Vec::len), Some(6));
        assert_eq!(param.default_value, json!("AUTO"));
        assert!(param.min.is_null());
        assert!(param.invalid_values.is_none());
    }
}
