use std::borrow::Cow;
use std::fmt;

use schemars::{json_schema, JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::InvalidStateCode;

// ============================================================================
// National Weather Service API Models
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct AlertResponse {
    #[serde(default, deserialize_with = "lenient_features")]
    pub features: Vec<AlertFeature>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AlertFeature {
    #[serde(default)]
    pub properties: Option<AlertProperties>,
}

impl AlertFeature {
    /// Best-effort conversion: entries that don't look like a feature render
    /// with every field unknown instead of failing the whole response.
    fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AlertProperties {
    #[serde(default, deserialize_with = "lenient_string")]
    pub event: Option<String>,
    #[serde(default, rename = "areaDesc", deserialize_with = "lenient_string")]
    pub area_desc: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub severity: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub headline: Option<String>,
}

fn lenient_features<'de, D>(deserializer: D) -> Result<Vec<AlertFeature>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(AlertFeature::from_value)
        .collect())
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

/// Two-letter state or territory code, always held upper-cased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StateCode(String);

impl StateCode {
    pub fn parse(raw: &str) -> Result<Self, InvalidStateCode> {
        let len = raw.chars().count();
        if len != 2 {
            return Err(InvalidStateCode(len));
        }
        Ok(Self(raw.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StateCode {
    type Error = InvalidStateCode;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<StateCode> for String {
    fn from(code: StateCode) -> Self {
        code.0
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl JsonSchema for StateCode {
    fn inline_schema() -> bool {
        true
    }

    fn schema_name() -> Cow<'static, str> {
        "StateCode".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "minLength": 2,
            "maxLength": 2,
            "description": "Two-letter state code"
        })
    }
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetAlertsRequest {
    pub state: StateCode,
}
