//! Oracle request and response model

use crate::builder::{build_query, build_schema, build_variables};
use crate::combination::Combination;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value as JsonValue};

/// One execution request for the oracle engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleRequest {
    /// SDL document
    pub schema: String,

    /// Query document
    pub query: String,

    /// Variables mapping, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Map<String, JsonValue>>,
}

impl OracleRequest {
    /// Build the request for a combination
    pub fn from_combination(combination: &Combination) -> Self {
        Self {
            schema: build_schema(combination),
            query: build_query(combination),
            variables: build_variables(combination),
        }
    }
}

/// One error entry of an execution result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleErrorEntry {
    pub message: String,
}

/// Execution result as reported by the oracle.
///
/// `data` is `Some` whenever the engine reported the field at all, including
/// an explicit JSON `null`; only a missing field is `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OracleResponse {
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub data: Option<JsonValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<OracleErrorEntry>>,
}

fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<JsonValue>, D::Error>
where
    D: Deserializer<'de>,
{
    JsonValue::deserialize(deserializer).map(Some)
}

impl OracleResponse {
    /// Response carrying only data
    pub fn success(data: JsonValue) -> Self {
        Self {
            data: Some(data),
            errors: None,
        }
    }

    /// Response carrying only one error
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            data: None,
            errors: Some(vec![OracleErrorEntry {
                message: message.into(),
            }]),
        }
    }

    /// Message of the first reported error
    pub fn first_error_message(&self) -> Option<&str> {
        self.errors
            .as_ref()
            .and_then(|errors| errors.first())
            .map(|e| e.message.as_str())
    }
}

#[cfg(test)]
#[path = "response_test.rs"]
mod tests;
