use serde::{Deserialize, Serialize};

/// The record exchanged with the host: `{"identifier": ..., "input": ...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepConfig {
    #[serde(default)]
    pub identifier: String,
    #[serde(default)]
    pub input: String,
}

impl StepConfig {
    pub fn new(identifier: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            input: input.into(),
        }
    }

    pub fn from_value(value: &serde_json::Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(value)
    }

    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "identifier": self.identifier,
            "input": self.input,
        })
    }
}
