use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DATE_MODIFIED_KEY: &str = "dateModified";
pub const TIMESTAMP_KEY: &str = "timestamp";

/// One entry of `featured-card.json`.
///
/// Kept as a raw JSON object so unknown fields and key order survive a
/// rewrite untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Card(pub Map<String, Value>);

impl Card {
    /// `dateModified`, treating absent and falsy values (`null`, `""`,
    /// `false`, `0`, `[]`, `{}`) as unset.
    pub fn date_modified(&self) -> Result<Option<&str>> {
        match self.0.get(DATE_MODIFIED_KEY) {
            None => Ok(None),
            Some(value) if is_falsy(value) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => bail!("dateModified must be a string, got {}", other),
        }
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.0.get(TIMESTAMP_KEY).and_then(Value::as_str)
    }

    pub fn set_timestamp(&mut self, label: String) {
        self.0.insert(TIMESTAMP_KEY.to_string(), Value::String(label));
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
