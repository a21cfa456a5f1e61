use super::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, SENTINEL};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// In-memory view of the settings file
///
/// Keys this crate does not know about are kept and written back untouched.
/// The [`SENTINEL`] string is only an on-disk encoding: [`get`](Self::get)
/// reports it as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsDocument {
    values: Map<String, Value>,
}

impl SettingsDocument {
    /// Document written to a fresh settings file: both tokens unset
    pub fn defaults() -> Self {
        let mut doc = Self::default();
        doc.values
            .insert(ACCESS_TOKEN_KEY.to_string(), Value::from(SENTINEL));
        doc.values
            .insert(REFRESH_TOKEN_KEY.to_string(), Value::from(SENTINEL));
        doc
    }

    /// Parse a JSON object
    pub fn from_json(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    /// Compact JSON encoding
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// String value for `key`, `None` when absent, non-string, or unset
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .and_then(Value::as_str)
            .filter(|value| *value != SENTINEL)
    }

    /// Raw string stored under `key`, sentinel included
    pub fn get_raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), Value::String(value.into()));
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Keys whose value is still the sentinel, in file order
    pub fn unset_keys(&self) -> Vec<&str> {
        self.values
            .iter()
            .filter(|(_, value)| value.as_str() == Some(SENTINEL))
            .map(|(key, _)| key.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Map<String, Value>> for SettingsDocument {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}
