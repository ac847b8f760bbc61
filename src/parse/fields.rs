use serde::Deserialize;
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Flat mapping of user-entered field values, as submitted in `spell_fields`.
///
/// Leaves are expected to be strings. Numbers and booleans are read in their
/// JSON text form; null, lists and maps read as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct SpellFields(Map<String, Value>);

impl SpellFields {
    pub fn get(&self, key: &str) -> Option<Cow<'_, str>> {
        match self.0.get(key)? {
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::Bool(b) => Some(Cow::Owned(b.to_string())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// True when `key` is present and reads exactly `"yes"`.
    pub fn is_yes(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| v == "yes")
    }
}

impl From<Map<String, Value>> for SpellFields {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
