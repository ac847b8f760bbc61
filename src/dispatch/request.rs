//! Decoded request shape.
//!
//! JSON shape:
//! {
//!   "option": 1,                 // 0 stop, 1 create, 2 edit; coerced, see parse::coerce
//!   "json_array": [ {...} ],     // full record collection
//!   "json_object": { "index": "bless", ... },   // edit target, only `index` is read
//!   "spell_fields": { "name": "Bless", ... }    // also accepted as "new_fields"
//! }

use crate::parse::{SpellFields, coerce_int};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Stop,
    Create,
    Edit,
    Unknown(i64),
}

impl From<i64> for Operation {
    fn from(code: i64) -> Self {
        match code {
            0 => Operation::Stop,
            1 => Operation::Create,
            2 => Operation::Edit,
            other => Operation::Unknown(other),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Request {
    pub code: i64,
    pub records: Option<Vec<Value>>,
    pub target: Option<Value>,
    pub fields: SpellFields,
}

impl Request {
    /// Split a decoded JSON object into operation code and payload.
    ///
    /// Never fails. A stop request ignores the payload; otherwise a
    /// non-array `json_array` reads as no collection and a non-object
    /// `spell_fields` reads as no fields.
    pub fn from_map(mut map: Map<String, Value>) -> Self {
        let code = coerce_int(&map, "option");
        if Operation::from(code) == Operation::Stop {
            return Request {
                code,
                ..Request::default()
            };
        }

        let records = match map.remove("json_array") {
            Some(Value::Array(records)) => Some(records),
            _ => None,
        };
        let target = map.remove("json_object").filter(|v| !v.is_null());
        let fields = match map.remove("spell_fields").or_else(|| map.remove("new_fields")) {
            Some(Value::Object(fields)) => SpellFields::from(fields),
            _ => SpellFields::default(),
        };
        Request {
            code,
            records,
            target,
            fields,
        }
    }

    pub fn operation(&self) -> Operation {
        Operation::from(self.code)
    }

    /// The edit target's identifier, if the request names one.
    pub fn target_index(&self) -> Option<&str> {
        self.target.as_ref()?.get("index")?.as_str()
    }
}
