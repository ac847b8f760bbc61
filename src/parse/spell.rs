//! Normalization of flat user-entered fields into the nested spell record.

use crate::parse::fields::SpellFields;
use crate::schema::build_default_record;
use crate::schema::fields::{
    CUSTOM_URL, DAMAGE_AT_CHARACTER_LEVEL, DAMAGE_AT_SLOT_LEVEL, DAMAGE_TYPE,
};
use serde_json::{Map, Value, json};
use tracing::warn;

/// Fields copied verbatim from input to record.
const COPIED_FIELDS: &[&str] = &[
    "name",
    "level",
    "range",
    "casting_time",
    "duration",
    "attack_type",
    "material",
];

/// Which damage table `damage_values` lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scaling {
    Slot,
    Character,
}

impl Scaling {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "slot" | DAMAGE_AT_SLOT_LEVEL => Some(Scaling::Slot),
            "character" | DAMAGE_AT_CHARACTER_LEVEL => Some(Scaling::Character),
            _ => None,
        }
    }

    pub fn table(self) -> &'static str {
        match self {
            Scaling::Slot => DAMAGE_AT_SLOT_LEVEL,
            Scaling::Character => DAMAGE_AT_CHARACTER_LEVEL,
        }
    }
}

/// Derive a record identifier from a display name: "Fire Bolt" => "fire-bolt".
pub fn derive_index(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Build one spell record from `input`, starting from the defaults for `schema`.
///
/// Every rule applies independently; keys missing from `input` keep their
/// default. Never fails: malformed pieces are dropped with a warning.
pub fn parse_spell_fields(input: &SpellFields, schema: &[&str]) -> Value {
    let mut record = Value::Object(build_default_record(schema));

    for &key in COPIED_FIELDS {
        if let Some(v) = input.get(key) {
            record[key] = Value::String(v.into_owned());
        }
    }

    if let Some(name) = input.get("name") {
        record["index"] = Value::String(derive_index(&name));
        record["url"] = Value::String(CUSTOM_URL.to_string());
    }

    if let Some(desc) = input.get("desc") {
        record["desc"] = json!([desc]);
    }

    if let Some(higher) = input.get("higher_level") {
        if !higher.is_empty() {
            record["higher_level"] = json!([higher]);
        }
    }

    record["concentration"] = Value::Bool(input.is_yes("concentration"));
    record["ritual"] = Value::Bool(input.is_yes("ritual"));

    if let Some(components) = input.get("components") {
        let pieces: Vec<Value> = components
            .split(',')
            .map(|p| Value::String(p.trim().to_string()))
            .collect();
        record["components"] = Value::Array(pieces);
    }

    if input.is_yes("has_damage") {
        apply_damage(&mut record, input);
    }

    if let Some(school) = input.get("school") {
        record["school"]["name"] = Value::String(school.into_owned());
    }

    for key in ["classes", "subclasses"] {
        if let Some(list) = input.get(key) {
            append_named(&mut record[key], &list);
        }
    }

    record
}

fn apply_damage(record: &mut Value, input: &SpellFields) {
    if let Some(kind) = input.get(DAMAGE_TYPE) {
        record["damage"][DAMAGE_TYPE]["name"] = Value::String(kind.into_owned());
    }

    let Some(raw) = input.get("damage_values") else {
        return;
    };
    let scaling_type = input.get("scaling_type");
    let Some(scaling) = scaling_type.as_deref().and_then(Scaling::parse) else {
        warn!(
            scaling_type = scaling_type.as_deref().unwrap_or(""),
            "unknown scaling_type, damage values dropped"
        );
        return;
    };
    let values: Map<String, Value> = match serde_json::from_str(&raw) {
        Ok(v) => v,
        Err(err) => {
            warn!(error = %err, "malformed damage_values, damage values dropped");
            return;
        }
    };

    let table = &mut record["damage"][scaling.table()];
    if !table.is_object() {
        *table = Value::Object(Map::new());
    }
    if let Value::Object(table) = table {
        for (level, damage) in values {
            table.insert(level, damage);
        }
    }
}

/// Append `{name}` entries for each non-blank comma-separated segment.
fn append_named(target: &mut Value, list: &str) {
    if !target.is_array() {
        *target = Value::Array(vec![]);
    }
    if let Value::Array(items) = target {
        items.extend(
            list.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| json!({ "name": s })),
        );
    }
}
