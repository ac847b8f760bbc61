use crate::schema::fields::{DAMAGE_AT_CHARACTER_LEVEL, DAMAGE_AT_SLOT_LEVEL, DAMAGE_TYPE};
use serde_json::{Map, Value, json};

/// Build a record where every name in `fields` maps to its type default.
///
/// Duplicate names collapse into one key. Unknown names get `null`.
pub fn build_default_record(fields: &[&str]) -> Map<String, Value> {
    let mut record = Map::new();
    for &field in fields {
        record.insert(field.to_string(), default_for(field));
    }
    record
}

fn default_for(field: &str) -> Value {
    match field {
        "damage" => json!({
            DAMAGE_TYPE: { "name": null },
            DAMAGE_AT_SLOT_LEVEL: {},
            DAMAGE_AT_CHARACTER_LEVEL: {},
        }),
        "school" => json!({ "name": null }),
        "classes" | "subclasses" | "higher_level" | "components" => Value::Array(vec![]),
        "concentration" | "ritual" => Value::Bool(false),
        "desc" => json!([""]),
        _ => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SPELL_FIELDS;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_recognized_field_is_present() {
        let record = build_default_record(SPELL_FIELDS);
        for field in SPELL_FIELDS {
            assert!(record.contains_key(*field), "missing {field}");
        }
        assert_eq!(record.len(), SPELL_FIELDS.len());
    }

    #[test]
    fn defaults_match_field_types() {
        let record = Value::Object(build_default_record(SPELL_FIELDS));
        assert_eq!(
            record["damage"],
            json!({
                "damage_type": { "name": null },
                "damage_at_slot_level": {},
                "damage_at_character_level": {},
            })
        );
        assert_eq!(record["school"], json!({ "name": null }));
        assert_eq!(record["desc"], json!([""]));
        assert_eq!(record["classes"], json!([]));
        assert_eq!(record["subclasses"], json!([]));
        assert_eq!(record["higher_level"], json!([]));
        assert_eq!(record["components"], json!([]));
        assert_eq!(record["ritual"], json!(false));
        assert_eq!(record["concentration"], json!(false));
        assert_eq!(record["index"], Value::Null);
        assert_eq!(record["area_of_effect"], Value::Null);
    }

    #[test]
    fn duplicate_and_unknown_names() {
        let record = build_default_record(&["url", "url", "mystery"]);
        assert_eq!(record.len(), 2);
        assert_eq!(record["mystery"], Value::Null);
    }
}
