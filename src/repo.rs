//! Create/edit over an ordered record collection keyed by `index`.

use crate::parse::{SpellFields, parse_spell_fields};
use serde_json::Value;
use tracing::warn;

/// The record collection for one request. Owned, returned whole afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpellRepository {
    records: Vec<Value>,
    schema: &'static [&'static str],
}

impl SpellRepository {
    pub fn new(records: Vec<Value>, schema: &'static [&'static str]) -> Self {
        Self { records, schema }
    }

    pub fn records(&self) -> &[Value] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Value> {
        self.records
    }

    /// Position of the first record whose `index` equals `index`.
    pub fn position(&self, index: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|r| r.get("index").and_then(Value::as_str) == Some(index))
    }

    /// Build a record from `fields` and append it. Returns its position.
    ///
    /// Duplicate identifiers are kept; a warning is logged.
    pub fn create(&mut self, fields: &SpellFields) -> usize {
        let record = parse_spell_fields(fields, self.schema);
        if let Some(index) = record.get("index").and_then(Value::as_str) {
            if let Some(existing) = self.position(index) {
                warn!(index, existing, "created spell duplicates an existing index");
            }
        }
        self.records.push(record);
        self.records.len() - 1
    }

    /// Replace the record identified by `target` with one rebuilt from `fields`.
    ///
    /// The rebuilt record keeps `target` as its `index` whatever name it
    /// carries. Returns the position replaced, or `None` if nothing matched.
    pub fn edit(&mut self, target: &str, fields: &SpellFields) -> Option<usize> {
        let pos = self.position(target)?;
        let mut record = parse_spell_fields(fields, self.schema);
        if record.get("index").and_then(Value::as_str) != Some(target) {
            record["index"] = Value::String(target.to_string());
        }
        self.records[pos] = record;
        Some(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SPELL_FIELDS;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn fields(v: Value) -> SpellFields {
        serde_json::from_value(v).unwrap()
    }

    fn seeded() -> Vec<Value> {
        vec![
            json!({ "index": "acid-arrow", "name": "Acid Arrow", "level": 2 }),
            json!({ "index": "bless", "name": "Bless", "level": 1 }),
            json!({ "index": "cure-wounds", "name": "Cure Wounds", "level": 1 }),
        ]
    }

    #[test]
    fn create_appends_and_keeps_prior_records() {
        let before = seeded();
        let mut repo = SpellRepository::new(before.clone(), SPELL_FIELDS);
        let pos = repo.create(&fields(json!({ "name": "Fire Bolt" })));

        assert_eq!(pos, 3);
        let after = repo.into_records();
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(&after[..3], &before[..]);
        assert_eq!(after[3]["index"], json!("fire-bolt"));
    }

    #[test]
    fn create_allows_duplicate_index() {
        let mut repo = SpellRepository::new(seeded(), SPELL_FIELDS);
        repo.create(&fields(json!({ "name": "Bless" })));
        let indexes: Vec<&str> = repo
            .records()
            .iter()
            .filter_map(|r| r["index"].as_str())
            .collect();
        assert_eq!(indexes, vec!["acid-arrow", "bless", "cure-wounds", "bless"]);
    }

    #[test]
    fn edit_replaces_in_place() {
        let mut repo = SpellRepository::new(seeded(), SPELL_FIELDS);
        let pos = repo.edit("bless", &fields(json!({ "name": "Bless", "level": "1" })));

        assert_eq!(pos, Some(1));
        let records = repo.into_records();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1]["index"], json!("bless"));
        assert_eq!(records[1]["level"], json!("1"));
        assert_eq!(records[1]["url"], json!("customized"));
        assert_eq!(records[0], seeded()[0]);
        assert_eq!(records[2], seeded()[2]);
    }

    #[test]
    fn edit_rename_keeps_identifier() {
        let mut repo = SpellRepository::new(seeded(), SPELL_FIELDS);
        repo.edit("bless", &fields(json!({ "name": "Greater Bless" })));
        let record = &repo.records()[1];
        assert_eq!(record["name"], json!("Greater Bless"));
        assert_eq!(record["index"], json!("bless"));
    }

    #[test]
    fn edit_without_name_keeps_identifier() {
        let mut repo = SpellRepository::new(seeded(), SPELL_FIELDS);
        repo.edit("bless", &fields(json!({ "school": "Enchantment" })));
        let record = &repo.records()[1];
        assert_eq!(record["index"], json!("bless"));
        assert_eq!(record["name"], Value::Null);
        assert_eq!(record["school"], json!({ "name": "Enchantment" }));
    }

    #[test]
    fn edit_missing_target_is_noop() {
        let mut repo = SpellRepository::new(seeded(), SPELL_FIELDS);
        assert_eq!(repo.edit("wish", &fields(json!({ "name": "Wish" }))), None);
        assert_eq!(repo.into_records(), seeded());
    }

    #[test]
    fn edit_first_match_wins() {
        let mut records = seeded();
        records.push(json!({ "index": "bless", "name": "Bless (homebrew)" }));
        let mut repo = SpellRepository::new(records, SPELL_FIELDS);
        assert_eq!(repo.edit("bless", &fields(json!({ "name": "Bless" }))), Some(1));
        assert_eq!(repo.records()[3]["name"], json!("Bless (homebrew)"));
    }
}
