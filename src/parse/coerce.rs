//! Integer coercion for control codes such as `option`.

use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

/// Returned when a value is present but cannot be read as an integer.
pub const INVALID: i64 = -1;

// Optional sign, digits, single underscores allowed between digits.
static INT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+(?:_[0-9]+)*$").expect("integer pattern is valid"));

/// Read `map[key]` as an integer.
///
/// Missing or falsy (null, false, 0, "", [], {}) gives 0, a parseable value
/// gives its integer, anything else gives [`INVALID`]. Never fails.
pub fn coerce_int(map: &Map<String, Value>, key: &str) -> i64 {
    match map.get(key) {
        None => 0,
        Some(value) => coerce_value(value),
    }
}

pub fn coerce_value(value: &Value) -> i64 {
    match value {
        Value::Null => 0,
        Value::Bool(b) => i64::from(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i
            } else if let Some(f) = n.as_f64() {
                // Truncate toward zero; u64 values past i64::MAX land here too.
                let t = f.trunc();
                if t.is_finite() && t >= i64::MIN as f64 && t <= i64::MAX as f64 {
                    t as i64
                } else {
                    INVALID
                }
            } else {
                INVALID
            }
        }
        Value::String(s) => parse_int_str(s),
        Value::Array(items) if items.is_empty() => 0,
        Value::Object(fields) if fields.is_empty() => 0,
        Value::Array(_) | Value::Object(_) => INVALID,
    }
}

fn parse_int_str(s: &str) -> i64 {
    if s.is_empty() {
        return 0;
    }
    let trimmed = s.trim();
    if !INT_RE.is_match(trimmed) {
        return INVALID;
    }
    trimmed.replace('_', "").parse::<i64>().unwrap_or(INVALID)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn coerce(v: Value) -> i64 {
        let mut map = Map::new();
        map.insert("option".to_string(), v);
        coerce_int(&map, "option")
    }

    #[test]
    fn missing_and_falsy_are_zero() {
        assert_eq!(coerce_int(&Map::new(), "option"), 0);
        assert_eq!(coerce(Value::Null), 0);
        assert_eq!(coerce(json!("")), 0);
        assert_eq!(coerce(json!(false)), 0);
        assert_eq!(coerce(json!(0)), 0);
        assert_eq!(coerce(json!([])), 0);
        assert_eq!(coerce(json!({})), 0);
    }

    #[test]
    fn numeric_values() {
        assert_eq!(coerce(json!(1)), 1);
        assert_eq!(coerce(json!(2)), 2);
        assert_eq!(coerce(json!(-7)), -7);
        assert_eq!(coerce(json!(2.9)), 2);
        assert_eq!(coerce(json!(-1.5)), -1);
        assert_eq!(coerce(json!(true)), 1);
    }

    #[test]
    fn numeric_strings() {
        assert_eq!(coerce(json!("1")), 1);
        assert_eq!(coerce(json!(" 2 ")), 2);
        assert_eq!(coerce(json!("+3")), 3);
        assert_eq!(coerce(json!("-4")), -4);
        assert_eq!(coerce(json!("1_000")), 1000);
    }

    #[test]
    fn unparseable_is_invalid() {
        assert_eq!(coerce(json!("abc")), INVALID);
        assert_eq!(coerce(json!("2.0")), INVALID);
        assert_eq!(coerce(json!("   ")), INVALID);
        assert_eq!(coerce(json!("1__0")), INVALID);
        assert_eq!(coerce(json!("99999999999999999999")), INVALID);
        assert_eq!(coerce(json!([1])), INVALID);
        assert_eq!(coerce(json!({ "a": 1 })), INVALID);
    }
}
