//! Parsing of user-submitted values: control-code coercion and spell field
//! normalization.

pub mod coerce;
pub mod fields;
pub mod spell;

pub use coerce::coerce_int;
pub use fields::SpellFields;
pub use spell::parse_spell_fields;
