//! Recognized second-level spell fields and the key names used inside records.

/// Ordered list of fields every spell record carries.
pub const SPELL_FIELDS: &[&str] = &[
    "index",
    "name",
    "url",
    "desc",
    "higher_level",
    "range",
    "components",
    "material",
    "area_of_effect",
    "ritual",
    "duration",
    "concentration",
    "casting_time",
    "level",
    "attack_type",
    "damage",
    "school",
    "classes",
    "subclasses",
];

pub const DAMAGE_TYPE: &str = "damage_type";
pub const DAMAGE_AT_SLOT_LEVEL: &str = "damage_at_slot_level";
pub const DAMAGE_AT_CHARACTER_LEVEL: &str = "damage_at_character_level";

/// Marks records produced by this service rather than imported from the SRD.
pub const CUSTOM_URL: &str = "customized";
