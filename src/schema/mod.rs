//! Schema layer: the recognized spell field set and default record construction.
//!
//! Record shape (every key always present):
//! {
//!   "index": null, "name": null, "url": null,
//!   "desc": [""], "higher_level": [], "components": [],
//!   "ritual": false, "concentration": false,
//!   "damage": {
//!     "damage_type": { "name": null },
//!     "damage_at_slot_level": {},
//!     "damage_at_character_level": {}
//!   },
//!   "school": { "name": null },
//!   "classes": [], "subclasses": [],
//!   ...any other recognized field: null
//! }

pub mod builder;
pub mod fields;

pub use builder::build_default_record;
pub use fields::SPELL_FIELDS;
