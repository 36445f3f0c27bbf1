//! Journey Through Scripture — Character context.
//!
//! Responsible for the stat block, class archetypes, callings, health and
//! mana pools, experience and leveling, inventory and equipment ownership,
//! the read-only character sheet, and the save record.

pub mod application;
pub mod domain;

pub use application::persistence::CharacterRecord;
pub use application::query_handlers::{CharacterSheet, get_character_sheet};
pub use domain::aggregates::Character;
pub use domain::archetypes::{Calling, CharacterClass, ClassDefinition};
pub use domain::modifiers::{ModifierExpiry, StatModifier};
pub use domain::stats::StatBlock;
