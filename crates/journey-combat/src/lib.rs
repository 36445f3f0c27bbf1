//! Journey Through Scripture — Combat context.
//!
//! Responsible for the participant contract shared by the player and
//! enemies, the bestiary, the spell table, and the turn-based encounter
//! state machine with its published events and status projection.

pub mod application;
pub mod domain;

pub use application::query_handlers::{CombatStatus, get_combat_status};
pub use domain::aggregates::CombatEncounter;
pub use domain::bestiary::{CREATURE_KINDS, EnemyCharacter, spawn};
pub use domain::events::{CombatEvent, CombatEventKind, RejectionReason};
pub use domain::participant::{CombatParticipant, Side, resolve_strike};
pub use domain::spells::Spell;
