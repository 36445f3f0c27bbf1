//! Domain layer for the Character context.

pub mod aggregates;
pub mod archetypes;
pub mod modifiers;
pub mod stats;
