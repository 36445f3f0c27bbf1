//! Domain layer for the Combat context.

pub mod aggregates;
pub mod bestiary;
pub mod events;
pub mod participant;
pub mod spells;
