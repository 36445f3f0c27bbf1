//! Domain layer for the Quests context.

pub mod aggregates;
pub mod catalog;
pub mod events;
