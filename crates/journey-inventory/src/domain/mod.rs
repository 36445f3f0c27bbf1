//! Domain layer for the Inventory & Equipment context.

pub mod aggregates;
pub mod catalog;
pub mod item;
