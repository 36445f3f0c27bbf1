//! Domain layer for the Dialogue context.

pub mod aggregates;
pub mod npc;
