//! Application layer for the Quests context.

pub mod command_handlers;
pub mod query_handlers;
