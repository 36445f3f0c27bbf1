//! Application layer for the Dialogue context.

pub mod command_handlers;
