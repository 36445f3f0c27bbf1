//! Application layer for the Combat context.

pub mod query_handlers;
