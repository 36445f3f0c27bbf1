//! Application layer for the Character context: read projections and the
//! save-record contract.

pub mod persistence;
pub mod query_handlers;
