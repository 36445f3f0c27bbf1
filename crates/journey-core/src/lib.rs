//! Journey Core — shared domain abstractions.
//!
//! This crate defines the fundamental traits and types that every game
//! context depends on: injectable randomness and time, the domain error
//! taxonomy, and the event envelope published to rendering/UI collaborators.
//! It contains no game rules.

pub mod clock;
pub mod error;
pub mod event;
pub mod publisher;
pub mod rng;
pub mod stats;
