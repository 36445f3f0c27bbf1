//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
///
/// Only configuration problems surface as errors. Invalid player actions are
/// recovered inside the owning object as logged no-ops.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A character was requested with a class archetype that does not exist.
    #[error("invalid character class: {0}")]
    UnknownClass(String),

    /// A calling outside the fixed set was chosen.
    #[error("invalid calling: {0}")]
    InvalidCalling(String),

    /// An enemy was requested from the bestiary under an unknown kind.
    #[error("unknown creature: {0}")]
    UnknownCreature(String),

    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),

    /// Embedded game content could not be loaded.
    #[error("content error: {0}")]
    Content(String),

    /// A save record could not be encoded or decoded.
    #[error("persistence error: {0}")]
    Persistence(String),
}
