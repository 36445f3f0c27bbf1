//! Journey Through Scripture — session driver error types.

use journey_core::error::DomainError;
use thiserror::Error;

/// Startup and runtime errors for the session driver.
#[derive(Debug, Error)]
pub enum AppError {
    /// An environment variable holds an invalid value.
    #[error("configuration error: {0}")]
    Config(String),

    /// The game core rejected the configured setup.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Writing the report failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The report could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_converts_and_keeps_message() {
        let err: AppError = DomainError::UnknownCreature("pharaoh".into()).into();

        assert!(matches!(err, AppError::Domain(_)));
        assert!(err.to_string().contains("pharaoh"));
    }

    #[test]
    fn test_config_error_message() {
        let err = AppError::Config("JOURNEY_MAX_ROUNDS must be a number".into());

        assert_eq!(
            err.to_string(),
            "configuration error: JOURNEY_MAX_ROUNDS must be a number"
        );
    }
}
