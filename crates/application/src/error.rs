//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
///
/// Every variant except `Configuration` is recoverable at the caller
/// boundary: the caller may prompt again or abort.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Upstream returned no geocoding hit or no route
    #[error("Not found: {0}")]
    NotFound(String),

    /// Network failure, timeout, or non-success HTTP status
    #[error("Transport error: {0}")]
    Transport(String),

    /// Upstream response could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// Missing or invalid configuration, including credentials
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Check whether the caller can carry on after this error
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Configuration(_))
    }

    /// Check if this error means "no result" rather than a failure
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_is_not_recoverable() {
        assert!(!ApplicationError::Configuration("no key".to_string()).is_recoverable());
    }

    #[test]
    fn lookup_failures_are_recoverable() {
        assert!(ApplicationError::NotFound("x".to_string()).is_recoverable());
        assert!(ApplicationError::Transport("x".to_string()).is_recoverable());
        assert!(ApplicationError::Parse("x".to_string()).is_recoverable());
        assert!(ApplicationError::Domain(DomainError::EmptyPlaceName).is_recoverable());
    }

    #[test]
    fn domain_error_is_transparent() {
        let err = ApplicationError::from(DomainError::EmptyPlaceName);
        assert_eq!(err.to_string(), "Place name must not be empty");
    }

    #[test]
    fn not_found_predicate() {
        assert!(ApplicationError::NotFound("Atlantis".to_string()).is_not_found());
        assert!(!ApplicationError::Parse("eof".to_string()).is_not_found());
    }
}
