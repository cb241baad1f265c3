//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while building requests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provided URL is invalid or cannot carry a path.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request body is invalid for the given content type.
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// A path template placeholder has no matching parameter.
    #[error("missing path parameter '{name}' in '{template}'")]
    MissingPathParam {
        /// Placeholder name without braces.
        name: String,
        /// The full path template.
        template: String,
    },
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
