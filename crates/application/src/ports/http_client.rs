//! HTTP Client port

use std::future::Future;
use std::pin::Pin;

use petstore_domain::{request::RequestSpec, response::ResponseSpec};
use thiserror::Error;

/// Errors an HTTP client can report for a single request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpClientError {
    /// The request did not complete in time.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout {
        /// Configured timeout.
        timeout_ms: u64,
    },

    /// The host name could not be resolved.
    #[error("DNS lookup failed for {host}: {message}")]
    DnsError {
        /// Host that failed to resolve.
        host: String,
        /// Underlying error message.
        message: String,
    },

    /// The server refused the connection.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Target host.
        host: String,
        /// Target port.
        port: u16,
    },

    /// The connection failed for another reason.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The redirect limit was exceeded.
    #[error("too many redirects (max {max})")]
    TooManyRedirects {
        /// Redirect limit.
        max: usize,
    },

    /// The request URL could not be built.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request body could not be built.
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// A fixture file referenced by the request is missing or unreadable.
    #[error("fixture {path}: {message}")]
    Fixture {
        /// Resolved fixture path.
        path: String,
        /// What went wrong.
        message: String,
    },

    /// Any other failure.
    #[error("{0}")]
    Other(String),
}

impl HttpClientError {
    /// Returns true when the failure happened before anything was sent.
    #[must_use]
    pub const fn is_setup_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidUrl(_) | Self::InvalidBody(_) | Self::Fixture { .. }
        )
    }
}

/// Port for executing HTTP requests.
///
/// This trait abstracts the HTTP client implementation, allowing
/// the application layer to be independent of specific HTTP libraries.
pub trait HttpClient: Send + Sync {
    /// Executes an HTTP request against the client's base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built, or fails due to
    /// network issues or a timeout.
    fn execute(
        &self,
        request: &RequestSpec,
    ) -> Pin<Box<dyn Future<Output = Result<ResponseSpec, HttpClientError>> + Send + '_>>;

    /// The base URL requests are resolved against.
    fn base_url(&self) -> &str;
}
