//! Execute Request Use Case
//!
//! Validates a request and sends it through the `HttpClient` port.

use std::sync::Arc;

use petstore_domain::{request::RequestSpec, response::ResponseSpec};
use thiserror::Error;

use crate::ports::{HttpClient, HttpClientError};

/// Result type for request execution.
pub type ExecuteResult = Result<ResponseSpec, ExecuteRequestError>;

/// Error type for the execute request use case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecuteRequestError {
    /// Path is empty.
    #[error("request path is required")]
    EmptyPath,

    /// Path is not absolute.
    #[error("invalid path '{0}': must start with '/'")]
    InvalidPath(String),

    /// HTTP request failed.
    #[error("{0}")]
    HttpError(#[from] HttpClientError),
}

impl ExecuteRequestError {
    /// Returns true when the request was never sent.
    #[must_use]
    pub const fn is_setup_error(&self) -> bool {
        match self {
            Self::EmptyPath | Self::InvalidPath(_) => true,
            Self::HttpError(e) => e.is_setup_error(),
        }
    }
}

/// Use case for executing HTTP requests.
///
/// # Example
///
/// ```ignore
/// let http_client = ReqwestHttpClient::builder(base_url).build()?;
/// let use_case = ExecuteRequest::new(Arc::new(http_client));
///
/// let request = RequestSpec::get("inventory", "/store/inventory");
/// let response = use_case.execute(&request).await?;
/// ```
pub struct ExecuteRequest<C: HttpClient> {
    client: Arc<C>,
}

impl<C: HttpClient> ExecuteRequest<C> {
    /// Creates a new `ExecuteRequest` use case with the given HTTP client.
    pub const fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// The base URL of the underlying client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Executes the request and returns the response.
    ///
    /// # Errors
    ///
    /// Returns `ExecuteRequestError` on validation or HTTP failures.
    pub async fn execute(&self, request: &RequestSpec) -> ExecuteResult {
        Self::validate(request)?;

        let response = self.client.execute(request).await?;

        Ok(response)
    }

    fn validate(request: &RequestSpec) -> Result<(), ExecuteRequestError> {
        let path = request.path.trim();
        if path.is_empty() {
            return Err(ExecuteRequestError::EmptyPath);
        }
        if !path.starts_with('/') {
            return Err(ExecuteRequestError::InvalidPath(request.path.clone()));
        }
        Ok(())
    }
}
