//! Port definitions (interfaces for external dependencies)

mod assertions;
mod http_client;

pub use assertions::AssertionEvaluator;
pub use http_client::{HttpClient, HttpClientError};
