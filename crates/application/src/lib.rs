//! Pet Store Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for the HTTP client and assertion evaluation)
//! - Request execution and ordered scenario runs

pub mod execute_request;
pub mod ports;
pub mod run_scenarios;

#[cfg(test)]
mod test_support;

pub use execute_request::{ExecuteRequest, ExecuteRequestError, ExecuteResult};
pub use ports::{AssertionEvaluator, HttpClient, HttpClientError};
pub use run_scenarios::RunScenarios;
