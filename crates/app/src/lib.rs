//! Pet Store API suite
//!
//! An ordered black-box test suite for the Swagger Pet Store REST API. The
//! scenario catalog lives in [`scenarios`]; [`run_suite`] wires it to the
//! reqwest adapter and the assertion runner.

pub mod config;
pub mod report;
pub mod scenarios;
pub mod telemetry;

use std::sync::Arc;

use petstore_application::{HttpClientError, RunScenarios};
use petstore_domain::{DomainError, RunReport, ScenarioPlan};
use petstore_infrastructure::{ReqwestHttpClient, TestRunner};

pub use config::{ConfigError, SuiteConfig};
pub use report::TextReport;
pub use scenarios::petstore_plan;

/// Errors that stop the suite before any scenario runs.
#[derive(Debug, thiserror::Error)]
pub enum SuiteError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The scenario catalog could not be built.
    #[error("failed to build scenario plan: {0}")]
    Plan(#[from] DomainError),

    /// The HTTP client could not be created.
    #[error("failed to create HTTP client: {0}")]
    Client(#[from] HttpClientError),
}

/// Builds the shared HTTP client described by `config`.
///
/// # Errors
///
/// Returns an error if the client cannot be created.
pub fn build_client(config: &SuiteConfig) -> Result<ReqwestHttpClient, HttpClientError> {
    let mut builder =
        ReqwestHttpClient::builder(config.base_url.clone()).fixtures_dir(&config.fixtures_dir);
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

/// Runs `plan` against the service described by `config`.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be created. Scenario failures
/// are reported in the returned [`RunReport`], never as an error.
pub async fn run_plan(config: &SuiteConfig, plan: &ScenarioPlan) -> Result<RunReport, SuiteError> {
    let client = Arc::new(build_client(config)?);
    Ok(RunScenarios::new(client, TestRunner).run(plan).await)
}

/// Runs the full pet-store catalog against the service described by `config`.
///
/// # Errors
///
/// Returns an error if the catalog or the HTTP client cannot be built.
pub async fn run_suite(config: &SuiteConfig) -> Result<RunReport, SuiteError> {
    let plan = petstore_plan()?;
    run_plan(config, &plan).await
}
