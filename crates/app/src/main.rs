//! Pet Store API suite binary.

use std::process::ExitCode;

use petstore_suite::{SuiteConfig, SuiteError, TextReport, run_suite, telemetry};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    telemetry::init_tracing();

    match run().await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!(error = %e, "suite could not start");
            ExitCode::from(2)
        }
    }
}

async fn run() -> Result<bool, SuiteError> {
    let config = SuiteConfig::from_env()?;
    tracing::info!(
        base_url = %config.base_url,
        fixtures_dir = %config.fixtures_dir.display(),
        "Starting Pet Store suite v{}",
        env!("CARGO_PKG_VERSION")
    );

    let report = run_suite(&config).await?;
    print!("{}", TextReport(&report));
    Ok(report.all_passed())
}
