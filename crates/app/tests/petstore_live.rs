//! Runs the catalog against a real pet-store service.
//!
//! Built only with `--features live-tests`. The target comes from
//! `PETSTORE_BASE_URL` and defaults to the public service.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use petstore_suite::{SuiteConfig, TextReport, run_suite};

#[tokio::test]
async fn test_catalog_passes_against_live_service() {
    let config = SuiteConfig::from_env().expect("valid PETSTORE_* environment");
    let report = run_suite(&config).await.expect("suite starts");

    assert_eq!(report.total(), 19);
    assert!(report.all_passed(), "{}", TextReport(&report));
}
