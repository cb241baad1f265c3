//! Run Scenarios Use Case
//!
//! Executes a [`ScenarioPlan`] strictly in order, one request at a time,
//! against a single long-lived client. A failing scenario never stops the
//! run; every scenario gets a report entry.

use std::sync::Arc;
use std::time::Instant;

use petstore_domain::scenario::{
    RunReport, Scenario, ScenarioOutcome, ScenarioPlan, ScenarioReport,
};
use tracing::{Instrument, info, info_span, warn};

use crate::execute_request::ExecuteRequest;
use crate::ports::{AssertionEvaluator, HttpClient};

/// Use case for running an ordered scenario plan.
pub struct RunScenarios<C: HttpClient, E: AssertionEvaluator> {
    execute: ExecuteRequest<C>,
    evaluator: E,
}

impl<C: HttpClient, E: AssertionEvaluator> RunScenarios<C, E> {
    /// Creates the use case from a client and an assertion evaluator.
    pub const fn new(client: Arc<C>, evaluator: E) -> Self {
        Self {
            execute: ExecuteRequest::new(client),
            evaluator,
        }
    }

    /// Runs every scenario of `plan` in order and returns the report.
    pub async fn run(&self, plan: &ScenarioPlan) -> RunReport {
        let mut report = RunReport::start(self.execute.base_url());
        info!(
            base_url = %report.base_url,
            scenarios = plan.len(),
            "starting scenario run"
        );

        for (order, scenario) in plan.iter() {
            let span = info_span!("scenario", order, name = %scenario.name);
            let started = Instant::now();
            let outcome = self.run_one(scenario).instrument(span).await;

            report.record(ScenarioReport {
                order,
                name: scenario.name.clone(),
                outcome,
                duration: started.elapsed(),
            });
        }

        info!(
            passed = report.passed(),
            failed = report.failed(),
            "scenario run finished"
        );
        report
    }

    async fn run_one(&self, scenario: &Scenario) -> ScenarioOutcome {
        match self.execute.execute(&scenario.request).await {
            Ok(response) => {
                let results = self.evaluator.evaluate(&scenario.checks, &response);
                for failure in results.failures() {
                    warn!(
                        check = %failure.assertion.description(),
                        actual = failure.actual.as_deref().unwrap_or("-"),
                        error = failure.error.as_deref().unwrap_or("-"),
                        "check failed"
                    );
                }
                let outcome = ScenarioOutcome::from_results(results);
                info!(
                    status = response.status,
                    elapsed_ms = response.duration.as_millis(),
                    size = response.size,
                    content_type = response.get_header("content-type").map_or("-", String::as_str),
                    result = outcome.label(),
                    "scenario done"
                );
                outcome
            }
            Err(e) if e.is_setup_error() => {
                warn!(error = %e, "setup failed, request not sent");
                ScenarioOutcome::SetupFailed {
                    message: e.to_string(),
                }
            }
            Err(e) => {
                warn!(error = %e, "transport failed");
                ScenarioOutcome::TransportFailed {
                    message: e.to_string(),
                }
            }
        }
    }
}
