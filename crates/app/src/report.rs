//! Plain-text rendering of a [`RunReport`].

use std::fmt;

use petstore_domain::{RunReport, ScenarioOutcome};

/// Displays a run report as one line per scenario plus a summary.
pub struct TextReport<'a>(pub &'a RunReport);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        writeln!(f, "Pet Store API suite against {}", report.base_url)?;
        writeln!(f, "started {}", report.started_at.to_rfc3339())?;
        writeln!(f)?;

        for scenario in &report.scenarios {
            writeln!(
                f,
                "{:>3}. {:<9} {} ({} ms)",
                scenario.order,
                scenario.outcome.label(),
                scenario.name,
                scenario.duration.as_millis()
            )?;

            match &scenario.outcome {
                ScenarioOutcome::Passed(_) => {}
                ScenarioOutcome::Failed(results) => {
                    for failure in results.failures() {
                        writeln!(
                            f,
                            "       - {}: {}",
                            failure.assertion.description(),
                            failure.error.as_deref().unwrap_or("failed")
                        )?;
                    }
                }
                ScenarioOutcome::TransportFailed { message }
                | ScenarioOutcome::SetupFailed { message } => {
                    writeln!(f, "       - {message}")?;
                }
            }
        }

        writeln!(f)?;
        writeln!(
            f,
            "{} scenarios: {} passed, {} failed",
            report.total(),
            report.passed(),
            report.failed()
        )?;
        writeln!(
            f,
            "note: the suite uses fixed ids (pet and order 999, users 994-998) and \
             does not clean up; a rerun against the same backend may meet leftovers."
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petstore_domain::{Assertion, AssertionResult, ScenarioReport, TestResults};
    use std::time::Duration;

    fn report() -> RunReport {
        let mut report = RunReport::start("https://petstore.swagger.io/v2");
        report.record(ScenarioReport {
            order: 1,
            name: "add new pet".to_string(),
            outcome: ScenarioOutcome::Passed(TestResults::new(
                "add new pet",
                vec![AssertionResult::pass(Assertion::status(200))],
            )),
            duration: Duration::from_millis(120),
        });
        report.record(ScenarioReport {
            order: 2,
            name: "upload image".to_string(),
            outcome: ScenarioOutcome::SetupFailed {
                message: "fixture image.jpg: file not found".to_string(),
            },
            duration: Duration::from_millis(1),
        });
        report.record(ScenarioReport {
            order: 3,
            name: "get pet by id".to_string(),
            outcome: ScenarioOutcome::Failed(TestResults::new(
                "get pet by id",
                vec![AssertionResult::fail_with_value(
                    Assertion::status(200),
                    "404",
                    "Expected status = 200, got 404",
                )],
            )),
            duration: Duration::from_millis(80),
        });
        report
    }

    #[test]
    fn test_lists_every_scenario_in_order() {
        let text = TextReport(&report()).to_string();

        let first = text.find("add new pet").unwrap_or(usize::MAX);
        let second = text.find("upload image").unwrap_or(usize::MAX);
        let third = text.find("get pet by id").unwrap_or(usize::MAX);
        assert!(first < second && second < third, "{text}");

        assert!(
            text.contains("  1. PASS      add new pet (120 ms)"),
            "{text}"
        );
        assert!(text.contains("  2. SETUP     upload image"), "{text}");
        assert!(
            text.contains("- fixture image.jpg: file not found"),
            "{text}"
        );
        assert!(
            text.contains("- Status code = 200: Expected status = 200, got 404"),
            "{text}"
        );
    }

    #[test]
    fn test_summary_and_rerun_note() {
        let text = TextReport(&report()).to_string();
        assert!(text.contains("3 scenarios: 1 passed, 2 failed"), "{text}");
        assert!(text.contains("does not clean up"), "{text}");
        let header = "Pet Store API suite against https://petstore.swagger.io/v2";
        assert!(text.starts_with(header), "{text}");
    }
}
