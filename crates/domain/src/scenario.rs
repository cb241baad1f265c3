//! Ordered scenarios and their run reports.
//!
//! A scenario is one request plus the checks applied to its response. A
//! [`ScenarioPlan`] fixes the execution order explicitly: later scenarios may
//! depend on remote state created by earlier ones.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::request::RequestSpec;
use crate::testing::{Assertion, AssertionResult, TestResults, TestSuite};

/// One request and the checks applied to its response.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    /// Scenario name, shared with the request and the check suite.
    pub name: String,
    /// The request to send.
    pub request: RequestSpec,
    /// Checks applied to the response.
    pub checks: TestSuite,
}

impl Scenario {
    /// Creates a scenario named after its request, with no checks yet.
    #[must_use]
    pub fn new(request: RequestSpec) -> Self {
        let name = request.name.clone();
        Self {
            checks: TestSuite::new(name.clone()),
            name,
            request,
        }
    }

    /// Adds a check (builder pattern).
    #[must_use]
    pub fn expect(mut self, assertion: Assertion) -> Self {
        self.checks = self.checks.with_assertion(assertion);
        self
    }
}

/// Scenarios in execution order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScenarioPlan {
    scenarios: Vec<Scenario>,
}

impl ScenarioPlan {
    /// Creates an empty plan.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scenarios: Vec::new(),
        }
    }

    /// Appends a scenario after the existing ones.
    pub fn push(&mut self, scenario: Scenario) {
        self.scenarios.push(scenario);
    }

    /// Returns `(order, scenario)` pairs, with 1-based order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Scenario)> {
        self.scenarios.iter().enumerate().map(|(i, s)| (i + 1, s))
    }

    /// Returns the scenario names in order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.scenarios.iter().map(|s| s.name.as_str()).collect()
    }

    /// Returns the number of scenarios.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Returns true if the plan has no scenarios.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

impl FromIterator<Scenario> for ScenarioPlan {
    fn from_iter<T: IntoIterator<Item = Scenario>>(iter: T) -> Self {
        Self {
            scenarios: iter.into_iter().collect(),
        }
    }
}

impl Extend<Scenario> for ScenarioPlan {
    fn extend<T: IntoIterator<Item = Scenario>>(&mut self, iter: T) {
        self.scenarios.extend(iter);
    }
}

/// How a single scenario ended.
#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioOutcome {
    /// Every check passed.
    Passed(TestResults),
    /// The response arrived but at least one check failed.
    Failed(TestResults),
    /// The request was sent but no response came back.
    TransportFailed {
        /// Transport error message.
        message: String,
    },
    /// The request could not be built; nothing was sent.
    SetupFailed {
        /// Setup error message.
        message: String,
    },
}

impl ScenarioOutcome {
    /// Classifies assertion results as passed or failed.
    #[must_use]
    pub fn from_results(results: TestResults) -> Self {
        if results.all_passed() {
            Self::Passed(results)
        } else {
            Self::Failed(results)
        }
    }

    /// Returns true for [`ScenarioOutcome::Passed`].
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Passed(_))
    }

    /// Short label for reports.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Passed(_) => "PASS",
            Self::Failed(_) => "FAIL",
            Self::TransportFailed { .. } => "TRANSPORT",
            Self::SetupFailed { .. } => "SETUP",
        }
    }

    /// Failed assertion results, empty unless [`ScenarioOutcome::Failed`].
    #[must_use]
    pub fn failed_assertions(&self) -> Vec<&AssertionResult> {
        match self {
            Self::Failed(results) => results.failures().collect(),
            _ => Vec::new(),
        }
    }
}

/// Report for one executed scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioReport {
    /// 1-based execution order.
    pub order: usize,
    /// Scenario name.
    pub name: String,
    /// How the scenario ended.
    pub outcome: ScenarioOutcome,
    /// Wall time spent on the scenario.
    pub duration: Duration,
}

/// Report for a whole plan run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// Base URL the plan ran against.
    pub base_url: String,
    /// Per-scenario reports, in execution order.
    pub scenarios: Vec<ScenarioReport>,
}

impl RunReport {
    /// Starts an empty report stamped with the current time.
    #[must_use]
    pub fn start(base_url: impl Into<String>) -> Self {
        Self {
            started_at: Utc::now(),
            base_url: base_url.into(),
            scenarios: Vec::new(),
        }
    }

    /// Records a finished scenario.
    pub fn record(&mut self, report: ScenarioReport) {
        self.scenarios.push(report);
    }

    /// Number of scenarios run.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn total(&self) -> usize {
        self.scenarios.len()
    }

    /// Number of scenarios that passed.
    #[must_use]
    pub fn passed(&self) -> usize {
        self.scenarios.iter().filter(|s| s.outcome.is_pass()).count()
    }

    /// Number of scenarios that did not pass.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    /// True when every scenario passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    /// Scenarios that did not pass.
    pub fn failures(&self) -> impl Iterator<Item = &ScenarioReport> {
        self.scenarios.iter().filter(|s| !s.outcome.is_pass())
    }

    /// Looks up a scenario report by name.
    #[must_use]
    pub fn scenario(&self, name: &str) -> Option<&ScenarioReport> {
        self.scenarios.iter().find(|s| s.name == name)
    }
}
