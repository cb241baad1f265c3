//! Assertion evaluation port

use petstore_domain::{response::ResponseSpec, testing::TestResults, testing::TestSuite};

/// Port for checking a response against a suite of assertions.
pub trait AssertionEvaluator: Send + Sync {
    /// Runs every assertion in `suite` against `response`.
    fn evaluate(&self, suite: &TestSuite, response: &ResponseSpec) -> TestResults;
}
