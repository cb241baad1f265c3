//! Test runner implementation.
//!
//! Checks assertions against HTTP responses and produces test results.

use petstore_application::ports::AssertionEvaluator;
use petstore_domain::response::ResponseSpec;
use petstore_domain::testing::{Assertion, AssertionResult, TestResults, TestSuite};
use serde_json::Value;

const PREVIEW_LEN: usize = 100;

/// Test runner that checks assertions against responses.
#[derive(Debug, Default, Clone, Copy)]
pub struct TestRunner;

impl TestRunner {
    /// Run every assertion of a suite against a response.
    #[must_use]
    pub fn run(suite: &TestSuite, response: &ResponseSpec) -> TestResults {
        let results = suite
            .assertions
            .iter()
            .map(|assertion| Self::run_assertion(assertion, response))
            .collect();

        TestResults::new(&suite.name, results)
    }

    /// Run a single assertion against a response.
    #[must_use]
    pub fn run_assertion(assertion: &Assertion, response: &ResponseSpec) -> AssertionResult {
        match assertion {
            Assertion::StatusCode { expected } => check_status_code(assertion, response, *expected),
            Assertion::JsonPath { path, expected } => {
                check_json_path(assertion, response, path, expected.as_ref())
            }
            Assertion::JsonNotEmpty { path } => check_json_not_empty(assertion, response, path),
        }
    }
}

impl AssertionEvaluator for TestRunner {
    fn evaluate(&self, suite: &TestSuite, response: &ResponseSpec) -> TestResults {
        Self::run(suite, response)
    }
}

fn check_status_code(
    assertion: &Assertion,
    response: &ResponseSpec,
    expected: u16,
) -> AssertionResult {
    let actual = response.status;
    if actual == expected {
        AssertionResult::pass_with_value(assertion.clone(), actual.to_string())
    } else {
        AssertionResult::fail_with_value(
            assertion.clone(),
            actual.to_string(),
            format!("Expected status = {expected}, got {actual}"),
        )
    }
}

fn parse_body(assertion: &Assertion, response: &ResponseSpec) -> Result<Value, AssertionResult> {
    response.body_as_json().map_err(|e| {
        AssertionResult::fail(assertion.clone(), format!("Failed to parse body as JSON: {e}"))
    })
}

fn check_json_path(
    assertion: &Assertion,
    response: &ResponseSpec,
    path: &str,
    expected: Option<&Value>,
) -> AssertionResult {
    let json = match parse_body(assertion, response) {
        Ok(json) => json,
        Err(result) => return result,
    };

    match query_json_path(&json, path) {
        Ok(Some(value)) => match expected {
            Some(expected) if value != expected => AssertionResult::fail_with_value(
                assertion.clone(),
                value.to_string(),
                format!("JSON path '{path}' value mismatch: expected {expected}, got {value}"),
            ),
            _ => AssertionResult::pass_with_value(assertion.clone(), value.to_string()),
        },
        Ok(None) => path_not_found(assertion, path),
        Err(e) => invalid_path(assertion, path, &e),
    }
}

fn check_json_not_empty(
    assertion: &Assertion,
    response: &ResponseSpec,
    path: &str,
) -> AssertionResult {
    let json = match parse_body(assertion, response) {
        Ok(json) => json,
        Err(result) => return result,
    };

    match query_json_path(&json, path) {
        Ok(Some(value)) if is_empty_value(value) => AssertionResult::fail_with_value(
            assertion.clone(),
            value.to_string(),
            format!("JSON path '{path}' is empty"),
        ),
        Ok(Some(value)) => {
            AssertionResult::pass_with_value(assertion.clone(), preview(&value.to_string()))
        }
        Ok(None) => path_not_found(assertion, path),
        Err(e) => invalid_path(assertion, path, &e),
    }
}

fn path_not_found(assertion: &Assertion, path: &str) -> AssertionResult {
    AssertionResult::fail(assertion.clone(), format!("JSON path '{path}' not found"))
}

fn invalid_path(assertion: &Assertion, path: &str, error: &str) -> AssertionResult {
    AssertionResult::fail(assertion.clone(), format!("Invalid JSON path '{path}': {error}"))
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

fn preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_LEN) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

/// Query a JSON value using a simple JSONPath-like syntax.
/// Supports: `$`, `$.field`, `$.field.nested`, `$.array[0]`, `$.array[*]`.
fn query_json_path<'a>(json: &'a Value, path: &str) -> Result<Option<&'a Value>, String> {
    let Some(rest) = path.trim().strip_prefix('$') else {
        return Err("JSON path must start with '$'".to_string());
    };
    let rest = rest.strip_prefix('.').unwrap_or(rest);

    let mut current = json;
    for segment in split_path_segments(rest) {
        let (name, index) = parse_array_access(&segment).unwrap_or((segment.as_str(), ""));

        if !name.is_empty() {
            match current.get(name) {
                Some(v) => current = v,
                None => return Ok(None),
            }
        }

        match index {
            "" => {}
            "*" => return Ok(Some(current)),
            idx => {
                let idx: usize = idx
                    .parse()
                    .map_err(|_| format!("Invalid array index: {idx}"))?;
                match current.get(idx) {
                    Some(v) => current = v,
                    None => return Ok(None),
                }
            }
        }
    }

    Ok(Some(current))
}

/// Split a path into segments, respecting array brackets.
fn split_path_segments(path: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut in_bracket = false;

    for ch in path.chars() {
        match ch {
            '.' if !in_bracket => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
            '[' => {
                in_bracket = true;
                current.push(ch);
            }
            ']' => {
                in_bracket = false;
                current.push(ch);
            }
            _ => current.push(ch),
        }
    }

    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

/// Parse array access like "tags[0]" into ("tags", "0").
fn parse_array_access(segment: &str) -> Option<(&str, &str)> {
    let inner = segment.strip_suffix(']')?;
    let bracket = inner.find('[')?;
    Some((&inner[..bracket], &inner[bracket + 1..]))
}
