//! Schema of a single evaluation-run result file.
//!
//! The harness that produces these files only loosely guarantees their shape,
//! so every field is optional. Reading goes through [`ResultDocument::from_value`],
//! which extracts each field independently: a missing field and a field of the
//! wrong JSON type both read as absent.

use serde::Serialize;
use serde_json::{Map, Value};

/// Status literal the harness writes for a successful agent or evaluation run
pub const SUCCESS_MARKER: &str = "success";

/// Status literal of a passing test
pub const TEST_PASS: &str = "pass";

/// Status literal of a skipped test
pub const TEST_SKIP: &str = "skip";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultDocument {
    pub agent_result: Option<AgentResult>,
    pub eval_result: Option<EvalResult>,
}

impl ResultDocument {
    /// Build a document from already-parsed JSON.
    ///
    /// Never fails: anything that is not an object reads as an empty document.
    pub fn from_value(value: &Value) -> Self {
        let Some(root) = value.as_object() else {
            return Self::default();
        };

        Self {
            agent_result: root
                .get("agent_result")
                .and_then(Value::as_object)
                .map(AgentResult::from_object),
            eval_result: root
                .get("eval_result")
                .and_then(Value::as_object)
                .map(EvalResult::from_object),
        }
    }

    /// Parse JSON text into a document. Only syntax errors are reported.
    pub fn parse(text: &str) -> serde_json::Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(&value))
    }
}

/// Outcome of running the agent inside its sandbox
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AgentResult {
    pub status: Option<String>,
    pub error: Option<String>,
    pub traceback: Option<String>,
    pub diff: Option<String>,
    pub logs: Option<String>,
}

impl AgentResult {
    fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            status: string_field(obj, "status"),
            error: string_field(obj, "error"),
            traceback: string_field(obj, "traceback"),
            diff: string_field(obj, "diff"),
            logs: string_field(obj, "logs"),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some(SUCCESS_MARKER)
    }

    /// Line count of the diff text (line breaks + 1), if a diff is present
    pub fn changed_lines(&self) -> Option<usize> {
        self.diff
            .as_deref()
            .map(|diff| diff.matches('\n').count() + 1)
    }
}

/// Outcome of evaluating the agent's diff against the problem's tests
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EvalResult {
    pub status: Option<String>,
    pub error: Option<String>,
    pub traceback: Option<String>,
    pub logs: Option<String>,
    pub test_results: Option<Vec<TestResult>>,
}

impl EvalResult {
    fn from_object(obj: &Map<String, Value>) -> Self {
        let test_results = obj.get("test_results").and_then(Value::as_array).map(|tests| {
            tests
                .iter()
                .map(|test| {
                    test.as_object()
                        .map(TestResult::from_object)
                        .unwrap_or_default()
                })
                .collect()
        });

        Self {
            status: string_field(obj, "status"),
            error: string_field(obj, "error"),
            traceback: string_field(obj, "traceback"),
            logs: string_field(obj, "logs"),
            test_results,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some(SUCCESS_MARKER)
    }

    pub fn test_summary(&self) -> Option<TestSummary> {
        self.test_results.as_deref().map(TestSummary::from_tests)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TestResult {
    pub name: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

impl TestResult {
    fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            name: string_field(obj, "name"),
            category: string_field(obj, "category"),
            status: string_field(obj, "status"),
        }
    }

    /// Anything other than the literal `pass` counts as a failure
    pub fn passed(&self) -> bool {
        self.status.as_deref() == Some(TEST_PASS)
    }

    pub fn skipped(&self) -> bool {
        self.status.as_deref() == Some(TEST_SKIP)
    }
}

/// Pass/fail tally over a test list. `skipped` is a subset of `failed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TestSummary {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub total: usize,
}

impl TestSummary {
    pub fn from_tests(tests: &[TestResult]) -> Self {
        let passed = tests.iter().filter(|t| t.passed()).count();
        let skipped = tests.iter().filter(|t| t.skipped()).count();

        Self {
            passed,
            failed: tests.len() - passed,
            skipped,
            total: tests.len(),
        }
    }
}

fn string_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_owned)
}
