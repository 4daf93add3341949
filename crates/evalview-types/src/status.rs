use crate::document::ResultDocument;
use std::fmt;

/// Verdict for one result file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Pass,
    Fail,
    /// The file could not be read or parsed
    Error,
}

impl Status {
    pub fn glyph(&self) -> &'static str {
        match self {
            Status::Pass => "✓",
            Status::Fail => "✗",
            Status::Error => "!",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Pass => "pass",
            Status::Fail => "fail",
            Status::Error => "error",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classify a parsed document. Returns only [`Status::Pass`] or [`Status::Fail`].
///
/// Rules, first match wins:
/// 1. agent result missing or not `success` -> fail
/// 2. eval result missing or not `success` -> fail
/// 3. test results present -> pass iff every test passed (an empty list passes)
/// 4. otherwise -> pass
pub fn classify(document: &ResultDocument) -> Status {
    let Some(agent) = &document.agent_result else {
        return Status::Fail;
    };
    if !agent.is_success() {
        return Status::Fail;
    }

    let Some(eval) = &document.eval_result else {
        return Status::Fail;
    };
    if !eval.is_success() {
        return Status::Fail;
    }

    match &eval.test_results {
        Some(tests) if !tests.iter().all(|t| t.passed()) => Status::Fail,
        _ => Status::Pass,
    }
}
