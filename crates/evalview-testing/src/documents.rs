//! Builders for result documents in the shapes the evaluation harness writes.

use evalview_types::{AgentResult, EvalResult, ResultDocument, TestResult};

/// Agent succeeded, evaluation succeeded, no test list
pub fn passing() -> ResultDocument {
    ResultDocument {
        agent_result: Some(agent_success()),
        eval_result: Some(EvalResult {
            status: Some("success".to_string()),
            ..Default::default()
        }),
    }
}

/// Agent and evaluation succeeded with the given `(name, category, status)` tests
pub fn with_tests(tests: &[(&str, &str, &str)]) -> ResultDocument {
    ResultDocument {
        agent_result: Some(agent_success()),
        eval_result: Some(EvalResult {
            status: Some("success".to_string()),
            test_results: Some(tests.iter().map(|t| test(t.0, t.1, t.2)).collect()),
            ..Default::default()
        }),
    }
}

/// Agent run that ended in an error, so no evaluation was attempted
pub fn agent_failed(error: &str) -> ResultDocument {
    ResultDocument {
        agent_result: Some(AgentResult {
            status: Some("error".to_string()),
            error: Some(error.to_string()),
            logs: Some("[AGENT] Entered agent_main()\n".to_string()),
            ..Default::default()
        }),
        eval_result: None,
    }
}

pub fn test(name: &str, category: &str, status: &str) -> TestResult {
    TestResult {
        name: Some(name.to_string()),
        category: Some(category.to_string()),
        status: Some(status.to_string()),
    }
}

fn agent_success() -> AgentResult {
    AgentResult {
        status: Some("success".to_string()),
        diff: Some("--- a/main.py\n+++ b/main.py\n@@ -1 +1 @@\n-x = 1\n+x = 2".to_string()),
        logs: Some(
            "[AGENT] Entered agent_main()\n\n[AGENT] Exiting agent_main()\n".to_string(),
        ),
        ..Default::default()
    }
}
