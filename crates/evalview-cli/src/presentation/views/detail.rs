use super::logs::{classify_log_line, visible_lines};
use crate::presentation::Palette;
use crate::presentation::formatters::text;
use evalview_types::{AgentResult, EvalResult, ResultRecord, Status, TestResult};

const NOT_AVAILABLE: &str = "N/A";

/// Single-result frame.
///
/// An error record shows only its header and the parse error; nothing else
/// is looked up because there is no document to look in.
pub fn render(record: &ResultRecord, palette: &Palette) -> Vec<String> {
    let status = record.status();
    let mut lines = vec![
        format!(
            "{}  {}",
            palette.bold(record.name()),
            palette.status(status, &format!("{} {}", status.glyph(), status.label()))
        ),
        String::new(),
    ];

    let Some(document) = record.document() else {
        lines.push(format!(
            "{} {}",
            palette.status(Status::Error, "Parse error:"),
            record.parse_error().unwrap_or("unknown error")
        ));
        return lines;
    };

    render_agent(&mut lines, document.agent_result.as_ref(), palette);
    lines.push(String::new());
    render_eval(&mut lines, document.eval_result.as_ref(), palette);

    if let Some(logs) = document
        .agent_result
        .as_ref()
        .and_then(|agent| agent.logs.as_deref())
    {
        lines.push(String::new());
        lines.push(palette.bold("Logs"));
        lines.extend(
            visible_lines(logs).map(|line| palette.tone(classify_log_line(line), line)),
        );
    }

    lines
}

fn render_agent(lines: &mut Vec<String>, agent: Option<&AgentResult>, palette: &Palette) {
    lines.push(palette.bold("Agent"));

    let Some(agent) = agent else {
        lines.push(format!("  Status: {}", palette.dim(NOT_AVAILABLE)));
        return;
    };

    lines.push(format!(
        "  Status: {}",
        format_outcome(agent.status.as_deref(), agent.is_success(), palette)
    ));

    if let Some(error) = &agent.error {
        lines.push(format!("  Error: {}", palette.status(Status::Fail, error)));
    }

    if let Some(changed) = agent.changed_lines() {
        lines.push(format!("  Diff: {} changed", text::pluralize(changed, "line")));
    }

    if let Some(traceback) = &agent.traceback {
        render_traceback(lines, traceback, palette);
    }
}

fn render_eval(lines: &mut Vec<String>, eval: Option<&EvalResult>, palette: &Palette) {
    lines.push(palette.bold("Evaluation"));

    let Some(eval) = eval else {
        lines.push(format!("  Status: {}", palette.dim(NOT_AVAILABLE)));
        return;
    };

    lines.push(format!(
        "  Status: {}",
        format_outcome(eval.status.as_deref(), eval.is_success(), palette)
    ));

    if let Some(error) = &eval.error {
        lines.push(format!("  Error: {}", palette.status(Status::Fail, error)));
    }

    if let Some(traceback) = &eval.traceback {
        render_traceback(lines, traceback, palette);
    }

    if let Some(logs) = &eval.logs {
        lines.push("  Logs:".to_string());
        lines.extend(
            visible_lines(logs)
                .map(|line| format!("    {}", palette.tone(classify_log_line(line), line))),
        );
    }

    let (Some(tests), Some(summary)) = (eval.test_results.as_deref(), eval.test_summary()) else {
        return;
    };

    let mut counts = format!(
        "  Tests: {} passed, {} failed, {} total",
        summary.passed, summary.failed, summary.total
    );
    if summary.skipped > 0 {
        counts.push_str(&format!(" ({} skipped)", summary.skipped));
    }
    lines.push(counts);

    lines.extend(tests.iter().map(|test| format_test(test, palette)));
}

fn render_traceback(lines: &mut Vec<String>, traceback: &str, palette: &Palette) {
    lines.push("  Traceback:".to_string());
    lines.extend(visible_lines(traceback).map(|line| format!("    {}", palette.dim(line))));
}

fn format_outcome(status: Option<&str>, success: bool, palette: &Palette) -> String {
    match status {
        Some(status) => palette.outcome(success, status),
        None => palette.dim(NOT_AVAILABLE),
    }
}

fn format_test(test: &TestResult, palette: &Palette) -> String {
    let glyph = if test.passed() {
        palette.status(Status::Pass, Status::Pass.glyph())
    } else if test.skipped() {
        palette.status(Status::Error, "○")
    } else {
        palette.status(Status::Fail, Status::Fail.glyph())
    };

    format!(
        "    {} {} {}",
        glyph,
        test.name.as_deref().unwrap_or("(unnamed)"),
        palette.dim(&format!("({})", test.category.as_deref().unwrap_or("no category")))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::views::logs::LogTone;
    use serde_json::json;

    fn record(value: serde_json::Value) -> ResultRecord {
        ResultRecord::from_json("django__django-11138.json", &value.to_string())
    }

    #[test]
    fn test_error_record_shows_only_header_and_parse_error() {
        let record = ResultRecord::failed("broken.json", "Invalid JSON: EOF while parsing");
        let lines = render(&record, &Palette::plain());

        insta::assert_snapshot!(lines.join("\n"), @r"
        broken  ! error

        Parse error: Invalid JSON: EOF while parsing
        ");
    }

    #[test]
    fn test_full_detail() {
        let record = record(json!({
            "agent_result": {
                "status": "success",
                "diff": "--- a/x.py\n+++ b/x.py\n@@ -1 +1 @@\n-a\n+b",
                "logs": "[AGENT] Entered agent_main()\n\n[RUNNER] collected 3 items\nERROR: boom\n"
            },
            "eval_result": {
                "status": "success",
                "test_results": [
                    { "name": "test_one", "category": "FAIL_TO_PASS", "status": "pass" },
                    { "name": "test_two", "category": "PASS_TO_PASS", "status": "fail" },
                    { "name": "test_three", "status": "skip" }
                ]
            }
        }));

        let lines = render(&record, &Palette::plain());

        insta::assert_snapshot!(lines.join("\n"), @r"
        django__django-11138  ✗ fail

        Agent
          Status: success
          Diff: 5 lines changed

        Evaluation
          Status: success
          Tests: 1 passed, 2 failed, 3 total (1 skipped)
            ✓ test_one (FAIL_TO_PASS)
            ✗ test_two (PASS_TO_PASS)
            ○ test_three (no category)

        Logs
        [AGENT] Entered agent_main()
        [RUNNER] collected 3 items
        ERROR: boom
        ");
    }

    #[test]
    fn test_missing_sections_render_as_not_available() {
        let lines = render(&record(json!({})), &Palette::plain());

        assert_eq!(
            lines,
            vec![
                "django__django-11138  ✗ fail",
                "",
                "Agent",
                "  Status: N/A",
                "",
                "Evaluation",
                "  Status: N/A",
            ]
        );
    }

    #[test]
    fn test_agent_failure_shows_error_and_traceback() {
        let lines = render(
            &record(json!({
                "agent_result": {
                    "status": "error",
                    "error": "failed to run: timeout",
                    "traceback": "Traceback (most recent call last):\n  File \"agent.py\"\n"
                }
            })),
            &Palette::plain(),
        );

        assert!(lines.contains(&"  Status: error".to_string()));
        assert!(lines.contains(&"  Error: failed to run: timeout".to_string()));
        assert!(lines.contains(&"  Traceback:".to_string()));
        assert!(lines.contains(&"      File \"agent.py\"".to_string()));
        assert!(!lines.iter().any(|l| l.starts_with("Logs")));
    }

    #[test]
    fn test_eval_failure_shows_error_and_logs() {
        let record = record(json!({
            "agent_result": { "status": "success", "diff": "+x" },
            "eval_result": {
                "status": "error",
                "error": "Test runner crashed",
                "logs": "[RUNNER] applying patch\n\nTraceback (most recent call last):\nWARN: retrying\n"
            }
        }));

        let lines = render(&record, &Palette::plain());

        insta::assert_snapshot!(lines.join("\n"), @r"
        django__django-11138  ✗ fail

        Agent
          Status: success
          Diff: 1 line changed

        Evaluation
          Status: error
          Error: Test runner crashed
          Logs:
            [RUNNER] applying patch
            Traceback (most recent call last):
            WARN: retrying
        ");
    }

    #[test]
    fn test_eval_log_lines_colored_by_keyword() {
        let palette = Palette::default();
        let lines = render(
            &record(json!({ "eval_result": { "status": "error", "logs": "FAIL: test_a" } })),
            &palette,
        );

        assert_eq!(
            lines.last().unwrap(),
            &format!("    {}", palette.tone(LogTone::Failure, "FAIL: test_a"))
        );
    }

    #[test]
    fn test_single_line_diff_is_singular() {
        let lines = render(
            &record(json!({ "agent_result": { "status": "success", "diff": "+x" } })),
            &Palette::plain(),
        );
        assert!(lines.contains(&"  Diff: 1 line changed".to_string()));
    }

    #[test]
    fn test_log_lines_colored_by_keyword() {
        let palette = Palette::default();
        let lines = render(
            &record(json!({
                "agent_result": { "status": "success", "logs": "[AGENT] hi\nplain" }
            })),
            &palette,
        );

        let n = lines.len();
        assert_eq!(lines[n - 2], palette.tone(LogTone::Agent, "[AGENT] hi"));
        assert_eq!(lines[n - 1], palette.dim("plain"));
    }
}
