//! Keyword-based coloring of agent log lines.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTone {
    Failure,
    Warning,
    /// Lines tagged by the test runner
    Runner,
    /// Lines tagged by the agent under evaluation
    Agent,
    Muted,
}

/// Case-sensitive substring rules, checked in order. First match wins.
pub const LOG_RULES: &[(&str, LogTone)] = &[
    ("ERROR", LogTone::Failure),
    ("Error", LogTone::Failure),
    ("FAIL", LogTone::Failure),
    ("Traceback", LogTone::Failure),
    ("WARN", LogTone::Warning),
    ("Warning", LogTone::Warning),
    ("[RUNNER]", LogTone::Runner),
    ("[AGENT]", LogTone::Agent),
];

pub fn classify_log_line(line: &str) -> LogTone {
    LOG_RULES
        .iter()
        .find(|(marker, _)| line.contains(marker))
        .map(|(_, tone)| *tone)
        .unwrap_or(LogTone::Muted)
}

/// Non-blank lines of a log blob
pub fn visible_lines(logs: &str) -> impl Iterator<Item = &str> {
    logs.lines().filter(|line| !line.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_and_runner_tags() {
        assert_eq!(
            classify_log_line("[AGENT] Entered agent_main()"),
            LogTone::Agent
        );
        assert_eq!(
            classify_log_line("[RUNNER] Running 12 tests"),
            LogTone::Runner
        );
    }

    #[test]
    fn test_error_beats_tags() {
        assert_eq!(
            classify_log_line("[AGENT] ERROR: could not apply diff"),
            LogTone::Failure
        );
        assert_eq!(
            classify_log_line("[RUNNER] WARN: slow test"),
            LogTone::Warning
        );
    }

    #[test]
    fn test_failure_checked_before_warning() {
        assert_eq!(classify_log_line("WARN then ERROR"), LogTone::Failure);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(classify_log_line("[AGENT] Failed to reach proxy"), LogTone::Agent);
        assert_eq!(classify_log_line("an error happened"), LogTone::Muted);
        assert_eq!(classify_log_line("[agent] lowercase tag"), LogTone::Muted);
    }

    #[test]
    fn test_traceback_is_failure() {
        assert_eq!(
            classify_log_line("Traceback (most recent call last):"),
            LogTone::Failure
        );
    }

    #[test]
    fn test_visible_lines_skip_blanks() {
        let lines: Vec<_> = visible_lines("a\n\n   \nb\r\n").collect();
        assert_eq!(lines, vec!["a", "b"]);
    }
}
