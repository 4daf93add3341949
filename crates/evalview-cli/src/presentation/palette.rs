use crate::presentation::views::logs::LogTone;
use evalview_types::Status;
use owo_colors::OwoColorize;

/// Color scheme for a frame. With `enable_color` off every method returns
/// its input unchanged, which is what tests and piped output use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub enable_color: bool,
}

impl Default for Palette {
    fn default() -> Self {
        Self { enable_color: true }
    }
}

impl Palette {
    pub fn plain() -> Self {
        Self {
            enable_color: false,
        }
    }

    pub fn status(&self, status: Status, text: &str) -> String {
        if !self.enable_color {
            return text.to_string();
        }
        match status {
            Status::Pass => text.green().to_string(),
            Status::Fail => text.red().to_string(),
            Status::Error => text.yellow().to_string(),
        }
    }

    /// Color for a harness status literal such as `success` or `error`
    pub fn outcome(&self, success: bool, text: &str) -> String {
        self.status(if success { Status::Pass } else { Status::Fail }, text)
    }

    pub fn tone(&self, tone: LogTone, text: &str) -> String {
        if !self.enable_color {
            return text.to_string();
        }
        match tone {
            LogTone::Failure => text.red().to_string(),
            LogTone::Warning => text.yellow().to_string(),
            LogTone::Runner => text.cyan().to_string(),
            LogTone::Agent => text.magenta().to_string(),
            LogTone::Muted => text.dimmed().to_string(),
        }
    }

    /// Selected grid cell
    pub fn highlight(&self, text: &str) -> String {
        if self.enable_color {
            text.reversed().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn bold(&self, text: &str) -> String {
        if self.enable_color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn dim(&self, text: &str) -> String {
        self.tone(LogTone::Muted, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_palette_leaves_text_alone() {
        let palette = Palette::plain();
        assert_eq!(palette.status(Status::Fail, "x"), "x");
        assert_eq!(palette.highlight("cell"), "cell");
        assert_eq!(palette.tone(LogTone::Agent, "[AGENT] hi"), "[AGENT] hi");
    }

    #[test]
    fn test_colored_palette_wraps_text() {
        let palette = Palette::default();
        let painted = palette.status(Status::Pass, "ok");
        assert!(painted.contains("ok"));
        assert!(painted.starts_with('\u{1b}'));
        assert_ne!(palette.highlight("ok"), palette.status(Status::Pass, "ok"));
    }
}
