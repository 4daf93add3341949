pub mod detail;
pub mod list;
pub mod logs;

use crate::presentation::{GridLayout, Palette};
use crate::tui::{Session, ViewMode};
use std::path::Path;

/// Renders whole frames. Holds only presentation settings; all state comes
/// from the [`Session`] passed to [`Screen::render`].
pub struct Screen {
    source: String,
    palette: Palette,
}

impl Screen {
    pub fn new(source: &Path, palette: Palette) -> Self {
        Self {
            source: source.display().to_string(),
            palette,
        }
    }

    pub fn render(&self, session: &Session, layout: &GridLayout) -> Vec<String> {
        match (session.view_mode(), session.selected()) {
            (ViewMode::Detail, Some(record)) => detail::render(record, &self.palette),
            _ => list::render(session, &self.source, layout, &self.palette),
        }
    }
}
