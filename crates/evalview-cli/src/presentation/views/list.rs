use crate::presentation::formatters::text;
use crate::presentation::{GridLayout, Palette};
use crate::tui::Session;
use evalview_types::{ResultRecord, Status, StatusCounts};

pub const KEY_HINTS: &str = "←↑↓→ move   Enter/Space open   Esc back   q quit";

/// Summary frame: title, counts, key hints, then the status grid
pub fn render(
    session: &Session,
    source: &str,
    layout: &GridLayout,
    palette: &Palette,
) -> Vec<String> {
    let records = session.results();
    let counts = StatusCounts::from_records(records);

    let mut lines = vec![
        palette.bold(&format!("Evaluation Results ({})", source)),
        format_counts(&counts, palette),
        palette.dim(KEY_HINTS),
        String::new(),
    ];

    if records.is_empty() {
        lines.push(palette.dim(&format!("No results found in {}", source)));
        return lines;
    }

    for row in layout.rows(records.len()) {
        let cells: Vec<String> = row
            .map(|index| {
                format_cell(
                    &records[index],
                    index == session.current_index(),
                    layout,
                    palette,
                )
            })
            .collect();
        lines.push(cells.join(" "));
    }

    lines
}

pub fn format_counts(counts: &StatusCounts, palette: &Palette) -> String {
    format!(
        "{}   {}   {}   {} total",
        palette.status(Status::Pass, &format!("✓ {} passed", counts.pass)),
        palette.status(Status::Fail, &format!("✗ {} failed", counts.fail)),
        palette.status(Status::Error, &format!("! {} errors", counts.error)),
        counts.total()
    )
}

/// Glyph and name, fitted to the cell width before any styling is applied
fn format_cell(
    record: &ResultRecord,
    selected: bool,
    layout: &GridLayout,
    palette: &Palette,
) -> String {
    let label = format!("{} {}", record.status().glyph(), record.name());
    let cell = text::fit(&label, layout.cell_width());

    if selected {
        palette.highlight(&cell)
    } else {
        palette.status(record.status(), &cell)
    }
}
