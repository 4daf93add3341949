//! Grid geometry for the summary view.
//!
//! The geometry is never cached: callers compute a fresh [`GridLayout`] from the
//! current terminal width for each key press and hand the same value to both
//! navigation and rendering.

use std::ops::Range;

/// Narrowest column, even for very short names
pub const MIN_COLUMN_WIDTH: usize = 20;

/// Room for the status glyph, its separator and the gap between columns
pub const COLUMN_PADDING: usize = 4;

/// Width assumed when the terminal size cannot be queried
pub const FALLBACK_WIDTH: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub column_width: usize,
    pub columns_per_row: usize,
}

impl GridLayout {
    /// `column_width = max(longest name + 4, 20)`,
    /// `columns_per_row = max(1, width / column_width)`
    pub fn compute<'a, I>(width: usize, names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let max_name_len = names
            .into_iter()
            .map(|name| name.chars().count())
            .max()
            .unwrap_or(0);

        let column_width = (max_name_len + COLUMN_PADDING).max(MIN_COLUMN_WIDTH);
        let columns_per_row = (width / column_width).max(1);

        Self {
            column_width,
            columns_per_row,
        }
    }

    /// Characters available to one cell; the remaining one is the column gap
    pub fn cell_width(&self) -> usize {
        self.column_width - 1
    }

    /// Index ranges of each grid row for `len` items
    pub fn rows(&self, len: usize) -> impl Iterator<Item = Range<usize>> + use<> {
        let columns = self.columns_per_row;
        (0..len)
            .step_by(columns)
            .map(move |start| start..(start + columns).min(len))
    }
}

/// Current terminal width in columns
pub fn terminal_width() -> usize {
    if let Some((terminal_size::Width(w), _)) = terminal_size::terminal_size() {
        w as usize
    } else {
        FALLBACK_WIDTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_names_use_minimum_width() {
        let layout = GridLayout::compute(100, ["a", "bb", "ccc"]);
        assert_eq!(layout.column_width, 20);
        assert_eq!(layout.columns_per_row, 5);
        assert_eq!(layout.cell_width(), 19);
    }

    #[test]
    fn test_long_names_widen_columns() {
        let name = "django__django-15503";
        let layout = GridLayout::compute(100, [name]);
        assert_eq!(layout.column_width, name.len() + 4);
        assert_eq!(layout.columns_per_row, 100 / 24);
    }

    #[test]
    fn test_columns_never_zero() {
        let layout = GridLayout::compute(5, ["a"]);
        assert_eq!(layout.columns_per_row, 1);

        let layout = GridLayout::compute(1, ["a-very-long-problem-name-indeed"]);
        assert_eq!(layout.columns_per_row, 1);
    }

    #[test]
    fn test_empty_name_set_falls_back_to_minimum() {
        let layout = GridLayout::compute(80, std::iter::empty());
        assert_eq!(layout.column_width, 20);
        assert_eq!(layout.columns_per_row, 4);
    }

    #[test]
    fn test_formula_over_widths() {
        let names = ["affine-cipher", "beer-song", "variable-length-quantity"];
        for width in 1..300 {
            let layout = GridLayout::compute(width, names);
            let expected_column = (24 + 4).max(20);
            assert_eq!(layout.column_width, expected_column);
            assert_eq!(layout.columns_per_row, (width / expected_column).max(1));
        }
    }

    #[test]
    fn test_name_length_counts_characters() {
        let name = "é".repeat(19);
        let layout = GridLayout::compute(100, [name.as_str()]);
        assert_eq!(layout.column_width, 19 + 4);
    }

    #[test]
    fn test_rows_partition_items() {
        let layout = GridLayout {
            column_width: 20,
            columns_per_row: 3,
        };
        let rows: Vec<_> = layout.rows(7).collect();
        assert_eq!(rows, vec![0..3, 3..6, 6..7]);
        assert_eq!(layout.rows(0).count(), 0);
    }
}
