//! Static box-drawn tables for non-interactive output.

use std::fmt::Write as _;

use crossterm::style::Stylize;
use ratatui::text::Span;

/// Column-aligned table rendered to a string.
#[derive(Debug, Clone, Default)]
pub struct TextTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    styled_header: bool,
}

impl TextTable {
    /// Creates a table with the given column headers.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Colors the header row (only sensible when writing to a terminal).
    #[must_use]
    pub fn styled_header(mut self, styled: bool) -> Self {
        self.styled_header = styled;
        self
    }

    /// Appends a row. Missing cells render empty; extra cells are dropped.
    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = cells.into_iter().map(Into::into).collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    /// Number of body rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Renders the table with a trailing newline after the bottom border.
    #[must_use]
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        border(&mut out, &widths, ('┌', '┬', '┐'));
        write_row(&mut out, &self.headers, &widths, self.styled_header);
        border(&mut out, &widths, ('├', '┼', '┤'));
        for row in &self.rows {
            write_row(&mut out, row, &widths, false);
        }
        border(&mut out, &widths, ('└', '┴', '┘'));

        out
    }

    fn column_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                self.rows
                    .iter()
                    .map(|row| display_width(&row[col]))
                    .chain(std::iter::once(display_width(header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

impl std::fmt::Display for TextTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.render().trim_end_matches('\n'))
    }
}

fn write_row(out: &mut String, cells: &[String], widths: &[usize], styled: bool) {
    out.push('│');
    for (cell, width) in cells.iter().zip(widths) {
        let pad = width - display_width(cell);
        if styled {
            let _ = write!(out, " {}{} │", cell.as_str().cyan(), " ".repeat(pad));
        } else {
            let _ = write!(out, " {cell}{} │", " ".repeat(pad));
        }
    }
    out.push('\n');
}

fn border(out: &mut String, widths: &[usize], (left, mid, right): (char, char, char)) {
    out.push(left);
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            out.push(mid);
        }
        out.push_str(&"─".repeat(width + 2));
    }
    out.push(right);
    out.push('\n');
}

/// Terminal columns taken by `s`; wide characters count as two.
fn display_width(s: &str) -> usize {
    Span::raw(s).width()
}
