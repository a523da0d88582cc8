//! Box-drawn tables for terminal output.

use console::measure_text_width;

/// A simple table for formatted output.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers.
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let column_widths = headers.iter().map(|h| measure_text_width(h)).collect();

        Self {
            headers,
            rows: Vec::new(),
            column_widths,
        }
    }

    /// Add a row to the table. Cells beyond the header count are dropped.
    pub fn add_row<S: Into<String>>(&mut self, row: impl IntoIterator<Item = S>) {
        let mut row: Vec<String> = row.into_iter().map(Into::into).collect();
        row.truncate(self.headers.len());

        for (width, cell) in self.column_widths.iter_mut().zip(&row) {
            *width = (*width).max(measure_text_width(cell));
        }

        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table as a string.
    pub fn render(&self) -> String {
        let mut lines = vec![
            self.render_border('┌', '┬', '┐'),
            self.render_row(&self.headers),
            self.render_border('├', '┼', '┤'),
        ];
        lines.extend(self.rows.iter().map(|row| self.render_row(row)));
        lines.push(self.render_border('└', '┴', '┘'));
        lines.join("\n")
    }

    fn render_border(&self, left: char, mid: char, right: char) -> String {
        let segments: Vec<String> = self
            .column_widths
            .iter()
            .map(|width| "─".repeat(width + 2))
            .collect();
        format!("{}{}{}", left, segments.join(&mid.to_string()), right)
    }

    fn render_row(&self, row: &[String]) -> String {
        let mut s = String::from("│");

        for (i, width) in self.column_widths.iter().enumerate() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            let padding = width - measure_text_width(cell);
            s.push_str(&format!(" {}{} │", cell, " ".repeat(padding)));
        }

        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_empty() {
        let table = Table::new(["Package", "Version"]);
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);

        let output = table.render();
        assert!(output.contains("Package"));
        assert!(output.contains("Version"));
    }

    #[test]
    fn table_render_layout() {
        let mut table = Table::new(["Package", "Version", "Via"]);
        table.add_row(["clang", "14.0.0", "llvm"]);
        table.add_row(["ruby", "3.2.4", ""]);

        let output = table.render();
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "┌─────────┬─────────┬──────┐");
        assert_eq!(lines[3], "│ clang   │ 14.0.0  │ llvm │");
        assert_eq!(lines[5], "└─────────┴─────────┴──────┘");
    }

    #[test]
    fn table_handles_missing_and_extra_cells() {
        let mut table = Table::new(["A", "B", "C"]);
        table.add_row(["only", "two"]);
        table.add_row(["1", "2", "3", "4"]);

        let output = table.render();
        assert!(output.contains("│ only │ two │   │"));
        assert!(!output.contains('4'));
    }

    #[test]
    fn styled_cells_do_not_break_alignment() {
        let mut table = Table::new(["Status"]);
        table.add_row([format!("{}", console::style("ok").green().force_styling(true))]);

        let output = table.render();
        let widths: Vec<usize> = output.lines().map(measure_text_width).collect();
        assert!(widths.windows(2).all(|pair| pair[0] == pair[1]));
    }
}
