//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Renders with columns sized to the widest cell. Widths use display
    /// width, not byte length, so wide characters in names line up.
    pub fn render(&self, separator_char: &str) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.width());
            }
        }

        let mut out = String::new();

        for (i, h) in self.headers.iter().enumerate() {
            out.push_str(&pad(h, widths[i]));
            out.push(' ');
        }
        out.push('\n');

        let total: usize = widths.iter().sum::<usize>() + widths.len();
        out.push_str(&separator_char.repeat(total));
        out.push('\n');

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                out.push_str(&pad(cell, widths[i]));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

fn pad(s: &str, width: usize) -> String {
    let mut out = s.to_string();
    out.push_str(&" ".repeat(width.saturating_sub(s.width())));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_align_to_widest_cell() {
        let mut t = Table::new(&["ID", "NAME"]);
        t.add_row(vec!["1".into(), "short".into()]);
        t.add_row(vec!["12".into(), "a much longer name".into()]);

        let rendered = t.render("-");
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines[0].starts_with("ID "));
        assert!(lines[2].starts_with("1  "));
        assert!(lines[3].starts_with("12 "));
    }
}
