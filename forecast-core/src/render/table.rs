//! Minimal box-drawing output: a header/rows table and a titled panel.
//!
//! Widths are computed per column from the widest cell, measured in
//! terminal columns so wide glyphs (the moon emoji, CJK descriptions)
//! keep the borders straight.

use std::fmt::Write as _;

#[derive(Debug, Clone, Copy)]
pub(crate) enum Align {
    Left,
    Right,
}

#[derive(Debug)]
struct Column {
    title: String,
    align: Align,
}

#[derive(Debug, Default)]
pub(crate) struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn column(mut self, title: &str, align: Align) -> Self {
        self.columns.push(Column { title: title.to_string(), align });
        self
    }

    pub(crate) fn row(&mut self, cells: Vec<String>) {
        debug_assert_eq!(cells.len(), self.columns.len());
        self.rows.push(cells);
    }

    pub(crate) fn render(&self) -> String {
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| display_width(cell))
                    .chain([display_width(&col.title)])
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        border(&mut out, &widths, '┌', '┬', '┐');

        out.push('│');
        for (col, width) in self.columns.iter().zip(&widths) {
            let _ = write!(out, " {} │", pad(&col.title, *width, Align::Left));
        }
        out.push('\n');

        border(&mut out, &widths, '├', '┼', '┤');

        for row in &self.rows {
            out.push('│');
            for ((cell, col), width) in row.iter().zip(&self.columns).zip(&widths) {
                let _ = write!(out, " {} │", pad(cell, *width, col.align));
            }
            out.push('\n');
        }

        border(&mut out, &widths, '└', '┴', '┘');
        out
    }
}

/// A rounded box with a title embedded in the top border.
pub(crate) fn panel(title: &str, lines: &[String]) -> String {
    let title_len = display_width(title);
    let inner = lines
        .iter()
        .map(|line| display_width(line))
        .max()
        .unwrap_or(0)
        .max(title_len + 1);

    let mut out = String::new();
    let _ = writeln!(out, "╭─ {title} {}╮", "─".repeat(inner - title_len - 1));
    for line in lines {
        let _ = writeln!(out, "│ {} │", pad(line, inner, Align::Left));
    }
    let _ = writeln!(out, "╰{}╯", "─".repeat(inner + 2));
    out
}

fn border(out: &mut String, widths: &[usize], left: char, mid: char, right: char) {
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

fn pad(text: &str, width: usize, align: Align) -> String {
    let len = display_width(text);
    let fill = " ".repeat(width.saturating_sub(len));
    match align {
        Align::Left => format!("{text}{fill}"),
        Align::Right => format!("{fill}{text}"),
    }
}

fn display_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

/// Terminal columns for the glyphs the renderers can actually emit:
/// East Asian full-width ranges (localized descriptions) and emoji take
/// two columns, everything else one.
fn char_width(c: char) -> usize {
    match c {
        '\u{1100}'..='\u{115F}'
        | '\u{2E80}'..='\u{A4CF}'
        | '\u{AC00}'..='\u{D7A3}'
        | '\u{F900}'..='\u{FAFF}'
        | '\u{FE30}'..='\u{FE4F}'
        | '\u{FF00}'..='\u{FF60}'
        | '\u{FFE0}'..='\u{FFE6}'
        | '\u{1F300}'..='\u{1FAFF}' => 2,
        _ => 1,
    }
}
