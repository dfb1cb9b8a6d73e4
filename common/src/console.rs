//! Console presentation helpers for the demo binaries
//!
//! Text counterparts of a GUI sidebar: banners, section rules, an equations
//! panel and a small column-aligned table. Every helper returns a `String` so
//! callers decide where it goes.

use std::fmt::Write;

/// Default width of banners and section rules
pub const RULE_WIDTH: usize = 70;

/// An equation with its name and formula
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Equation {
    pub name: &'static str,
    pub formula: &'static str,
    pub description: &'static str,
}

/// A horizontal rule of `width` copies of `ch`
pub fn rule(ch: char, width: usize) -> String {
    std::iter::repeat(ch).take(width).collect()
}

/// Title framed by `=` rules
pub fn banner(title: &str) -> String {
    let line = rule('=', RULE_WIDTH);
    format!("{line}\n{title}\n{line}")
}

/// Title framed by `-` rules, preceded by a blank line
pub fn section(title: &str) -> String {
    let line = rule('-', RULE_WIDTH);
    format!("\n{line}\n{title}\n{line}")
}

/// Render the equations and variable glossary as a text panel
pub fn equations_panel(title: &str, equations: &[Equation], variables: &[(&str, &str)]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", banner(title));

    let _ = writeln!(out, "Equations");
    for eq in equations {
        let _ = writeln!(out, "  {}", eq.name);
        let _ = writeln!(out, "      {}", eq.formula);
        let _ = writeln!(out, "      ({})", eq.description);
    }

    if !variables.is_empty() {
        let width = variables
            .iter()
            .map(|(symbol, _)| symbol.chars().count())
            .max()
            .unwrap_or(0);

        let _ = writeln!(out, "Variables");
        for (symbol, meaning) in variables {
            let pad = width - symbol.chars().count();
            let _ = writeln!(out, "  {symbol}{}  {meaning}", " ".repeat(pad));
        }
    }

    out
}

/// Column alignment for [`Table`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// A plain-text table with a header row and aligned columns
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    align: Vec<Align>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Headers are left-aligned; data columns default to right alignment.
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let align = vec![Align::Right; headers.len()];
        Self {
            headers,
            align,
            rows: Vec::new(),
        }
    }

    pub fn align(mut self, column: usize, align: Align) -> Self {
        if let Some(slot) = self.align.get_mut(column) {
            *slot = align;
        }
        self
    }

    /// Append a row. Short rows are padded with empty cells, extra cells dropped.
    pub fn push_row<S: Into<String>>(&mut self, cells: impl IntoIterator<Item = S>) {
        let mut row: Vec<String> = cells
            .into_iter()
            .map(Into::into)
            .take(self.headers.len())
            .collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }
        widths
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let header: Vec<String> = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(h, &w)| pad(h, w, Align::Left))
            .collect();
        let _ = writeln!(out, "{}", header.join("  ").trim_end());

        let total = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        let _ = writeln!(out, "{}", rule('-', total));

        for row in &self.rows {
            let cells: Vec<String> = row
                .iter()
                .zip(&widths)
                .zip(&self.align)
                .map(|((cell, &w), &a)| pad(cell, w, a))
                .collect();
            let _ = writeln!(out, "{}", cells.join("  ").trim_end());
        }

        out
    }
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(text.chars().count()));
    match align {
        Align::Left => format!("{text}{fill}"),
        Align::Right => format!("{fill}{text}"),
    }
}
