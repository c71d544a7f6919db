//! Terminal rendering surface.
//!
//! # Responsibility
//! - Draw a full list view on every present call.
//! - Remember the last drawn view so typed row numbers resolve to task ids.

use log::warn;
use simpletodo_core::{ListView, Surface};
use std::io::Write;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Writes list views as plain text to `out`.
pub struct TerminalSurface<W: Write> {
    out: W,
    clear_screen: bool,
    last_view: Option<ListView>,
}

impl<W: Write> TerminalSurface<W> {
    /// `clear_screen` wipes the terminal before each redraw.
    pub fn new(out: W, clear_screen: bool) -> Self {
        Self {
            out,
            clear_screen,
            last_view: None,
        }
    }

    /// The view most recently presented, as numbered on screen.
    pub fn last_view(&self) -> Option<&ListView> {
        self.last_view.as_ref()
    }

    pub fn prompt(&mut self) {
        self.write_best_effort(|out| {
            write!(out, "> ")?;
            out.flush()
        });
    }

    /// Prints a one-line message below the list.
    pub fn notice(&mut self, message: &str) {
        self.write_best_effort(|out| writeln!(out, "{message}"));
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn write_best_effort(&mut self, write: impl FnOnce(&mut W) -> std::io::Result<()>) {
        if let Err(err) = write(&mut self.out) {
            warn!("event=terminal_write module=cli status=error error={err}");
        }
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn present(&mut self, view: &ListView) {
        let text = format_view(view);
        let clear = if self.clear_screen { CLEAR_SCREEN } else { "" };
        self.write_best_effort(|out| write!(out, "{clear}{text}"));
        self.last_view = Some(view.clone());
    }
}

/// Text form of a list view.
pub fn format_view(view: &ListView) -> String {
    let mut text = String::new();
    if view.rows.is_empty() {
        text.push_str("  (nothing here)\n");
    }
    for (index, row) in view.rows.iter().enumerate() {
        let mark = if row.completed { 'x' } else { ' ' };
        text.push_str(&format!("{:>3}. [{mark}] {}\n", index + 1, row.text));
    }

    let controls = view
        .filters
        .iter()
        .map(|control| {
            if control.selected {
                format!("[{}]", control.filter.label())
            } else {
                control.filter.label().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    text.push_str(&format!("{}   {controls}", view.items_left_label));
    if view.has_completed {
        text.push_str("   (:clear removes completed)");
    }
    text.push('\n');
    text
}
