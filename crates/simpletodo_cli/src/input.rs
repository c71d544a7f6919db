//! Parsing of typed lines into UI events.
//!
//! A plain line is text typed into the new-task input followed by the commit
//! key. Lines starting with `:` stand in for clicks on list rows and controls;
//! a leading `::` adds a task whose text starts with a single `:`.

use simpletodo_core::{ClickTarget, Filter, Key, ListView, RowElement, UiEvent};

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputLine {
    /// Text for the new-task input.
    Text(String),
    Toggle(usize),
    Delete(usize),
    Filter(Filter),
    ClearCompleted,
    Help,
    Quit,
    /// A `:` command that did not parse.
    Invalid(String),
}

pub const HELP: &str = "\
type text + Enter   add a task
::text              add a task starting with `:`
:t N | :toggle N     toggle row N
:d N | :delete N     delete row N
:all :active :completed
:clear              remove completed tasks
:q | :quit          exit";

pub fn parse_line(line: &str) -> InputLine {
    let trimmed = line.trim();
    if let Some(rest) = trimmed.strip_prefix("::") {
        return InputLine::Text(format!(":{rest}"));
    }
    let Some(command) = trimmed.strip_prefix(':') else {
        return InputLine::Text(line.trim_end_matches(['\n', '\r']).to_string());
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let argument = parts.next();
    if parts.next().is_some() {
        return InputLine::Invalid(format!("too many arguments: `{trimmed}`"));
    }

    match (name, argument) {
        ("t" | "toggle", Some(position)) => parse_position(position).map_or_else(
            || InputLine::Invalid(format!("not a row number: `{position}`")),
            InputLine::Toggle,
        ),
        ("d" | "delete", Some(position)) => parse_position(position).map_or_else(
            || InputLine::Invalid(format!("not a row number: `{position}`")),
            InputLine::Delete,
        ),
        ("clear", None) => InputLine::ClearCompleted,
        ("h" | "help", None) => InputLine::Help,
        ("q" | "quit", None) => InputLine::Quit,
        (filter, None) => filter.parse().map_or_else(
            |_| InputLine::Invalid(format!("unknown command: `{trimmed}`")),
            InputLine::Filter,
        ),
        _ => InputLine::Invalid(format!("unknown command: `{trimmed}`")),
    }
}

fn parse_position(raw: &str) -> Option<usize> {
    raw.parse::<usize>().ok().filter(|position| *position > 0)
}

impl InputLine {
    /// Builds the event this line stands for against the view on screen.
    ///
    /// Row numbers past the end resolve to a click outside any row.
    pub fn to_event(&self, view: Option<&ListView>) -> Option<UiEvent> {
        match self {
            Self::Text(text) => Some(UiEvent::KeyDown {
                key: Key::Enter,
                input: text.clone(),
            }),
            Self::Toggle(position) => Some(row_click(view, *position, RowElement::Toggle)),
            Self::Delete(position) => Some(row_click(view, *position, RowElement::Delete)),
            Self::Filter(filter) => Some(UiEvent::FilterClick(*filter)),
            Self::ClearCompleted => Some(UiEvent::ClearCompletedClick),
            Self::Help | Self::Quit | Self::Invalid(_) => None,
        }
    }
}

fn row_click(view: Option<&ListView>, position: usize, element: RowElement) -> UiEvent {
    let target = view
        .and_then(|view| view.row_at(position))
        .map_or_else(ClickTarget::outside_rows, |row| {
            ClickTarget::on_row(row.id.clone(), element)
        });
    UiEvent::ListClick(target)
}
