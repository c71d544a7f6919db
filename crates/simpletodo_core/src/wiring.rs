//! Binding of user input events to command handlers.
//!
//! # Responsibility
//! - Translate surface-level events into todo commands.
//! - Perform the initial render when listeners are bound.
//!
//! # Invariants
//! - Binding happens once: [`EventWiring::init`] consumes the service.
//! - List clicks are delegated: the target row and element decide the command.

use crate::model::filter::Filter;
use crate::model::task::TaskId;
use crate::render::Surface;
use crate::service::todo_service::TodoService;
use crate::store::kv::KeyValueStore;
use log::{info, trace};

/// Keys reported by the new-task input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Char(char),
    Other(String),
}

impl Key {
    /// The key that submits the new-task input.
    pub const COMMIT: Key = Key::Enter;
}

/// Interactive element of a list row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowElement {
    Toggle,
    Delete,
    Label,
    Other,
}

/// Resolved target of a click inside the list container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickTarget {
    /// Row containing the clicked element, `None` outside any row.
    pub row: Option<TaskId>,
    pub element: RowElement,
}

impl ClickTarget {
    pub fn on_row(id: TaskId, element: RowElement) -> Self {
        Self {
            row: Some(id),
            element,
        }
    }

    pub fn outside_rows() -> Self {
        Self {
            row: None,
            element: RowElement::Other,
        }
    }
}

/// Events a surface can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Key pressed in the new-task input holding `input`.
    KeyDown { key: Key, input: String },
    /// Click anywhere in the list container.
    ListClick(ClickTarget),
    FilterClick(Filter),
    ClearCompletedClick,
}

/// What the surface should do after an event was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Event ignored.
    Ignored,
    /// A command ran.
    Handled,
    /// A task was added; the new-task input should be emptied.
    ClearInput,
}

/// Listener set bound to one [`TodoService`].
pub struct EventWiring<S: KeyValueStore, U: Surface> {
    service: TodoService<S, U>,
}

impl<S: KeyValueStore, U: Surface> EventWiring<S, U> {
    /// Binds all listeners and presents the persisted list under the
    /// persisted filter.
    pub fn init(mut service: TodoService<S, U>) -> Self {
        service.refresh();
        info!(
            "event=wiring_init module=wiring status=ok filter={}",
            service.filter()
        );
        Self { service }
    }

    pub fn service(&self) -> &TodoService<S, U> {
        &self.service
    }

    pub fn service_mut(&mut self) -> &mut TodoService<S, U> {
        &mut self.service
    }

    pub fn into_service(self) -> TodoService<S, U> {
        self.service
    }

    /// Routes one event to its handler.
    pub fn dispatch(&mut self, event: UiEvent) -> EventOutcome {
        trace!("event=ui_event module=wiring kind={}", event_kind(&event));
        match event {
            UiEvent::KeyDown { key, input } => self.on_key_down(&key, &input),
            UiEvent::ListClick(target) => self.on_list_click(target),
            UiEvent::FilterClick(filter) => {
                self.service.set_filter(filter);
                EventOutcome::Handled
            }
            UiEvent::ClearCompletedClick => {
                self.service.clear_completed();
                EventOutcome::Handled
            }
        }
    }

    fn on_key_down(&mut self, key: &Key, input: &str) -> EventOutcome {
        if *key != Key::COMMIT {
            return EventOutcome::Ignored;
        }
        let value = input.trim();
        if value.is_empty() {
            return EventOutcome::Ignored;
        }
        self.service.add(value);
        EventOutcome::ClearInput
    }

    fn on_list_click(&mut self, target: ClickTarget) -> EventOutcome {
        let Some(id) = target.row else {
            return EventOutcome::Ignored;
        };
        match target.element {
            RowElement::Toggle => self.service.toggle(&id),
            RowElement::Delete => self.service.delete(&id),
            RowElement::Label | RowElement::Other => return EventOutcome::Ignored,
        }
        EventOutcome::Handled
    }
}

fn event_kind(event: &UiEvent) -> &'static str {
    match event {
        UiEvent::KeyDown { .. } => "key_down",
        UiEvent::ListClick(_) => "list_click",
        UiEvent::FilterClick(_) => "filter_click",
        UiEvent::ClearCompletedClick => "clear_completed_click",
    }
}
