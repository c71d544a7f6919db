//! List view projection and presentation seam.
//!
//! # Responsibility
//! - Compute the visible rows, remaining counter and filter highlight from
//!   the full task list and the selected filter.
//! - Define the [`Surface`] every UI implements to show a computed view.
//!
//! # Invariants
//! - [`render`] is pure and preserves insertion order.
//! - `items_left` counts the unfiltered list.
//! - Exactly one filter control is selected.

use crate::model::filter::Filter;
use crate::model::task::{Task, TaskId};

/// One visible list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

/// One filter control and whether it is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterControl {
    pub filter: Filter,
    pub selected: bool,
}

/// Complete display state for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub rows: Vec<TaskRow>,
    pub items_left: usize,
    pub items_left_label: String,
    pub active_filter: Filter,
    pub filters: Vec<FilterControl>,
    pub has_completed: bool,
}

impl ListView {
    /// Row at 1-based visible `position`, as numbered on screen.
    pub fn row_at(&self, position: usize) -> Option<&TaskRow> {
        position.checked_sub(1).and_then(|index| self.rows.get(index))
    }
}

/// A rendering target. Each call replaces everything shown before.
pub trait Surface {
    fn present(&mut self, view: &ListView);
}

/// Projects `tasks` through `filter` into a [`ListView`].
pub fn render(tasks: &[Task], filter: Filter) -> ListView {
    let rows = tasks
        .iter()
        .filter(|task| filter.matches(task))
        .map(|task| TaskRow {
            id: task.id().clone(),
            text: task.text.clone(),
            completed: task.completed,
        })
        .collect();
    let items_left = tasks.iter().filter(|task| task.is_active()).count();

    ListView {
        rows,
        items_left,
        items_left_label: items_left_label(items_left),
        active_filter: filter,
        filters: Filter::ALL
            .iter()
            .map(|&candidate| FilterControl {
                filter: candidate,
                selected: candidate == filter,
            })
            .collect(),
        has_completed: tasks.iter().any(|task| task.completed),
    }
}

fn items_left_label(count: usize) -> String {
    let noun = if count == 1 { "item" } else { "items" };
    format!("{count} {noun} left")
}

#[cfg(test)]
mod tests {
    use super::{render, Filter};
    use crate::model::task::{Task, TaskId};

    fn sample() -> Vec<Task> {
        vec![
            Task::with_id(TaskId::from("a"), "A", false),
            Task::with_id(TaskId::from("b"), "B", true),
        ]
    }

    fn ids(view: &super::ListView) -> Vec<&str> {
        view.rows.iter().map(|row| row.id.as_str()).collect()
    }

    #[test]
    fn filters_rows_and_keeps_order() {
        let tasks = sample();
        assert_eq!(ids(&render(&tasks, Filter::All)), vec!["a", "b"]);
        assert_eq!(ids(&render(&tasks, Filter::Active)), vec!["a"]);
        assert_eq!(ids(&render(&tasks, Filter::Completed)), vec!["b"]);
    }

    #[test]
    fn items_left_ignores_selected_filter() {
        let tasks = sample();
        for filter in Filter::ALL {
            let view = render(&tasks, filter);
            assert_eq!(view.items_left, 1);
            assert_eq!(view.items_left_label, "1 item left");
        }
    }

    #[test]
    fn label_pluralizes() {
        assert_eq!(render(&[], Filter::All).items_left_label, "0 items left");
        let two = vec![
            Task::with_id(TaskId::from("1"), "x", false),
            Task::with_id(TaskId::from("2"), "y", false),
        ];
        assert_eq!(render(&two, Filter::All).items_left_label, "2 items left");
    }

    #[test]
    fn exactly_one_filter_control_is_selected() {
        let view = render(&sample(), Filter::Active);
        let selected = view
            .filters
            .iter()
            .filter(|control| control.selected)
            .map(|control| control.filter)
            .collect::<Vec<_>>();
        assert_eq!(selected, vec![Filter::Active]);
        assert_eq!(view.filters.len(), 3);
        assert_eq!(view.active_filter, Filter::Active);
    }

    #[test]
    fn has_completed_reflects_unfiltered_list() {
        assert!(render(&sample(), Filter::Active).has_completed);
        assert!(!render(&sample()[..1], Filter::All).has_completed);
    }

    #[test]
    fn row_at_is_one_based() {
        let view = render(&sample(), Filter::All);
        assert!(view.row_at(0).is_none());
        assert_eq!(view.row_at(1).unwrap().text, "A");
        assert_eq!(view.row_at(2).unwrap().text, "B");
        assert!(view.row_at(3).is_none());
    }
}
