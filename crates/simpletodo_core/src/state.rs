//! Process-wide selected filter, held explicitly.

use crate::model::filter::Filter;

/// Holder of the currently selected filter.
///
/// Owned by the command handlers and passed to the renderer on each pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterState {
    current: Filter,
}

impl FilterState {
    pub fn new(initial: Filter) -> Self {
        Self { current: initial }
    }

    pub fn get(&self) -> Filter {
        self.current
    }

    /// Replaces the filter, returning the previous one.
    pub fn set(&mut self, filter: Filter) -> Filter {
        std::mem::replace(&mut self.current, filter)
    }
}

#[cfg(test)]
mod tests {
    use super::FilterState;
    use crate::model::filter::Filter;

    #[test]
    fn set_returns_previous_value() {
        let mut state = FilterState::default();
        assert_eq!(state.get(), Filter::All);
        assert_eq!(state.set(Filter::Completed), Filter::All);
        assert_eq!(state.get(), Filter::Completed);
    }
}
