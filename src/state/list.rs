//! List View State
//!
//! The three-state machine every list view runs: it starts in `Loading` and
//! settles exactly once into `Loaded` or `Failed`.

use crate::api::{FetchError, FetchResult};

#[derive(Debug, Clone, PartialEq)]
pub enum ListState<T> {
    Loading,
    Loaded(Vec<T>),
    Failed(FetchError),
}

impl<T> ListState<T> {
    /// True until the fetch settles
    pub fn is_loading(&self) -> bool {
        matches!(self, ListState::Loading)
    }

    /// Records in backend order; empty unless loaded
    pub fn items(&self) -> &[T] {
        match self {
            ListState::Loaded(items) => items,
            _ => &[],
        }
    }

    /// Captured error, present only on failure
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            ListState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        ListState::Loading
    }
}

impl<T> From<FetchResult<Vec<T>>> for ListState<T> {
    fn from(result: FetchResult<Vec<T>>) -> Self {
        match result {
            Ok(items) => ListState::Loaded(items),
            Err(err) => ListState::Failed(err),
        }
    }
}
