//! Reactive store wrapping the home reducer.

use std::sync::Arc;

use leptos::prelude::*;

use super::action::Action;
use super::home::{HomeState, reduce};

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

/// Single application store. Cheap to copy; clones share one signal.
///
/// Provided as context by the root component so any page or component
/// can read snapshots and dispatch actions.
#[derive(Clone, Copy)]
pub struct HomeStore {
    snapshot: RwSignal<Arc<HomeState>>,
}

impl HomeStore {
    #[must_use]
    pub fn new(initial: HomeState) -> Self {
        Self {
            snapshot: RwSignal::new(Arc::new(initial)),
        }
    }

    /// Current state snapshot. Reading inside a view or effect
    /// subscribes it to store updates.
    #[must_use]
    pub fn snapshot(&self) -> Arc<HomeState> {
        self.snapshot.get()
    }

    /// Run an action through the reducer and publish the result.
    /// Actions the reducer does not recognize come back pointer-equal
    /// and publish nothing, so views are not re-rendered for them.
    pub fn dispatch(&self, action: &Action) {
        let prev = self.snapshot.get_untracked();
        let next = reduce(&prev, action);
        if !Arc::ptr_eq(&prev, &next) {
            self.snapshot.set(next);
        }
    }
}
