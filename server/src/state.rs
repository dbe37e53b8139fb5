//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the run mode, the asset resolver, and the people directory
//! that feeds both the API and the SSR prefetch. Clone is required by
//! Axum, so every field is Arc-backed or cheap to clone.

use std::sync::Arc;

use manifest::Mode;

use crate::assets::AssetService;
use crate::people::PeopleDirectory;

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub mode: Mode,
    pub assets: AssetService,
    pub people: Arc<dyn PeopleDirectory>,
}

impl AppState {
    #[must_use]
    pub fn new(mode: Mode, assets: AssetService, people: Arc<dyn PeopleDirectory>) -> Self {
        Self {
            mode,
            assets,
            people,
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
