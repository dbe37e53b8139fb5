//! Server-rendered page routes.
//!
//! DESIGN
//! ======
//! The page handler prefetches the same people list the API serves,
//! renders the home page to markup through the client crate, and wraps
//! it in the document template with that state embedded as
//! `window.initialState`. The browser bundle therefore boots from
//! exactly the data the markup was rendered from.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;

use client::pages::home::render_home_markup;
use client::state::StoreState;
use client::state::home::HomeState;
use manifest::Mode;

use crate::assets::AssetTags;
use crate::routes::people::people_error_to_status;
use crate::state::AppState;
use crate::tmpl::{self, TmplOptions};

#[cfg(test)]
#[path = "pages_test.rs"]
mod pages_test;

/// Document title of the home page.
pub const HOME_TITLE: &str = "this is home page";

/// `GET /` — render the home page shell around prefetched people.
pub async fn home_page(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let list = state.people.list().await.map_err(people_error_to_status)?;
    let store = StoreState {
        home: HomeState {
            list,
            ..HomeState::default()
        },
    };
    Ok(Html(home_document(&store, &state.assets.tags(), state.mode)))
}

/// Render the complete home document from a store snapshot and resolved
/// asset tags. Pure of `AppState`, so tests can drive it directly.
#[must_use]
pub fn home_document(store: &StoreState, tags: &AssetTags, mode: Mode) -> String {
    let content = render_home_markup(&store.home);
    // Infallible: the store is plain structs with string keys.
    let initial_state = serde_json::to_value(store).unwrap_or_default();
    tmpl::render_document(
        &TmplOptions {
            title: HOME_TITLE,
            styles: &tags.styles,
            content: &content,
            initial_state: &initial_state,
            scripts: &tags.scripts,
            css_hash: &tags.css_hash,
        },
        mode,
    )
}
