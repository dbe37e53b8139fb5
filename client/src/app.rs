//! Root application component, routing, and the browser entry point.

use leptos::prelude::*;
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::store::HomeStore;

/// Root application component.
///
/// Owns the store context and client-side routing. The server renders
/// page markup directly from prefetched state, so this component only
/// ever runs in the browser.
#[component]
pub fn App(store: HomeStore) -> impl IntoView {
    provide_context(store);

    view! {
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}

/// Browser entry point. Reads the bootstrap state the server embedded,
/// builds the store from it, and mounts the app over the
/// server-rendered markup inside `#app`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn boot() {
    use wasm_bindgen::JsCast;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let initial = read_initial_state().unwrap_or_default();
    let store = HomeStore::new(initial.home);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(root) = document.get_element_by_id("app") else {
        log::error!("missing #app mount element");
        return;
    };

    // Replace the server markup; the store already carries its data.
    root.set_inner_html("");
    leptos::mount::mount_to(root.unchecked_into(), move || view! { <App store=store/> })
        .forget();
}

/// Parse `window.initialState` into the bootstrap store shape. Absent
/// or malformed state falls back to defaults so a bad bootstrap cannot
/// take down the client.
#[cfg(feature = "csr")]
fn read_initial_state() -> Option<crate::state::StoreState> {
    let window = web_sys::window()?;
    let raw =
        js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str("initialState")).ok()?;
    if raw.is_undefined() || raw.is_null() {
        return None;
    }
    let json = String::from(js_sys::JSON::stringify(&raw).ok()?);
    serde_json::from_str(&json).ok()
}
