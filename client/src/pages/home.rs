//! Home page: the people directory.
//!
//! DESIGN
//! ======
//! Rendering is split in two layers. `home_view` is a pure function of
//! one state snapshot, which is what the server renders for the initial
//! document. `HomePage` is the live layer: it reads the store from
//! context, re-runs `home_view` on every published snapshot, and kicks
//! off the initial people fetch once it is mounted in the browser.

use leptos::prelude::*;

use crate::components::person_row::PersonRow;
use crate::components::profile_card::ProfileCard;
use crate::components::site_header::SiteHeader;
use crate::state::action::Action;
use crate::state::home::HomeState;
use crate::state::store::HomeStore;

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

/// Home page bound to the store. Fetches people data on mount.
#[component]
pub fn HomePage() -> impl IntoView {
    let store = expect_context::<HomeStore>();

    load_people_on_mount(store);

    move || home_view(&store.snapshot(), Some(store))
}

/// Render one state snapshot. The same snapshot always produces the
/// same markup; passing `None` for the store renders the page without
/// live dispatch, which is how the server uses it.
pub fn home_view(state: &HomeState, store: Option<HomeStore>) -> impl IntoView + use<> {
    let rows = person_row_labels(state)
        .into_iter()
        .map(|label| view! { <PersonRow label=label/> })
        .collect::<Vec<_>>();

    let blank_visible = state.blank_visible;
    let on_toggle = move |_| {
        if let Some(store) = store {
            let visible = !store.snapshot().blank_visible;
            store.dispatch(&Action::toggle_blank_visible(visible));
        }
    };

    view! {
        <div class="home-page">
            <SiteHeader/>
            <ProfileCard/>
            <section class="home-page__people">
                <h2>"People"</h2>
                <ul class="home-page__rows">{rows}</ul>
            </section>
            <section class="home-page__blank">
                <button class="btn" on:click=on_toggle>
                    "Toggle panel"
                </button>
                {blank_visible
                    .then(|| {
                        view! {
                            <div class="home-page__blank-panel">
                                <p>"Nothing here yet."</p>
                            </div>
                        }
                    })}
            </section>
        </div>
    }
}

/// Visible row labels for the people list, in store order.
#[must_use]
pub fn person_row_labels(state: &HomeState) -> Vec<String> {
    state.list.iter().map(|person| person.name.clone()).collect()
}

/// Server-side markup for the home page, rendered from prefetched state.
/// Runs under its own reactive owner; SSR happens outside any mounted
/// app, so there is no ambient one.
#[cfg(feature = "ssr")]
#[must_use]
pub fn render_home_markup(state: &HomeState) -> String {
    let owner = Owner::new();
    let html = owner.with(|| home_view(state, None).to_html());
    owner.cleanup();
    html
}

/// Kick off the initial people fetch once the page is live in the
/// browser. A failed fetch logs and leaves the current list untouched,
/// so the server-provided data keeps rendering.
fn load_people_on_mount(store: HomeStore) {
    #[cfg(feature = "csr")]
    {
        Effect::new(move || {
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_people().await {
                    Ok(list) => store.dispatch(&Action::update_person_list(&list)),
                    Err(err) => log::warn!("people fetch failed: {err}"),
                }
            });
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = store;
    }
}
