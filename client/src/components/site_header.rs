//! Top navigation bar.

use leptos::prelude::*;

/// Site header with the product name and primary navigation.
#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <span class="site-header__brand">"Rolodex"</span>
            <nav class="site-header__nav">
                <a class="site-header__link" href="/">"Directory"</a>
            </nav>
        </header>
    }
}
