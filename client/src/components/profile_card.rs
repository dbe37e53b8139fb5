//! Profile banner shown above the people list.

use leptos::prelude::*;

/// Profile banner card. Placeholder content until profiles come from
/// the API.
#[component]
pub fn ProfileCard() -> impl IntoView {
    view! {
        <section class="profile-card">
            <div class="profile-card__avatar" aria-hidden="true"></div>
            <div class="profile-card__body">
                <h1 class="profile-card__name">"Morgan Reed"</h1>
                <p class="profile-card__meta">"Engineering lead, 6 yrs, remote"</p>
                <p class="profile-card__contact">"morgan@rolodex.dev"</p>
            </div>
            <button class="btn btn--primary">"Say hi"</button>
        </section>
    }
}
