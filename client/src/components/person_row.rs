//! Single row in the people list.

use leptos::prelude::*;

/// One person row: a name label and a selection checkbox. The checkbox
/// is not wired to anything yet; selection ships with a later feature.
#[component]
pub fn PersonRow(label: String) -> impl IntoView {
    view! {
        <li class="person-row">
            <span class="person-row__name">{label}</span>
            <input class="person-row__check" type="checkbox"/>
        </li>
    }
}
