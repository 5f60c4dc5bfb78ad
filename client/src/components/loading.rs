//! Placeholder shown while a routed view resolves.

use leptos::prelude::*;

#[component]
pub fn LoadingPlaceholder() -> impl IntoView {
    view! {
        <div class="loading" role="status">
            <span class="spinner" aria-hidden="true"></span>
            <span class="loading__text">"Loading..."</span>
        </div>
    }
}
