//! Placeholder for registered views this build does not ship.

use leptos::prelude::*;

#[component]
pub fn UnavailablePage(label: &'static str) -> impl IntoView {
    view! {
        <div class="page unavailable">
            <h2 class="page__title">{label}</h2>
            <p>"This view is not available in this console build."</p>
        </div>
    }
}
