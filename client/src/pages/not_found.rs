//! Shown for paths the route registry does not know.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();

    view! {
        <div class="page not-found">
            <h2 class="page__title">"Page not found"</h2>
            <p>"Nothing is registered at " <code>{move || location.pathname.get()}</code> "."</p>
            <A href="/home">"Back to home"</A>
        </div>
    }
}
