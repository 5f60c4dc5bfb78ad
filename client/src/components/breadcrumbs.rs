//! Breadcrumb trail derived from the route registry.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::routes::registry;

#[component]
pub fn Breadcrumbs() -> impl IntoView {
    let location = use_location();

    let items = move || {
        let crumbs = registry()
            .map(|routes| routes.breadcrumbs(&location.pathname.get()))
            .unwrap_or_default();
        let last = crumbs.len().saturating_sub(1);
        crumbs
            .into_iter()
            .enumerate()
            .map(|(idx, crumb)| {
                if idx == last {
                    view! { <li class="breadcrumbs__item breadcrumbs__item--active">{crumb.label}</li> }
                        .into_any()
                } else {
                    view! {
                        <li class="breadcrumbs__item">
                            <A href=crumb.path>{crumb.label}</A>
                        </li>
                    }
                    .into_any()
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <nav class="breadcrumbs" aria-label="breadcrumb">
            <ol class="breadcrumbs__list">{items}</ol>
        </nav>
    }
}
