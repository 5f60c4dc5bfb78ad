//! Landing page: the navigation sections as a directory of views.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::registry;

#[component]
pub fn HomePage() -> impl IntoView {
    let sections = registry().map(|routes| routes.sections()).unwrap_or_default();

    let cards = sections
        .into_iter()
        .filter(|section| !section.links.is_empty())
        .map(|section| {
            let links = section
                .links
                .into_iter()
                .map(|link| view! { <li><A href=link.path>{link.label}</A></li> })
                .collect::<Vec<_>>();
            view! {
                <section class="card home__section">
                    <header class="card__header">
                        <h3 class="card__title">{section.entry.label}</h3>
                    </header>
                    <ul class="card__body home__links">{links}</ul>
                </section>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="page home">
            <h2 class="page__title">"Tenant Console"</h2>
            <div class="home__grid">{cards}</div>
        </div>
    }
}
