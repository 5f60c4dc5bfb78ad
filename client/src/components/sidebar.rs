//! Navigation sidebar built from the route registry sections.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::{NavSection, registry};

#[component]
pub fn Sidebar() -> impl IntoView {
    let sections = registry().map(|routes| routes.sections()).unwrap_or_default();

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">"Tenant Console"</div>
            {sections.into_iter().map(|section| view! { <SidebarSection section=section/> }).collect::<Vec<_>>()}
        </nav>
    }
}

#[component]
fn SidebarSection(section: NavSection) -> impl IntoView {
    if section.links.is_empty() {
        return view! {
            <div class="sidebar__section">
                <A href=section.entry.path attr:class="sidebar__title sidebar__link">
                    {section.entry.label}
                </A>
            </div>
        }
        .into_any();
    }

    let links = section
        .links
        .into_iter()
        .map(|link| {
            view! {
                <li class="sidebar__item">
                    <A href=link.path attr:class="sidebar__link">{link.label}</A>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="sidebar__section">
            <span class="sidebar__title">{section.entry.label}</span>
            <ul class="sidebar__list">{links}</ul>
        </div>
    }
    .into_any()
}
