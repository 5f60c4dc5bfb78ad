//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. `RoutedPage` is the single entry the router mounts: it
//! resolves the location through the route registry and builds the bound
//! view on demand, so a view's code only runs once its path is visited.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod domain_check;
pub mod home;
pub mod not_found;
pub mod policy_template;
pub mod unavailable;

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::components::loading::LoadingPlaceholder;
use crate::routes::{Resolution, ViewKey, registry};
use domain_check::DomainCheckPage;
use home::HomePage;
use not_found::NotFoundPage;
use policy_template::PolicyTemplatePage;
use unavailable::UnavailablePage;

/// Deferred constructor for one view unit.
pub type ViewConstructor = fn() -> AnyView;

/// Constructor bound to `key`, or `None` when this build does not ship it.
pub fn constructor(key: ViewKey) -> Option<ViewConstructor> {
    match key {
        ViewKey::Home => Some(|| view! { <HomePage/> }.into_any()),
        ViewKey::IndividualDomainCheck => Some(|| view! { <DomainCheckPage/> }.into_any()),
        ViewKey::AddPolicyTemplate => Some(|| view! { <PolicyTemplatePage/> }.into_any()),
        _ => None,
    }
}

#[component]
pub fn RoutedPage() -> impl IntoView {
    let location = use_location();

    let content = move || {
        let Ok(routes) = registry() else {
            return view! { <NotFoundPage/> }.into_any();
        };
        match routes.resolve(&location.pathname.get()) {
            Resolution::View { entry, key } => match constructor(key) {
                Some(build) => build(),
                None => view! { <UnavailablePage label=entry.label/> }.into_any(),
            },
            Resolution::Group { .. } => ().into_any(),
            Resolution::Redirect { to } => view! { <Redirect path=to/> }.into_any(),
            Resolution::NotFound => view! { <NotFoundPage/> }.into_any(),
        }
    };

    view! {
        <Suspense fallback=|| view! { <LoadingPlaceholder/> }>
            {content}
        </Suspense>
    }
}
