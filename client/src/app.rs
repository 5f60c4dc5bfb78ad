//! Root application component with console chrome and routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::components::breadcrumbs::Breadcrumbs;
use crate::components::sidebar::Sidebar;
use crate::pages::RoutedPage;
use crate::pages::not_found::NotFoundPage;
use crate::routes::registry;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Every location is handed to `RoutedPage`; the route registry, not the
/// router, decides what a path shows.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    if let Err(e) = registry() {
        return view! {
            <Title text="Tenant Console"/>
            <div class="page registry-error" role="alert">
                <h2 class="page__title">"Console routes are misconfigured"</h2>
                <p>{e.to_string()}</p>
            </div>
        }
        .into_any();
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/tenant-console.css"/>
        <Title text="Tenant Console"/>

        <Router>
            <div class="console">
                <Sidebar/>
                <main class="console__main">
                    <Breadcrumbs/>
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("") view=RoutedPage/>
                        <Route path=WildcardSegment("any") view=RoutedPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
    .into_any()
}
