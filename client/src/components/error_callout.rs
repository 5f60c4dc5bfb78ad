//! Inline error callout for a failed domain check.

use leptos::prelude::*;

use crate::net::types::ApiError;

/// Error summary with a raw-detail panel that starts collapsed.
#[component]
pub fn DomainCheckError(domain: String, error: ApiError) -> impl IntoView {
    let expanded = RwSignal::new(false);
    let summary = error.summary();
    let detail = error.detail_json();

    view! {
        <div class="callout callout--danger" role="alert">
            <div class="callout__row">
                <div class="callout__text">
                    "Unable to load domain check for "
                    <b>{domain}</b>
                    <br/>
                    {summary}
                </div>
                <button
                    class="btn callout__toggle"
                    type="button"
                    title=move || if expanded.get() { "Hide details" } else { "Show details" }
                    on:click=move |_| expanded.update(|open| *open = !*open)
                >
                    {move || if expanded.get() { "−" } else { "+" }}
                </button>
            </div>
            <Show when=move || expanded.get()>
                <pre class="callout__detail">{detail.clone()}</pre>
            </Show>
        </div>
    }
}
