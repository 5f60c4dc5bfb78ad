//! Dismissible success/failure banner for form submissions.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerTone {
    Success,
    Danger,
}

impl BannerTone {
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "alert alert--success",
            Self::Danger => "alert alert--danger",
        }
    }
}

#[component]
pub fn AlertBanner(tone: BannerTone, message: String, on_dismiss: Callback<()>) -> impl IntoView {
    view! {
        <div class=tone.class() role="alert">
            <span class="alert__message">{message}</span>
            <button
                class="btn alert__close"
                type="button"
                title="Dismiss"
                on:click=move |_| on_dismiss.run(())
            >
                "×"
            </button>
        </div>
    }
}
