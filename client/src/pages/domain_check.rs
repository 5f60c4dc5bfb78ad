//! Individual domain email-security checker.
//!
//! SYSTEM CONTEXT
//! ==============
//! A check starts on explicit submission or from the `domain` query
//! parameter (on mount and on back/forward navigation). Submitting writes the
//! parameter back so a finished check is bookmarkable. All five report cards
//! read the one stored result.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate, use_query_map};

use crate::components::error_callout::DomainCheckError;
use crate::components::report_card::ReportCardView;
use crate::state::domain_check::{CheckStatus, CheckTicket, DomainCheckState};
use crate::util::domain_report::{CheckKind, build_card};
use crate::util::query::{DOMAIN_QUERY_KEY, domain_from_query, domain_search};

/// Run the domain-test query for `ticket` and store the outcome.
fn run_check(check: RwSignal<DomainCheckState>, ticket: CheckTicket) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = crate::net::api::list_domain_tests(&ticket.domain).await;
        // The view may be gone by now; a disposed signal just skips the update.
        if check.try_update(|s| s.finish(&ticket, outcome)) == Some(false) {
            log::debug!("dropped stale domain check for {}", ticket.domain);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (check, ticket);
    }
}

#[component]
pub fn DomainCheckPage() -> impl IntoView {
    let check = RwSignal::new(DomainCheckState::default());
    let domain_input = RwSignal::new(String::new());
    let input_error = RwSignal::new(None::<String>);
    let query = use_query_map();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let Some(wanted) = domain_from_query(query.get().get(DOMAIN_QUERY_KEY).as_deref()) else {
            return;
        };
        if !check.with_untracked(|s| s.should_auto_trigger(Some(&wanted))) {
            return;
        }
        domain_input.set(wanted.clone());
        input_error.set(None);
        if let Some(Ok(ticket)) = check.try_update(|s| s.restart(&wanted)) {
            run_check(check, ticket);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let raw = domain_input.get_untracked();
        match check.try_update(|s| s.begin(&raw)) {
            Some(Ok(ticket)) => {
                input_error.set(None);
                let target = format!("{}{}", location.pathname.get_untracked(), domain_search(&ticket.domain));
                navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
                run_check(check, ticket);
            }
            Some(Err(e)) => input_error.set(Some(e.to_string())),
            None => {}
        }
    };

    let fetching = move || check.with(DomainCheckState::is_fetching);

    let failure = move || {
        check.with(|s| match &s.status {
            CheckStatus::Failed { domain, error } => {
                Some(view! { <DomainCheckError domain=domain.clone() error=error.clone()/> })
            }
            _ => None,
        })
    };

    let section = move |kind: CheckKind| {
        move || {
            check
                .with(|s| s.report().map(|report| build_card(kind, report)))
                .map(|card| view! { <ReportCardView card=card/> })
        }
    };

    view! {
        <div class="page domain-check">
            <div class="page__row">
                <section class="card">
                    <header class="card__header bg-primary text-white">
                        <h3 class="card__title">"Email Security Domain Checker"</h3>
                    </header>
                    <div class="card__body">
                        <form class="form" on:submit=on_submit>
                            <label class="form__label" for="domain-check-input">"Domain Name"</label>
                            <input
                                id="domain-check-input"
                                class="form__input"
                                type="text"
                                placeholder="example.com"
                                prop:value=move || domain_input.get()
                                on:input=move |ev| domain_input.set(event_target_value(&ev))
                            />
                            <button class="btn btn--primary form__submit" type="submit" disabled=fetching>
                                <Show when=fetching>
                                    <span class="spinner spinner--inline" aria-hidden="true"></span>
                                </Show>
                                "Check Domain"
                            </button>
                        </form>
                        <Show when=move || input_error.get().is_some()>
                            <p class="form__error">{move || input_error.get().unwrap_or_default()}</p>
                        </Show>
                        {failure}
                    </div>
                </section>
                {section(CheckKind::Mx)}
            </div>
            <div class="page__row">
                {section(CheckKind::Spf)}
                {section(CheckKind::Dmarc)}
            </div>
            <div class="page__row">
                {section(CheckKind::Dnssec)}
                {section(CheckKind::Dkim)}
            </div>
        </div>
    }
}
