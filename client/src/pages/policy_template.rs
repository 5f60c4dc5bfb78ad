//! Policy template submission form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form is a thin shell over the generic submission flow: fields bind to
//! a `PolicyTemplateSubmission`, submit posts it to the template operation,
//! and the outcome shows as a dismissible banner. Field values survive a
//! failed submission so the operator can correct and retry.

#[cfg(test)]
#[path = "policy_template_test.rs"]
mod policy_template_test;

use leptos::prelude::*;

use crate::components::alert_banner::{AlertBanner, BannerTone};
use crate::net::types::{PolicyTemplateSubmission, TemplateType};
use crate::state::submission::{SubmissionState, SubmissionStatus, SubmitTicket};

/// Banner tone and text for a settled submission.
pub fn banner_for(status: &SubmissionStatus) -> Option<(BannerTone, String)> {
    match status {
        SubmissionStatus::Succeeded { message } => Some((BannerTone::Success, message.clone())),
        SubmissionStatus::Failed { error } => Some((BannerTone::Danger, error.summary())),
        SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
    }
}

fn post_template(submission: RwSignal<SubmissionState>, ticket: SubmitTicket, payload: PolicyTemplateSubmission) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = crate::net::api::generic_post(crate::net::api::ADD_TEMPLATE_ENDPOINT, &payload).await;
        let _ = submission.try_update(|s| s.finish(ticket, outcome));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (submission, ticket, payload);
    }
}

#[component]
pub fn PolicyTemplatePage() -> impl IntoView {
    let form = RwSignal::new(PolicyTemplateSubmission::default());
    let submission = RwSignal::new(SubmissionState::default());

    let submitting = move || submission.with(SubmissionState::is_submitting);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(Some(ticket)) = submission.try_update(SubmissionState::begin) {
            post_template(submission, ticket, form.get_untracked());
        }
    };

    let on_dismiss = Callback::new(move |()| submission.update(SubmissionState::dismiss));

    let banner = move || {
        submission
            .with(|s| banner_for(&s.status))
            .map(|(tone, message)| view! { <AlertBanner tone=tone message=message on_dismiss=on_dismiss/> })
    };

    let selected_type = move || form.with(|f| f.template_type.map(TemplateType::as_str).unwrap_or_default());

    view! {
        <div class="page policy-template">
            <section class="card">
                <header class="card__header bg-primary text-white">
                    <h3 class="card__title">"Add Policy Template"</h3>
                </header>
                <div class="card__body">
                    {banner}
                    <form class="form" on:submit=on_submit>
                        <label class="form__label" for="template-display-name">"Display Name"</label>
                        <input
                            id="template-display-name"
                            class="form__input"
                            type="text"
                            prop:value=move || form.with(|f| f.display_name.clone())
                            on:input=move |ev| form.update(|f| f.display_name = event_target_value(&ev))
                        />

                        <label class="form__label" for="template-description">"Description"</label>
                        <input
                            id="template-description"
                            class="form__input"
                            type="text"
                            prop:value=move || form.with(|f| f.description.clone())
                            on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                        />

                        <label class="form__label" for="template-type">"Template Type"</label>
                        <select
                            id="template-type"
                            class="form__input"
                            prop:value=selected_type
                            on:change=move |ev| {
                                let parsed = TemplateType::parse(&event_target_value(&ev));
                                form.update(|f| f.template_type = parsed);
                            }
                        >
                            <option value="">"Select a template type"</option>
                            {TemplateType::ALL
                                .iter()
                                .map(|kind| view! { <option value=kind.as_str()>{kind.label()}</option> })
                                .collect::<Vec<_>>()}
                        </select>

                        <label class="form__label" for="template-raw-json">"Raw JSON"</label>
                        <textarea
                            id="template-raw-json"
                            class="form__input form__input--code"
                            rows="12"
                            prop:value=move || form.with(|f| f.raw_json.clone())
                            on:input=move |ev| form.update(|f| f.raw_json = event_target_value(&ev))
                        ></textarea>

                        <button class="btn btn--primary form__submit" type="submit" disabled=submitting>
                            <Show when=submitting>
                                <span class="spinner spinner--inline" aria-hidden="true"></span>
                            </Show>
                            "Add Template"
                        </button>
                    </form>
                </div>
            </section>
        </div>
    }
}
