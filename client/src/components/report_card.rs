//! One email-security report card (MX, SPF, DMARC, DNSSEC or DKIM).

use leptos::prelude::*;

use crate::util::domain_report::ReportCard;

/// Card with a state-colored header, kind-specific record rows, and the
/// pass/warn/fail validation lines.
#[component]
pub fn ReportCardView(card: ReportCard) -> impl IntoView {
    let header_class = format!("card__header {}", card.header.class());
    let kind_class = format!("card report-card report-card--{}", card.kind.label().to_ascii_lowercase());

    let records = (!card.details.is_empty()).then(|| {
        let rows = card
            .details
            .into_iter()
            .map(|row| view! { <div class="report-card__record">{row}</div> })
            .collect::<Vec<_>>();
        view! { <div class="report-card__records bg-secondary text-white">{rows}</div> }
    });

    let badge = card
        .badge
        .map(|text| view! { <span class="badge bg-info report-card__badge">{text}</span> });

    let lines = card
        .lines
        .into_iter()
        .map(|line| {
            let icon = line.level.icon();
            view! {
                <div class="report-card__line">
                    <span class=icon.class() aria-hidden="true">{icon.glyph()}</span>
                    <span class="report-card__text">{line.text}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class=kind_class>
            <header class=header_class>
                <h3 class="card__title">{card.title}</h3>
            </header>
            <div class="card__body">
                {records}
                {badge}
                <div class="report-card__lines">{lines}</div>
            </div>
        </section>
    }
}
