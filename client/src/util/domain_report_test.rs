use super::*;
use serde_json::json;

fn report(value: serde_json::Value) -> DomainTestReport {
    serde_json::from_value(value).unwrap()
}

// =============================================================
// Header colors
// =============================================================

#[test]
fn header_style_table() {
    let cases = [
        (FinalState::Unknown, "bg-primary", "text-white"),
        (FinalState::Fail, "bg-danger", "text-white"),
        (FinalState::Pass, "bg-success", "text-white"),
        (FinalState::Warn, "bg-warning", "text-black"),
    ];
    for (state, background, text) in cases {
        assert_eq!(header_style(state), HeaderStyle { background, text }, "{state:?}");
    }
}

#[test]
fn missing_final_state_uses_unknown_header() {
    let card = build_card(CheckKind::Dmarc, &DomainTestReport::default());
    assert_eq!(card.header.class(), "bg-primary text-white");
}

#[test]
fn unrecognized_final_state_uses_unknown_header() {
    let r = report(json!({ "DKIMFinalState": "Skipped" }));
    assert_eq!(build_card(CheckKind::Dkim, &r).header, header_style(FinalState::Unknown));
}

// =============================================================
// Validation lines
// =============================================================

#[test]
fn spf_fail_line_is_stripped_with_cross_icon() {
    let r = report(json!({
        "SPFResults": { "ValidationFails": ["FAIL: no SPF record"] },
        "SPFFinalState": "Fail"
    }));
    let card = build_card(CheckKind::Spf, &r);
    assert_eq!(card.lines, vec![ValidationLine { level: ValidationLevel::Fail, text: "no SPF record".to_owned() }]);
    assert_eq!(card.lines[0].level.icon(), StatusIcon::Cross);
    assert_eq!(card.header.background, "bg-danger");
}

#[test]
fn lines_are_ordered_pass_warn_fail() {
    let r = report(json!({
        "DMARCResults": {
            "ValidationFails": ["FAIL: p=none"],
            "ValidationWarns": ["WARN: no rua"],
            "ValidationPasses": ["PASS: record found", "PASS: valid syntax"]
        }
    }));
    let levels: Vec<ValidationLevel> = build_card(CheckKind::Dmarc, &r).lines.iter().map(|l| l.level).collect();
    assert_eq!(
        levels,
        [ValidationLevel::Pass, ValidationLevel::Pass, ValidationLevel::Warn, ValidationLevel::Fail]
    );
}

#[test]
fn strip_status_prefix_only_removes_own_leading_prefix() {
    assert_eq!(strip_status_prefix(ValidationLevel::Warn, "WARN: soft fail"), "soft fail");
    assert_eq!(strip_status_prefix(ValidationLevel::Warn, "FAIL: hard fail"), "FAIL: hard fail");
    assert_eq!(strip_status_prefix(ValidationLevel::Pass, "record PASS: ok"), "record PASS: ok");
}

#[test]
fn icons_follow_their_list() {
    assert_eq!(ValidationLevel::Pass.icon(), StatusIcon::Check);
    assert_eq!(ValidationLevel::Warn.icon(), StatusIcon::Triangle);
    assert_eq!(ValidationLevel::Fail.icon(), StatusIcon::Cross);
}

// =============================================================
// Kind-specific details
// =============================================================

#[test]
fn mx_single_record_matches_one_element_list() {
    let record = json!({ "Priority": 10, "Hostname": "mx1.example.com" });
    let single = report(json!({ "MXResults": { "Records": record.clone() } }));
    let listed = report(json!({ "MXResults": { "Records": [record] } }));

    let single_card = build_card(CheckKind::Mx, &single);
    assert_eq!(single_card.details, vec!["10 mx1.example.com".to_owned()]);
    assert_eq!(single_card, build_card(CheckKind::Mx, &listed));
}

#[test]
fn mx_badge_defaults_to_unknown_provider() {
    let r = report(json!({ "MXResults": { "Records": [] } }));
    assert_eq!(build_card(CheckKind::Mx, &r).badge.as_deref(), Some("Mail Provider: Unknown"));

    let named = report(json!({ "MXResults": { "MailProvider": { "Name": "Google Workspace" } } }));
    assert_eq!(
        build_card(CheckKind::Mx, &named).badge.as_deref(),
        Some("Mail Provider: Google Workspace")
    );
}

#[test]
fn only_mx_has_a_badge() {
    let r = DomainTestReport::default();
    for kind in CheckKind::ALL.into_iter().filter(|k| *k != CheckKind::Mx) {
        assert!(build_card(kind, &r).badge.is_none(), "{kind:?}");
    }
}

#[test]
fn txt_record_kinds_show_their_record() {
    let r = report(json!({
        "SPFResults": { "Record": "v=spf1 -all" },
        "DMARCResults": { "Record": "v=DMARC1; p=reject" }
    }));
    assert_eq!(build_card(CheckKind::Spf, &r).details, vec!["v=spf1 -all".to_owned()]);
    assert_eq!(build_card(CheckKind::Dmarc, &r).details, vec!["v=DMARC1; p=reject".to_owned()]);
}

#[test]
fn dnssec_missing_keys_render_no_rows() {
    let r = report(json!({ "DNSSECResults": {} }));
    assert!(build_card(CheckKind::Dnssec, &r).details.is_empty());
}

#[test]
fn dnssec_single_key_is_one_row() {
    let r = report(json!({ "DNSSECResults": { "Keys": "257 3 13 abc" } }));
    assert_eq!(build_card(CheckKind::Dnssec, &r).details, vec!["257 3 13 abc".to_owned()]);
}

#[test]
fn dkim_rows_show_record_text() {
    let r = report(json!({
        "DKIMResults": {
            "Records": [
                { "Selector": "selector1", "Record": "v=DKIM1; k=rsa; p=AAA" },
                { "Selector": "selector2" }
            ]
        }
    }));
    assert_eq!(build_card(CheckKind::Dkim, &r).details, vec!["v=DKIM1; k=rsa; p=AAA".to_owned()]);
}

#[test]
fn card_titles_name_the_kind() {
    let titles: Vec<String> = CheckKind::ALL
        .into_iter()
        .map(|kind| build_card(kind, &DomainTestReport::default()).title)
        .collect();
    assert_eq!(titles, ["MX Results", "SPF Results", "DMARC Results", "DNSSEC Results", "DKIM Results"]);
}
