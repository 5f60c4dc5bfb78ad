use super::*;
use serde_json::json;

// =============================================================
// OneOrMany
// =============================================================

#[test]
fn one_or_many_accepts_single_object() {
    let records: OneOrMany<MxRecord> =
        serde_json::from_value(json!({ "Priority": 10, "Hostname": "mx1.example.com" })).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records.0[0].hostname.as_deref(), Some("mx1.example.com"));
}

#[test]
fn one_or_many_accepts_list() {
    let keys: OneOrMany<String> = serde_json::from_value(json!(["k1", "k2"])).unwrap();
    assert_eq!(keys.as_slice(), ["k1".to_owned(), "k2".to_owned()]);
}

#[test]
fn one_or_many_treats_null_as_empty() {
    let keys: OneOrMany<String> = serde_json::from_value(json!(null)).unwrap();
    assert!(keys.is_empty());
}

#[test]
fn one_or_many_serializes_as_plain_list() {
    let keys = OneOrMany(vec!["a".to_owned()]);
    assert_eq!(serde_json::to_value(&keys).unwrap(), json!(["a"]));
}

// =============================================================
// FinalState
// =============================================================

#[test]
fn final_state_parses_known_values() {
    let pass: FinalState = serde_json::from_value(json!("Pass")).unwrap();
    let warn: FinalState = serde_json::from_value(json!("Warn")).unwrap();
    let fail: FinalState = serde_json::from_value(json!("Fail")).unwrap();
    assert_eq!((pass, warn, fail), (FinalState::Pass, FinalState::Warn, FinalState::Fail));
}

#[test]
fn final_state_unrecognized_value_is_unknown() {
    let state: FinalState = serde_json::from_value(json!("Skipped")).unwrap();
    assert_eq!(state, FinalState::Unknown);
}

// =============================================================
// DomainTestReport
// =============================================================

#[test]
fn domain_report_decodes_upstream_shape() {
    let report: DomainTestReport = serde_json::from_value(json!({
        "Domain": "example.com",
        "MXResults": {
            "Records": [{ "Priority": 0, "Hostname": "example-com.mail.protection.outlook.com" }],
            "MailProvider": { "Name": "Microsoft 365" },
            "ValidationPasses": ["PASS: MX records found"],
            "ValidationWarns": [],
            "ValidationFails": []
        },
        "MXFinalState": "Pass",
        "SPFResults": {
            "Record": "v=spf1 include:spf.protection.outlook.com -all",
            "ValidationFails": ["FAIL: no SPF record"]
        },
        "SPFFinalState": "Fail",
        "DNSSECResults": { "Keys": null },
        "DKIMResults": { "Records": { "Selector": "selector1", "Record": "v=DKIM1; k=rsa" } }
    }))
    .unwrap();

    assert_eq!(report.domain.as_deref(), Some("example.com"));
    assert_eq!(report.mx_final_state, Some(FinalState::Pass));
    let mx = report.mx.as_ref().unwrap();
    assert_eq!(mx.records.len(), 1);
    assert_eq!(mx.validations.passes.as_slice(), ["PASS: MX records found".to_owned()]);
    assert_eq!(
        mx.mail_provider.as_ref().and_then(|p| p.name.as_deref()),
        Some("Microsoft 365")
    );

    let spf = report.spf.as_ref().unwrap();
    assert_eq!(spf.validations.fails.as_slice(), ["FAIL: no SPF record".to_owned()]);
    assert!(spf.validations.passes.is_empty());

    assert!(report.dnssec.as_ref().unwrap().keys.is_empty());
    assert_eq!(report.dkim.as_ref().unwrap().records.len(), 1);
    assert!(report.dmarc.is_none());
    assert!(report.dmarc_final_state.is_none());
}

#[test]
fn domain_report_tolerates_single_string_validation_lists() {
    let results: TxtRecordResults =
        serde_json::from_value(json!({ "ValidationWarns": "WARN: soft fail" })).unwrap();
    assert_eq!(results.validations.warns.as_slice(), ["WARN: soft fail".to_owned()]);
}

// =============================================================
// Policy templates
// =============================================================

#[test]
fn template_type_round_trips_through_wire_value() {
    for kind in TemplateType::ALL {
        assert_eq!(TemplateType::parse(kind.as_str()), Some(kind));
    }
    assert_eq!(TemplateType::parse("Compliance"), None);
}

#[test]
fn template_submission_uses_backend_field_names() {
    let submission = PolicyTemplateSubmission {
        display_name: "Baseline".to_owned(),
        description: "Default device settings".to_owned(),
        template_type: Some(TemplateType::Catalog),
        raw_json: "{\"settings\":[]}".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&submission).unwrap(),
        json!({
            "displayName": "Baseline",
            "description": "Default device settings",
            "TemplateType": "Catalog",
            "RawJSON": "{\"settings\":[]}"
        })
    );
}

#[test]
fn template_submission_omits_unselected_type() {
    let value = serde_json::to_value(PolicyTemplateSubmission::default()).unwrap();
    assert!(value.get("TemplateType").is_none());
}

#[test]
fn null_domain_does_not_fail_report() {
    let report: DomainTestReport =
        serde_json::from_value(json!({ "Domain": null, "SPFFinalState": "Pass" })).unwrap();
    assert!(report.domain.is_none());
    assert_eq!(report.spf_final_state, Some(FinalState::Pass));
}

// =============================================================
// Generic POST
// =============================================================

#[test]
fn post_outcome_uses_results_string() {
    let resp: GenericPostResponse =
        serde_json::from_value(json!({ "Results": "Successfully added template" })).unwrap();
    let outcome = PostOutcome::from(resp);
    assert!(outcome.success);
    assert_eq!(outcome.message, "Successfully added template");
}

#[test]
fn post_outcome_joins_result_lists() {
    let resp: GenericPostResponse = serde_json::from_value(json!({ "Results": ["one", "two"] })).unwrap();
    assert_eq!(PostOutcome::from(resp).message, "one\ntwo");
}

#[test]
fn post_outcome_without_results_has_default_message() {
    let resp: GenericPostResponse = serde_json::from_value(json!({})).unwrap();
    assert_eq!(PostOutcome::from(resp).message, "Request completed.");
}

#[test]
fn post_outcome_reports_backend_rejection() {
    let resp: GenericPostResponse =
        serde_json::from_value(json!({ "success": false, "message": "template rejected" })).unwrap();
    assert_eq!(
        PostOutcome::from(resp),
        PostOutcome { success: false, message: "template rejected".to_owned() }
    );
}

#[test]
fn post_outcome_prefers_message_over_results() {
    let resp: GenericPostResponse =
        serde_json::from_value(json!({ "success": true, "message": "saved", "Results": "ignored" })).unwrap();
    assert_eq!(PostOutcome::from(resp), PostOutcome { success: true, message: "saved".to_owned() });
}

#[test]
fn post_outcome_renders_structured_results() {
    let resp: GenericPostResponse =
        serde_json::from_value(json!({ "Results": { "state": "success", "resultText": "Added" } })).unwrap();
    let outcome = PostOutcome::from(resp);
    assert!(outcome.success);
    let rendered: serde_json::Value = serde_json::from_str(&outcome.message).unwrap();
    assert_eq!(rendered, json!({ "state": "success", "resultText": "Added" }));
}

#[test]
fn post_outcome_mixes_text_and_object_results() {
    let resp: GenericPostResponse =
        serde_json::from_value(json!({ "Results": ["Added", { "id": 7 }] })).unwrap();
    assert_eq!(PostOutcome::from(resp).message, "Added\n{\"id\":7}");
}

// =============================================================
// ApiError
// =============================================================

#[test]
fn api_error_status_keeps_json_body() {
    let err = ApiError::from_status(500, r#"{"message":"tenant not found"}"#);
    assert_eq!(err, ApiError::Status { status: 500, body: json!({ "message": "tenant not found" }) });
    assert_eq!(err.summary(), "tenant not found");
}

#[test]
fn api_error_status_keeps_plain_text_body() {
    let err = ApiError::from_status(502, "Bad Gateway");
    assert_eq!(err, ApiError::Status { status: 502, body: json!("Bad Gateway") });
    assert_eq!(err.summary(), "request failed with status 502");
}

#[test]
fn api_error_rejected_summary_is_bare_message() {
    let err = ApiError::Rejected { message: "template rejected".to_owned() };
    assert_eq!(err.summary(), "template rejected");
}

#[test]
fn api_error_detail_json_is_tagged() {
    let detail = ApiError::Timeout { secs: 60 }.detail_json();
    let value: serde_json::Value = serde_json::from_str(&detail).unwrap();
    assert_eq!(value, json!({ "kind": "timeout", "secs": 60 }));
}
