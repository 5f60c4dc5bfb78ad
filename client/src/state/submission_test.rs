use super::*;

fn ok(message: &str) -> Result<PostOutcome, ApiError> {
    Ok(PostOutcome { success: true, message: message.to_owned() })
}

#[test]
fn default_is_idle() {
    assert_eq!(SubmissionState::default().status, SubmissionStatus::Idle);
}

#[test]
fn only_one_submission_in_flight() {
    let mut state = SubmissionState::default();
    assert!(state.begin().is_some());
    assert!(state.is_submitting());
    assert!(state.begin().is_none());
}

#[test]
fn success_shows_server_message() {
    let mut state = SubmissionState::default();
    let ticket = state.begin().unwrap();
    assert!(state.finish(ticket, ok("Successfully added template")));
    assert_eq!(
        state.status,
        SubmissionStatus::Succeeded { message: "Successfully added template".to_owned() }
    );
    assert!(!state.is_submitting());
}

#[test]
fn failure_is_surfaced() {
    let mut state = SubmissionState::default();
    let ticket = state.begin().unwrap();
    let error = ApiError::from_status(500, r#"{"Results":"Failed to add template"}"#);
    assert!(state.finish(ticket, Err(error.clone())));
    assert_eq!(state.status, SubmissionStatus::Failed { error });
}

#[test]
fn unsuccessful_outcome_is_a_failure() {
    let mut state = SubmissionState::default();
    let ticket = state.begin().unwrap();
    state.finish(ticket, Ok(PostOutcome { success: false, message: "rejected".to_owned() }));
    assert_eq!(
        state.status,
        SubmissionStatus::Failed { error: ApiError::Rejected { message: "rejected".to_owned() } }
    );
}

#[test]
fn resubmit_after_settle_replaces_banner() {
    let mut state = SubmissionState::default();
    let first = state.begin().unwrap();
    state.finish(first, ok("done"));
    let second = state.begin().unwrap();
    assert_ne!(first, second);
    assert_eq!(state.status, SubmissionStatus::Submitting);
}

#[test]
fn stale_ticket_is_ignored() {
    let mut state = SubmissionState::default();
    let first = state.begin().unwrap();
    state.finish(first, ok("done"));
    let _second = state.begin().unwrap();
    assert!(!state.finish(first, ok("late")));
    assert!(state.is_submitting());
}

#[test]
fn dismiss_clears_settled_banner_only() {
    let mut state = SubmissionState::default();
    let ticket = state.begin().unwrap();
    state.dismiss();
    assert!(state.is_submitting());

    state.finish(ticket, ok("done"));
    state.dismiss();
    assert_eq!(state.status, SubmissionStatus::Idle);
}
