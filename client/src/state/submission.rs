//! Submission state for forms that post to a named backend operation.
//!
//! The submit control is disabled while `Submitting`; a settled state keeps
//! its banner until dismissed or replaced by the next submission.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use crate::net::types::{ApiError, PostOutcome};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded {
        message: String,
    },
    Failed {
        error: ApiError,
    },
}

/// Handle for one in-flight submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitTicket(u64);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubmissionState {
    pub status: SubmissionStatus,
    seq: u64,
}

impl SubmissionState {
    /// Start a submission; `None` while one is already in flight.
    pub fn begin(&mut self) -> Option<SubmitTicket> {
        if self.is_submitting() {
            return None;
        }
        self.seq += 1;
        self.status = SubmissionStatus::Submitting;
        Some(SubmitTicket(self.seq))
    }

    /// Apply the operation's outcome. Returns `false` for a stale ticket.
    pub fn finish(&mut self, ticket: SubmitTicket, outcome: Result<PostOutcome, ApiError>) -> bool {
        if ticket.0 != self.seq || !self.is_submitting() {
            return false;
        }
        self.status = match outcome {
            Ok(PostOutcome { success: true, message }) => SubmissionStatus::Succeeded { message },
            Ok(PostOutcome { success: false, message }) => SubmissionStatus::Failed {
                error: ApiError::Rejected { message },
            },
            Err(error) => SubmissionStatus::Failed { error },
        };
        true
    }

    /// Hide the banner of a settled submission.
    pub fn dismiss(&mut self) {
        if !self.is_submitting() {
            self.status = SubmissionStatus::Idle;
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.status, SubmissionStatus::Submitting)
    }
}
