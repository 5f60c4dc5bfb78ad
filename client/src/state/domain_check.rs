//! Fetch state for the individual domain check view.
//!
//! SYSTEM CONTEXT
//! ==============
//! One instance per mounted view, held in a `RwSignal`. Report cards read the
//! same stored result; nothing here is shared across views.
//!
//! DESIGN
//! ======
//! `Idle -> Fetching -> (Succeeded | Failed)`, re-entering `Fetching` from any
//! settled state. Each request carries a sequence number so a response that
//! arrives after a newer request started is dropped instead of overwriting it.

#[cfg(test)]
#[path = "domain_check_test.rs"]
mod domain_check_test;

use crate::net::types::{ApiError, DomainTestReport};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum CheckStatus {
    #[default]
    Idle,
    Fetching {
        domain: String,
    },
    Succeeded {
        domain: String,
        report: DomainTestReport,
    },
    Failed {
        domain: String,
        error: ApiError,
    },
}

/// Handle for one in-flight check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckTicket {
    pub domain: String,
    seq: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BeginError {
    #[error("Enter a domain name first.")]
    EmptyDomain,
    #[error("A check is already running.")]
    InFlight,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DomainCheckState {
    pub status: CheckStatus,
    seq: u64,
}

impl DomainCheckState {
    /// Start a check for `raw_domain` (trimmed) on explicit submission.
    ///
    /// # Errors
    ///
    /// Rejects an empty domain, and any new check while one is in flight.
    pub fn begin(&mut self, raw_domain: &str) -> Result<CheckTicket, BeginError> {
        if self.is_fetching() {
            return Err(BeginError::InFlight);
        }
        self.restart(raw_domain)
    }

    /// Start a check driven by the location, abandoning any in-flight one.
    /// The abandoned response is dropped by `finish` when it lands.
    ///
    /// # Errors
    ///
    /// Rejects an empty domain.
    pub fn restart(&mut self, raw_domain: &str) -> Result<CheckTicket, BeginError> {
        let domain = raw_domain.trim();
        if domain.is_empty() {
            return Err(BeginError::EmptyDomain);
        }
        self.seq += 1;
        self.status = CheckStatus::Fetching { domain: domain.to_owned() };
        Ok(CheckTicket { domain: domain.to_owned(), seq: self.seq })
    }

    /// Apply a response. Returns `false` when the ticket is stale.
    pub fn finish(&mut self, ticket: &CheckTicket, outcome: Result<DomainTestReport, ApiError>) -> bool {
        if ticket.seq != self.seq || !self.is_fetching() {
            return false;
        }
        let domain = ticket.domain.clone();
        self.status = match outcome {
            Ok(report) => CheckStatus::Succeeded { domain, report },
            Err(error) => CheckStatus::Failed { domain, error },
        };
        true
    }

    pub fn is_fetching(&self) -> bool {
        matches!(self.status, CheckStatus::Fetching { .. })
    }

    /// Domain of the current or most recent check.
    pub fn domain(&self) -> Option<&str> {
        match &self.status {
            CheckStatus::Idle => None,
            CheckStatus::Fetching { domain }
            | CheckStatus::Succeeded { domain, .. }
            | CheckStatus::Failed { domain, .. } => Some(domain),
        }
    }

    pub fn report(&self) -> Option<&DomainTestReport> {
        match &self.status {
            CheckStatus::Succeeded { report, .. } => Some(report),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match &self.status {
            CheckStatus::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Whether the location's `domain` parameter should start a check:
    /// present, and not the domain already requested.
    pub fn should_auto_trigger(&self, query_domain: Option<&str>) -> bool {
        let Some(wanted) = query_domain.map(str::trim).filter(|d| !d.is_empty()) else {
            return false;
        };
        self.domain() != Some(wanted)
    }
}
