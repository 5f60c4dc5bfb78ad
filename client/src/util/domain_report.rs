//! Presentation model for the email-security domain report.
//!
//! DESIGN
//! ======
//! Each check kind maps to explicit accessors into `DomainTestReport` instead
//! of string-built field names, and every card is derived by one pure
//! function so the rendered content can be asserted without a DOM.

#[cfg(test)]
#[path = "domain_report_test.rs"]
mod domain_report_test;

use crate::net::types::{DomainTestReport, FinalState, Validations};

/// A category of domain-security validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CheckKind {
    Mx,
    Spf,
    Dmarc,
    Dnssec,
    Dkim,
}

impl CheckKind {
    /// Render order of the report cards.
    pub const ALL: [Self; 5] = [Self::Mx, Self::Spf, Self::Dmarc, Self::Dnssec, Self::Dkim];

    pub fn label(self) -> &'static str {
        match self {
            Self::Mx => "MX",
            Self::Spf => "SPF",
            Self::Dmarc => "DMARC",
            Self::Dnssec => "DNSSEC",
            Self::Dkim => "DKIM",
        }
    }

    pub fn final_state(self, report: &DomainTestReport) -> FinalState {
        let state = match self {
            Self::Mx => report.mx_final_state,
            Self::Spf => report.spf_final_state,
            Self::Dmarc => report.dmarc_final_state,
            Self::Dnssec => report.dnssec_final_state,
            Self::Dkim => report.dkim_final_state,
        };
        state.unwrap_or_default()
    }

    pub fn validations(self, report: &DomainTestReport) -> Option<&Validations> {
        match self {
            Self::Mx => report.mx.as_ref().map(|r| &r.validations),
            Self::Spf => report.spf.as_ref().map(|r| &r.validations),
            Self::Dmarc => report.dmarc.as_ref().map(|r| &r.validations),
            Self::Dnssec => report.dnssec.as_ref().map(|r| &r.validations),
            Self::Dkim => report.dkim.as_ref().map(|r| &r.validations),
        }
    }

    /// Kind-specific record rows shown above the validation list.
    pub fn detail_rows(self, report: &DomainTestReport) -> Vec<String> {
        match self {
            Self::Mx => report.mx.as_ref().map_or_else(Vec::new, |mx| {
                mx.records
                    .as_slice()
                    .iter()
                    .map(|record| {
                        let priority = record.priority.as_ref().map(scalar_text).unwrap_or_default();
                        let hostname = record.hostname.as_deref().unwrap_or_default();
                        format!("{priority} {hostname}").trim().to_owned()
                    })
                    .collect()
            }),
            Self::Spf => report.spf.iter().filter_map(|r| r.record.clone()).collect(),
            Self::Dmarc => report.dmarc.iter().filter_map(|r| r.record.clone()).collect(),
            Self::Dnssec => report
                .dnssec
                .as_ref()
                .map_or_else(Vec::new, |r| r.keys.as_slice().to_vec()),
            Self::Dkim => report.dkim.as_ref().map_or_else(Vec::new, |r| {
                r.records
                    .as_slice()
                    .iter()
                    .filter_map(|record| record.record.clone())
                    .collect()
            }),
        }
    }
}

fn scalar_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Card header classes for a final state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderStyle {
    pub background: &'static str,
    pub text: &'static str,
}

impl HeaderStyle {
    pub fn class(self) -> String {
        format!("{} {}", self.background, self.text)
    }
}

pub fn header_style(state: FinalState) -> HeaderStyle {
    match state {
        FinalState::Unknown => HeaderStyle { background: "bg-primary", text: "text-white" },
        FinalState::Fail => HeaderStyle { background: "bg-danger", text: "text-white" },
        FinalState::Pass => HeaderStyle { background: "bg-success", text: "text-white" },
        FinalState::Warn => HeaderStyle { background: "bg-warning", text: "text-black" },
    }
}

/// Which validation list a message came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationLevel {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusIcon {
    Check,
    Triangle,
    Cross,
}

impl StatusIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Check => "✔",
            Self::Triangle => "⚠",
            Self::Cross => "✖",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Check => "status-icon text-success",
            Self::Triangle => "status-icon text-warning",
            Self::Cross => "status-icon text-danger",
        }
    }
}

impl ValidationLevel {
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Pass => "PASS: ",
            Self::Warn => "WARN: ",
            Self::Fail => "FAIL: ",
        }
    }

    pub fn icon(self) -> StatusIcon {
        match self {
            Self::Pass => StatusIcon::Check,
            Self::Warn => StatusIcon::Triangle,
            Self::Fail => StatusIcon::Cross,
        }
    }
}

/// Drop the level's literal prefix from the start of a message. Only a
/// leading prefix is stripped; the same text later in the message stays.
pub fn strip_status_prefix(level: ValidationLevel, message: &str) -> &str {
    message.strip_prefix(level.prefix()).unwrap_or(message)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationLine {
    pub level: ValidationLevel,
    pub text: String,
}

/// Everything one report card displays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportCard {
    pub kind: CheckKind,
    pub title: String,
    pub header: HeaderStyle,
    pub details: Vec<String>,
    pub badge: Option<String>,
    pub lines: Vec<ValidationLine>,
}

pub fn build_card(kind: CheckKind, report: &DomainTestReport) -> ReportCard {
    let header = header_style(kind.final_state(report));

    let badge = (kind == CheckKind::Mx).then(|| {
        let provider = report
            .mx
            .as_ref()
            .and_then(|mx| mx.mail_provider.as_ref())
            .and_then(|p| p.name.as_deref())
            .filter(|name| !name.is_empty())
            .unwrap_or("Unknown");
        format!("Mail Provider: {provider}")
    });

    let mut lines = Vec::new();
    if let Some(validations) = kind.validations(report) {
        let groups = [
            (ValidationLevel::Pass, &validations.passes),
            (ValidationLevel::Warn, &validations.warns),
            (ValidationLevel::Fail, &validations.fails),
        ];
        for (level, messages) in groups {
            lines.extend(messages.as_slice().iter().map(|message| ValidationLine {
                level,
                text: strip_status_prefix(level, message).to_owned(),
            }));
        }
    }

    ReportCard {
        kind,
        title: format!("{} Results", kind.label()),
        header,
        details: kind.detail_rows(report),
        badge,
        lines,
    }
}
