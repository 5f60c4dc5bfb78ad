//! Wire types for the management API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The upstream API speaks PascalCase JSON and is not consistent about list
//! shapes: a field documented as a list sometimes arrives as a single object
//! or as `null`. `OneOrMany` absorbs that at the decode boundary so views
//! only ever iterate plain vectors.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// SHAPE NORMALIZATION
// =============================================================================

/// A list field that may arrive as a single value, a list, or `null`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct OneOrMany<T>(pub Vec<T>);

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> OneOrMany<T> {
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for OneOrMany<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Shape<U> {
            Many(Vec<U>),
            One(U),
        }

        let items = match Option::<Shape<T>>::deserialize(deserializer)? {
            None => Vec::new(),
            Some(Shape::Many(items)) => items,
            Some(Shape::One(item)) => vec![item],
        };
        Ok(Self(items))
    }
}

// =============================================================================
// DOMAIN TESTS
// =============================================================================

/// Outcome of one check kind for a domain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinalState {
    Pass,
    Fail,
    Warn,
    /// Missing, `null`, or any value the console does not recognize.
    #[default]
    #[serde(other)]
    Unknown,
}

/// Validation messages shared by every per-kind result block.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Validations {
    #[serde(rename = "ValidationPasses", default)]
    pub passes: OneOrMany<String>,
    #[serde(rename = "ValidationWarns", default)]
    pub warns: OneOrMany<String>,
    #[serde(rename = "ValidationFails", default)]
    pub fails: OneOrMany<String>,
}

/// One MX record. `Priority` is usually numeric but is kept loose.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MxRecord {
    #[serde(rename = "Priority", default)]
    pub priority: Option<serde_json::Value>,
    #[serde(rename = "Hostname", default)]
    pub hostname: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MailProvider {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MxResults {
    #[serde(rename = "Records", default)]
    pub records: OneOrMany<MxRecord>,
    #[serde(rename = "MailProvider", default)]
    pub mail_provider: Option<MailProvider>,
    #[serde(flatten)]
    pub validations: Validations,
}

/// SPF and DMARC both carry a single TXT record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TxtRecordResults {
    #[serde(rename = "Record", default)]
    pub record: Option<String>,
    #[serde(flatten)]
    pub validations: Validations,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DnssecResults {
    #[serde(rename = "Keys", default)]
    pub keys: OneOrMany<String>,
    #[serde(flatten)]
    pub validations: Validations,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DkimRecord {
    #[serde(rename = "Selector", default)]
    pub selector: Option<String>,
    #[serde(rename = "Record", default)]
    pub record: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DkimResults {
    #[serde(rename = "Records", default)]
    pub records: OneOrMany<DkimRecord>,
    #[serde(flatten)]
    pub validations: Validations,
}

/// Full response of the domain-test query.
///
/// Created fresh for every check and dropped when the view goes away.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainTestReport {
    #[serde(rename = "Domain", default)]
    pub domain: Option<String>,

    #[serde(rename = "MXResults", default)]
    pub mx: Option<MxResults>,
    #[serde(rename = "MXFinalState", default)]
    pub mx_final_state: Option<FinalState>,

    #[serde(rename = "SPFResults", default)]
    pub spf: Option<TxtRecordResults>,
    #[serde(rename = "SPFFinalState", default)]
    pub spf_final_state: Option<FinalState>,

    #[serde(rename = "DMARCResults", default)]
    pub dmarc: Option<TxtRecordResults>,
    #[serde(rename = "DMARCFinalState", default)]
    pub dmarc_final_state: Option<FinalState>,

    #[serde(rename = "DNSSECResults", default)]
    pub dnssec: Option<DnssecResults>,
    #[serde(rename = "DNSSECFinalState", default)]
    pub dnssec_final_state: Option<FinalState>,

    #[serde(rename = "DKIMResults", default)]
    pub dkim: Option<DkimResults>,
    #[serde(rename = "DKIMFinalState", default)]
    pub dkim_final_state: Option<FinalState>,
}

// =============================================================================
// POLICY TEMPLATES
// =============================================================================

/// Endpoint-manager template families accepted by `AddIntuneTemplate`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplateType {
    Admin,
    Catalog,
    Device,
}

impl TemplateType {
    pub const ALL: [Self; 3] = [Self::Admin, Self::Catalog, Self::Device];

    /// Wire value, also used as the `<option>` value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Catalog => "Catalog",
            Self::Device => "Device",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administrative Template",
            Self::Catalog => "Settings Catalog",
            Self::Device => "Custom Configuration",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == raw)
    }
}

/// Body of the add-template submission. Field names match the backend form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyTemplateSubmission {
    #[serde(rename = "displayName")]
    pub display_name: String,
    pub description: String,
    #[serde(rename = "TemplateType", skip_serializing_if = "Option::is_none")]
    pub template_type: Option<TemplateType>,
    #[serde(rename = "RawJSON")]
    pub raw_json: String,
}

// =============================================================================
// GENERIC POST
// =============================================================================

/// Raw body returned by generic POST operations.
///
/// Operations either answer `{ success, message }` or carry their outcome in
/// `Results`, whose shape varies per operation.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GenericPostResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "Results", default)]
    pub results: OneOrMany<serde_json::Value>,
}

/// Normalized result of a generic POST.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostOutcome {
    pub success: bool,
    pub message: String,
}

impl From<GenericPostResponse> for PostOutcome {
    fn from(resp: GenericPostResponse) -> Self {
        let success = resp.success.unwrap_or(true);
        let message = resp.message.filter(|m| !m.is_empty()).unwrap_or_else(|| {
            if resp.results.is_empty() {
                "Request completed.".to_owned()
            } else {
                resp.results.as_slice().iter().map(result_text).collect::<Vec<_>>().join("\n")
            }
        });
        Self { success, message }
    }
}

fn result_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Failure of a query or submission, scoped to the calling view.
#[derive(Clone, Debug, PartialEq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ApiError {
    #[error("network error: {message}")]
    Network { message: String },

    #[error("request failed with status {status}")]
    Status { status: u16, body: serde_json::Value },

    #[error("unexpected response: {message}")]
    Decode { message: String },

    /// The operation ran and reported `success: false`.
    #[error("{message}")]
    Rejected { message: String },

    #[error("request timed out after {secs}s")]
    Timeout { secs: u32 },

    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a status error, keeping the body as JSON when it parses.
    pub fn from_status(status: u16, body: &str) -> Self {
        let body = serde_json::from_str(body).unwrap_or_else(|_| serde_json::Value::String(body.to_owned()));
        Self::Status { status, body }
    }

    /// One-line message for banners and callouts. Prefers a message carried
    /// in the error body over the generic status text.
    pub fn summary(&self) -> String {
        if let Self::Status { body, .. } = self {
            let carried = ["message", "Message", "Results", "error"]
                .iter()
                .find_map(|key| body.get(key).and_then(serde_json::Value::as_str));
            if let Some(text) = carried {
                return text.to_owned();
            }
        }
        self.to_string()
    }

    /// Pretty JSON for the expandable raw-detail panel.
    pub fn detail_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| self.to_string())
    }
}
