//! Cross-check report returned by `/cross-check-review`.
//!
//! A submitted review is split into clauses server-side; each clause is
//! compared against the consensus of earlier guests for the same hotel.

use serde::{Deserialize, Serialize};

/// Three-way verdict of a cross-check
///
/// Anything other than the two known wire values (including a missing
/// field) is treated as inconclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Verdict {
    Genuine,
    Fake,
    #[default]
    Inconclusive,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Genuine => "GENUINE_REVIEW",
            Verdict::Fake => "FAKE_REVIEW",
            Verdict::Inconclusive => "INCONCLUSIVE",
        }
    }
}

impl From<String> for Verdict {
    fn from(value: String) -> Self {
        match value.as_str() {
            "GENUINE_REVIEW" => Verdict::Genuine,
            "FAKE_REVIEW" => Verdict::Fake,
            _ => Verdict::Inconclusive,
        }
    }
}

impl From<Verdict> for String {
    fn from(verdict: Verdict) -> Self {
        verdict.as_str().to_string()
    }
}

/// One sentence-level finding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClauseFinding {
    pub clause: String,
    pub aspect: String,
    /// "positive" or "negative"
    pub sentiment: String,
    #[serde(default)]
    pub is_outlier: bool,
    #[serde(default)]
    pub reason: String,
}

/// Full cross-check response
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CrossCheckReport {
    /// Inconclusive answers use the shorter `verdict` key
    #[serde(default, alias = "verdict")]
    pub overall_verdict: Verdict,

    #[serde(default)]
    pub analysis: Vec<ClauseFinding>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
