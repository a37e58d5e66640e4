//! Analysis variants.
//!
//! Each variant is a declarative strategy plugged into the generic
//! [`Orchestrator`](crate::core::Orchestrator): how to validate its input,
//! how to encode the request, which endpoint to hit, and how to turn the
//! parsed response into a view.

pub mod batch;
pub mod cross_check;
pub mod scrape;
pub mod text;

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::adapters::RequestBody;
use crate::core::error::AnalysisError;
use crate::core::export::ExportFormat;
use crate::core::progress::ProgressSettings;
use crate::domain::ReviewRow;

pub use batch::FileAnalysis;
pub use cross_check::CrossCheckAnalysis;
pub use scrape::UrlAnalysis;
pub use text::TextAnalysis;

/// Labels shown on the trigger control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlLabels {
    pub idle: String,
    pub loading: String,
}

impl ControlLabels {
    pub fn new(idle: &str) -> Self {
        Self {
            idle: idle.to_string(),
            loading: "Analyzing...".to_string(),
        }
    }
}

/// Strategy for one variant
pub trait Analysis: Send + Sync {
    /// Raw input as collected from the user
    type Input: Send;

    /// Parsed success body, retained in the result slot
    type Output: DeserializeOwned + Send + Sync;

    /// View produced from the output
    type View;

    /// Variant name used in logs
    fn name(&self) -> &'static str;

    /// Endpoint path
    fn endpoint(&self) -> &str;

    fn labels(&self) -> ControlLabels;

    /// Prefix for inline error messages
    fn error_prefix(&self) -> &'static str;

    /// Check local preconditions; failures never reach the network
    fn validate(&self, input: &Self::Input) -> Result<(), AnalysisError>;

    fn build_request(&self, input: Self::Input) -> RequestBody;

    /// Pure interpretation of a parsed response
    fn render(&self, output: &Self::Output, elapsed: Duration) -> Self::View;

    /// Cosmetic progress while in flight
    fn progress(&self) -> Option<ProgressSettings> {
        None
    }
}

/// Variants whose retained rows can be exported as CSV
pub trait Exportable: Analysis<Output = Vec<ReviewRow>> {
    fn export_format(&self) -> ExportFormat;
}

/// Trimmed-empty check shared by the text-based variants
pub(crate) fn require_text(value: &str, message: &str) -> Result<(), AnalysisError> {
    if value.trim().is_empty() {
        Err(AnalysisError::validation(message))
    } else {
        Ok(())
    }
}
