//! Error taxonomy for a single analysis round-trip.

use serde::Deserialize;
use thiserror::Error;

use crate::adapters::TransportError;

/// Shown when the request never produced a response
pub const NETWORK_FAILURE_MESSAGE: &str =
    "Error connecting to the analysis server. Please ensure the backend is running.";

/// Shown when a 2xx body could not be interpreted
pub const UNREADABLE_RESPONSE_MESSAGE: &str =
    "The server returned a response that could not be read.";

/// Shown when an export is requested with nothing retained
pub const NO_RESULTS_MESSAGE: &str = "No results to download";

/// Errors surfaced by an orchestrator
#[derive(Debug, Clone, Error)]
pub enum AnalysisError {
    /// Required input missing; no request was sent
    #[error("{0}")]
    Validation(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Unreadable response: {0}")]
    Parse(String),

    #[error("No results to export")]
    NoResults,

    #[error("Export failed: {0}")]
    Export(String),
}

/// `{ "error": "..." }` body of a failed request
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl AnalysisError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Build an HTTP error from a non-2xx response
    ///
    /// Uses the body's `error` field when present, else a generic message.
    pub fn from_http(status: u16, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| format!("The server returned an error (HTTP {}).", status));

        Self::Http { status, message }
    }

    /// Message suitable for showing to the user
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::Validation(message) => message.clone(),
            AnalysisError::Network(_) => NETWORK_FAILURE_MESSAGE.to_string(),
            AnalysisError::Http { message, .. } => message.clone(),
            AnalysisError::Parse(_) => UNREADABLE_RESPONSE_MESSAGE.to_string(),
            AnalysisError::NoResults => NO_RESULTS_MESSAGE.to_string(),
            AnalysisError::Export(detail) => format!("Could not save results: {}", detail),
        }
    }

    /// Whether this error is shown as a blocking notice rather than inline
    pub fn is_notice(&self) -> bool {
        matches!(self, AnalysisError::Validation(_) | AnalysisError::NoResults)
    }
}

impl From<TransportError> for AnalysisError {
    fn from(error: TransportError) -> Self {
        AnalysisError::Network(error.to_string())
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(error: serde_json::Error) -> Self {
        AnalysisError::Parse(error.to_string())
    }
}
