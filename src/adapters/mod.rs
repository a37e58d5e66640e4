//! Transport interfaces for the remote classification API.
//!
//! The orchestrator never talks to `reqwest` directly; it hands a
//! [`RequestBody`] to a [`Transport`] and gets back the raw status and body.

pub mod http;

use async_trait::async_trait;
use thiserror::Error;

// Re-export the HTTP transport
pub use http::HttpTransport;

/// Endpoint paths exposed by the classification service
pub const PREDICT_PATH: &str = "/predict";
pub const SCRAPE_PATH: &str = "/scrape-and-predict";
pub const ANALYZE_FILE_PATH: &str = "/analyze-file";
pub const CROSS_CHECK_PATH: &str = "/cross-check-review";

/// Encoded request body
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// `application/json` body
    Json(serde_json::Value),

    /// `multipart/form-data` with a single file part
    Multipart {
        field: String,
        file_name: String,
        mime: String,
        bytes: Vec<u8>,
    },
}

impl RequestBody {
    /// Single CSV file under the given form field
    pub fn csv_file(field: &str, file_name: &str, bytes: Vec<u8>) -> Self {
        Self::Multipart {
            field: field.to_string(),
            file_name: file_name.to_string(),
            mime: "text/csv".to_string(),
            bytes,
        }
    }
}

/// Raw response as received from the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failures before a response could be read
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    #[error("Request could not be built: {0}")]
    InvalidRequest(String),

    #[error("Request failed: {0}")]
    Send(String),

    #[error("Response body could not be read: {0}")]
    Body(String),
}

/// Trait for the network seam
#[async_trait]
pub trait Transport: Send + Sync {
    /// Human-readable transport name
    fn name(&self) -> &str;

    /// POST a body to an endpoint path
    async fn post(&self, path: &str, body: RequestBody) -> Result<RawResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(RawResponse::new(200, "[]").is_success());
        assert!(RawResponse::new(204, "").is_success());
        assert!(!RawResponse::new(404, "").is_success());
        assert!(!RawResponse::new(500, "").is_success());
    }
}
