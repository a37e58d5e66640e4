//! reqwest-backed transport.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::debug;

use super::{RawResponse, RequestBody, Transport, TransportError};

/// HTTP transport against a base URL
pub struct HttpTransport {
    /// Base URL, e.g. `http://127.0.0.1:5000`
    base_url: String,
    /// HTTP client
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with a request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// Build the absolute URL of an endpoint
    fn endpoint_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn name(&self) -> &str {
        "http"
    }

    async fn post(&self, path: &str, body: RequestBody) -> Result<RawResponse, TransportError> {
        let url = self.endpoint_url(path);
        let request = self.client.post(&url);

        let request = match body {
            RequestBody::Json(value) => request.json(&value),
            RequestBody::Multipart {
                field,
                file_name,
                mime,
                bytes,
            } => {
                let part = Part::bytes(bytes)
                    .file_name(file_name)
                    .mime_str(&mime)
                    .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;
                request.multipart(Form::new().part(field, part))
            }
        };

        debug!(%url, "Sending request");

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Send(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        debug!(%url, status, bytes = body.len(), "Received response");

        Ok(RawResponse::new(status, body.to_vec()))
    }
}
