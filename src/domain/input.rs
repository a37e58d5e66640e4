//! User-supplied inputs for each analysis variant.

use std::path::Path;

use anyhow::{Context, Result};

/// A CSV file picked for batch analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvUpload {
    /// File name sent with the multipart part
    pub file_name: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl CsvUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Read a file from disk
    pub async fn from_path(path: &Path) -> Result<Self> {
        let file_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read CSV file: {}", path.display()))?;

        Ok(Self { file_name, bytes })
    }

    pub fn has_csv_extension(&self) -> bool {
        self.file_name.to_lowercase().ends_with(".csv")
    }
}

/// Hotel name plus the review to cross-check against it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossCheckInput {
    pub hotel_name: String,
    pub review_text: String,
}

impl CrossCheckInput {
    pub fn new(hotel_name: impl Into<String>, review_text: impl Into<String>) -> Self {
        Self {
            hotel_name: hotel_name.into(),
            review_text: review_text.into(),
        }
    }
}
