//! Client-side CSV export of retained result rows.
//!
//! The review column is always quoted with embedded quotes doubled; the
//! other columns are written as-is. Rows are joined with `\n` and there is
//! no trailing newline.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::ReviewRow;

use super::error::AnalysisError;

/// Export layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// `Review,Prediction,Confidence Score` (file analysis)
    PerReview,
    /// `Count,Review,Prediction,Confidence Score` (URL analysis)
    Indexed,
}

impl ExportFormat {
    pub fn header(&self) -> &'static str {
        match self {
            ExportFormat::PerReview => "Review,Prediction,Confidence Score",
            ExportFormat::Indexed => "Count,Review,Prediction,Confidence Score",
        }
    }

    pub fn default_file_name(&self) -> &'static str {
        match self {
            ExportFormat::PerReview => "review-analysis-results.csv",
            ExportFormat::Indexed => "review-analysis.csv",
        }
    }

    fn row(&self, index: usize, row: &ReviewRow) -> String {
        let review = quote(&row.review);
        match self {
            ExportFormat::PerReview => format!("{},{},{}", review, row.prediction, row.score),
            ExportFormat::Indexed => {
                format!("{},{},{},{}", index + 1, review, row.prediction, row.score)
            }
        }
    }
}

/// Wrap in double quotes, doubling any embedded quote
fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}

/// Render rows to CSV text
///
/// An absent or empty row list is a [`AnalysisError::NoResults`].
pub fn to_csv(format: ExportFormat, rows: Option<&[ReviewRow]>) -> Result<String, AnalysisError> {
    let rows = rows.filter(|r| !r.is_empty()).ok_or(AnalysisError::NoResults)?;

    let lines: Vec<String> = std::iter::once(format.header().to_string())
        .chain(rows.iter().enumerate().map(|(i, row)| format.row(i, row)))
        .collect();

    Ok(lines.join("\n"))
}

/// Render rows and write them to `path`
///
/// Nothing is created on disk when there are no rows.
pub async fn write_csv(
    format: ExportFormat,
    rows: Option<&[ReviewRow]>,
    path: &Path,
) -> Result<PathBuf, AnalysisError> {
    let content = to_csv(format, rows)?;

    tokio::fs::write(path, content)
        .await
        .map_err(|e| AnalysisError::Export(format!("{}: {}", path.display(), e)))?;

    info!(path = %path.display(), "Results exported");
    Ok(path.to_path_buf())
}
