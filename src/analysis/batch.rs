//! Batch CSV analysis against `/analyze-file`.

use std::time::Duration;

use crate::adapters::{RequestBody, ANALYZE_FILE_PATH};
use crate::core::error::AnalysisError;
use crate::core::export::ExportFormat;
use crate::core::progress::ProgressSettings;
use crate::domain::{CsvUpload, ReviewRow};
use crate::view::BatchView;

use super::{Analysis, ControlLabels, Exportable};

/// Multipart field carrying the upload
pub const FILE_FIELD: &str = "file";

/// Shown when the trigger fires with no file picked
pub const NO_FILE_MESSAGE: &str = "Please select a CSV file first.";

#[derive(Debug, Clone, Default)]
pub struct FileAnalysis {
    progress: ProgressSettings,
}

impl FileAnalysis {
    pub fn new(progress: ProgressSettings) -> Self {
        Self { progress }
    }
}

impl Analysis for FileAnalysis {
    type Input = CsvUpload;
    type Output = Vec<ReviewRow>;
    type View = BatchView;

    fn name(&self) -> &'static str {
        "file"
    }

    fn endpoint(&self) -> &str {
        ANALYZE_FILE_PATH
    }

    fn labels(&self) -> ControlLabels {
        ControlLabels::new("Analyze File")
    }

    fn error_prefix(&self) -> &'static str {
        "Failed to analyze file"
    }

    fn validate(&self, input: &CsvUpload) -> Result<(), AnalysisError> {
        if input.has_csv_extension() {
            Ok(())
        } else {
            Err(AnalysisError::validation("Please select a CSV file."))
        }
    }

    fn build_request(&self, input: CsvUpload) -> RequestBody {
        RequestBody::csv_file(FILE_FIELD, &input.file_name, input.bytes)
    }

    fn render(&self, output: &Vec<ReviewRow>, _elapsed: Duration) -> BatchView {
        BatchView::new(output)
    }

    fn progress(&self) -> Option<ProgressSettings> {
        Some(self.progress)
    }
}

impl Exportable for FileAnalysis {
    fn export_format(&self) -> ExportFormat {
        ExportFormat::PerReview
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        let analysis = FileAnalysis::default();

        let wrong = analysis
            .validate(&CsvUpload::new("reviews.txt", b"review".to_vec()))
            .unwrap_err();
        assert_eq!(wrong.user_message(), "Please select a CSV file.");

        assert!(analysis
            .validate(&CsvUpload::new("Reviews.CSV", b"review".to_vec()))
            .is_ok());
    }

    #[test]
    fn test_multipart_request() {
        let body = FileAnalysis::default()
            .build_request(CsvUpload::new("reviews.csv", b"review\nok".to_vec()));

        match body {
            RequestBody::Multipart {
                field,
                file_name,
                mime,
                bytes,
            } => {
                assert_eq!(field, "file");
                assert_eq!(file_name, "reviews.csv");
                assert_eq!(mime, "text/csv");
                assert_eq!(bytes, b"review\nok");
            }
            other => panic!("Expected multipart body, got {:?}", other),
        }
    }

    #[test]
    fn test_has_progress() {
        assert!(FileAnalysis::default().progress().is_some());
    }
}
