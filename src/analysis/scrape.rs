//! URL scrape analysis against `/scrape-and-predict`.

use std::time::Duration;

use serde_json::json;

use crate::adapters::{RequestBody, SCRAPE_PATH};
use crate::core::error::AnalysisError;
use crate::core::export::ExportFormat;
use crate::domain::ReviewRow;
use crate::view::ScrapeView;

use super::{require_text, Analysis, ControlLabels, Exportable};

#[derive(Debug, Clone, Default)]
pub struct UrlAnalysis;

impl Analysis for UrlAnalysis {
    type Input = String;
    type Output = Vec<ReviewRow>;
    type View = ScrapeView;

    fn name(&self) -> &'static str {
        "url"
    }

    fn endpoint(&self) -> &str {
        SCRAPE_PATH
    }

    fn labels(&self) -> ControlLabels {
        ControlLabels::new("Analyze URL")
    }

    fn error_prefix(&self) -> &'static str {
        "Failed to analyze reviews"
    }

    fn validate(&self, input: &String) -> Result<(), AnalysisError> {
        require_text(input, "Please enter a URL to analyze.")
    }

    fn build_request(&self, input: String) -> RequestBody {
        RequestBody::Json(json!({ "url": input.trim() }))
    }

    fn render(&self, output: &Vec<ReviewRow>, _elapsed: Duration) -> ScrapeView {
        ScrapeView::new(output)
    }
}

impl Exportable for UrlAnalysis {
    fn export_format(&self) -> ExportFormat {
        ExportFormat::Indexed
    }
}
