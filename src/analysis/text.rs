//! Single review analysis against `/predict`.

use std::time::Duration;

use serde_json::json;

use crate::adapters::{RequestBody, PREDICT_PATH};
use crate::core::error::AnalysisError;
use crate::domain::ReviewPrediction;
use crate::view::PredictionView;

use super::{require_text, Analysis, ControlLabels};

#[derive(Debug, Clone, Default)]
pub struct TextAnalysis;

impl Analysis for TextAnalysis {
    type Input = String;
    type Output = ReviewPrediction;
    type View = PredictionView;

    fn name(&self) -> &'static str {
        "text"
    }

    fn endpoint(&self) -> &str {
        PREDICT_PATH
    }

    fn labels(&self) -> ControlLabels {
        ControlLabels::new("Analyze Text")
    }

    fn error_prefix(&self) -> &'static str {
        "Failed to analyze text"
    }

    fn validate(&self, input: &String) -> Result<(), AnalysisError> {
        require_text(input, "Please enter a review to analyze.")
    }

    fn build_request(&self, input: String) -> RequestBody {
        RequestBody::Json(json!({ "review": input }))
    }

    fn render(&self, output: &ReviewPrediction, elapsed: Duration) -> PredictionView {
        PredictionView::new(output.prediction, output.score, elapsed)
    }
}
