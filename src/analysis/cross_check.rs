//! Clause-level cross-check against `/cross-check-review`.

use std::time::Duration;

use serde_json::json;

use crate::adapters::{RequestBody, CROSS_CHECK_PATH};
use crate::core::error::AnalysisError;
use crate::domain::{CrossCheckInput, CrossCheckReport, Verdict};
use crate::view::{ClauseCard, CrossCheckBody, CrossCheckView, VerdictTone};

use super::{Analysis, ControlLabels};

#[derive(Debug, Clone, Default)]
pub struct CrossCheckAnalysis;

fn verdict_title(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Fake => "Fake Review",
        Verdict::Genuine => "Genuine Review",
        Verdict::Inconclusive => "Inconclusive",
    }
}

impl Analysis for CrossCheckAnalysis {
    type Input = CrossCheckInput;
    type Output = CrossCheckReport;
    type View = CrossCheckView;

    fn name(&self) -> &'static str {
        "cross_check"
    }

    fn endpoint(&self) -> &str {
        CROSS_CHECK_PATH
    }

    fn labels(&self) -> ControlLabels {
        ControlLabels::new("Cross-Check Review")
    }

    fn error_prefix(&self) -> &'static str {
        "An error occurred"
    }

    fn validate(&self, input: &CrossCheckInput) -> Result<(), AnalysisError> {
        if input.hotel_name.trim().is_empty() || input.review_text.trim().is_empty() {
            return Err(AnalysisError::validation(
                "Please provide both a hotel name and a review text.",
            ));
        }
        Ok(())
    }

    fn build_request(&self, input: CrossCheckInput) -> RequestBody {
        RequestBody::Json(json!({
            "hotel_name": input.hotel_name.trim(),
            "review_text": input.review_text,
        }))
    }

    fn render(&self, output: &CrossCheckReport, _elapsed: Duration) -> CrossCheckView {
        let body = if !output.analysis.is_empty() {
            CrossCheckBody::Clauses(output.analysis.iter().map(ClauseCard::from).collect())
        } else if let Some(reason) = output.reason.as_ref().filter(|r| !r.trim().is_empty()) {
            CrossCheckBody::Reason(reason.clone())
        } else {
            CrossCheckBody::Empty
        };

        CrossCheckView {
            tone: VerdictTone::from(output.overall_verdict),
            title: verdict_title(output.overall_verdict),
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ClauseFinding;

    fn finding(clause: &str, is_outlier: bool) -> ClauseFinding {
        ClauseFinding {
            clause: clause.to_string(),
            aspect: "WiFi speed, internet signal, and connectivity".to_string(),
            sentiment: "positive".to_string(),
            is_outlier,
            reason: "reason".to_string(),
        }
    }

    #[test]
    fn test_requires_both_fields() {
        let analysis = CrossCheckAnalysis;
        assert!(analysis
            .validate(&CrossCheckInput::new("", "Fast WiFi"))
            .is_err());
        assert!(analysis
            .validate(&CrossCheckInput::new("Goa Shoreline Resort", " "))
            .is_err());
        assert!(analysis
            .validate(&CrossCheckInput::new("Goa Shoreline Resort", "Fast WiFi"))
            .is_ok());
    }

    #[test]
    fn test_verdict_tones() {
        let analysis = CrossCheckAnalysis;
        let mut report = CrossCheckReport {
            overall_verdict: Verdict::Fake,
            analysis: vec![finding("WiFi was blazing", true)],
            reason: None,
        };

        let view = analysis.render(&report, Duration::ZERO);
        assert_eq!(view.tone, VerdictTone::Fake);
        assert_eq!(view.title, "Fake Review");
        match view.body {
            CrossCheckBody::Clauses(cards) => {
                assert_eq!(cards[0].class, "outlier");
                assert_eq!(cards[0].sentiment_class, "sentiment-positive");
            }
            other => panic!("Expected clauses, got {:?}", other),
        }

        report.overall_verdict = Verdict::Genuine;
        report.analysis = vec![finding("WiFi was fine", false)];
        let view = analysis.render(&report, Duration::ZERO);
        assert_eq!(view.tone.class(), "real");
        assert_eq!(view.title, "Genuine Review");
    }

    #[test]
    fn test_inconclusive_falls_back_to_reason() {
        let report = CrossCheckReport {
            overall_verdict: Verdict::Inconclusive,
            analysis: vec![],
            reason: Some("Not enough data for \"Nowhere Inn\" to perform a cross-check.".into()),
        };

        let view = CrossCheckAnalysis.render(&report, Duration::ZERO);
        assert_eq!(view.tone, VerdictTone::Neutral);
        assert_eq!(view.title, "Inconclusive");
        assert!(matches!(view.body, CrossCheckBody::Reason(ref r) if r.contains("Nowhere Inn")));
    }

    #[test]
    fn test_inconclusive_without_reason() {
        let view = CrossCheckAnalysis.render(&CrossCheckReport::default(), Duration::ZERO);
        assert_eq!(view.body, CrossCheckBody::Empty);
    }
}
