//! View-models and the surfaces that display them.
//!
//! Interpreting a response (`Analysis::render`) is pure and produces one of
//! the view types below. Applying a view is the job of a [`Surface`]; the
//! CLI ships a terminal surface, tests use a recording one.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::core::control::Control;
use crate::core::error::AnalysisError;
use crate::domain::{ClauseFinding, Label, ReviewRow, Score, Verdict};

/// Everything a surface shows besides the success view
pub trait Feedback: Send + Sync {
    /// Trigger control changed (disabled/enabled, label)
    fn control(&self, control: &Control);

    /// A request is about to be sent; clear previous output
    fn loading(&self) {}

    /// Progress meter moved
    fn progress(&self, _percent: u8) {}

    /// Inline error view
    fn show_error(&self, error: &ErrorView);

    /// Blocking notice (validation, nothing to export)
    fn notify(&self, message: &str);
}

/// A surface able to apply views of type `V`
pub trait Surface<V>: Feedback {
    fn show(&self, view: &V);
}

impl<F: Feedback + ?Sized> Feedback for Arc<F> {
    fn control(&self, control: &Control) {
        (**self).control(control)
    }

    fn loading(&self) {
        (**self).loading()
    }

    fn progress(&self, percent: u8) {
        (**self).progress(percent)
    }

    fn show_error(&self, error: &ErrorView) {
        (**self).show_error(error)
    }

    fn notify(&self, message: &str) {
        (**self).notify(message)
    }
}

impl<V, S: Surface<V> + ?Sized> Surface<V> for Arc<S> {
    fn show(&self, view: &V) {
        (**self).show(view)
    }
}

/// Inline error panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorView {
    pub message: String,
}

impl ErrorView {
    /// Prefix the user-facing message, e.g. "Failed to analyze text: ..."
    pub fn new(prefix: &str, error: &AnalysisError) -> Self {
        Self {
            message: format!("{}: {}", prefix, error.user_message()),
        }
    }
}

impl fmt::Display for ErrorView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Single-review result
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionView {
    pub label: Label,
    /// "real" or "fake"
    pub class: &'static str,
    pub headline: String,
    pub score: Score,
    pub score_text: String,
    pub elapsed: Duration,
}

impl PredictionView {
    pub fn new(label: Label, score: Score, elapsed: Duration) -> Self {
        Self {
            label,
            class: label.css_class(),
            headline: format!("This review is likely {}", label),
            score,
            score_text: format!("Authenticity Score: {}%", score),
            elapsed,
        }
    }
}

impl fmt::Display for PredictionView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}] {}", self.class, self.headline)?;
        writeln!(f, "{}", self.score_text)?;
        write!(f, "Analysis time: {:.2}s", self.elapsed.as_secs_f64())
    }
}

/// Aggregate counts over a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub total: usize,
    pub real: usize,
    pub fake: usize,
}

impl BatchStats {
    pub fn from_rows(rows: &[ReviewRow]) -> Self {
        let real = rows.iter().filter(|r| r.prediction == Label::Real).count();
        let fake = rows.iter().filter(|r| r.prediction == Label::Fake).count();
        Self {
            total: rows.len(),
            real,
            fake,
        }
    }
}

/// One table row, shared by batch and scrape views
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    /// 1-based position
    pub index: usize,
    pub review: String,
    pub prediction: Label,
    pub score: Score,
    /// "real-row" or "fake-row"
    pub class: String,
}

impl RowView {
    fn from_rows(rows: &[ReviewRow]) -> Vec<Self> {
        rows.iter()
            .enumerate()
            .map(|(i, row)| Self {
                index: i + 1,
                review: row.review.clone(),
                prediction: row.prediction,
                score: row.score,
                class: format!("{}-row", row.prediction.css_class()),
            })
            .collect()
    }
}

fn write_table(f: &mut fmt::Formatter<'_>, rows: &[RowView]) -> fmt::Result {
    writeln!(f, "{:<6} {:<60} {:<10} {:<10}", "COUNT", "REVIEW", "PREDICTION", "CONFIDENCE")?;
    write!(f, "{}", "-".repeat(89))?;
    for row in rows {
        let review = truncate(&row.review, 57);
        write!(
            f,
            "\n{:<6} {:<60} {:<10} {:<10}",
            row.index,
            review,
            row.prediction,
            format!("{}%", row.score)
        )?;
    }
    Ok(())
}

fn truncate(text: &str, max_chars: usize) -> String {
    let flat = text.replace(['\n', '\r'], " ");
    if flat.chars().count() > max_chars {
        let cut: String = flat.chars().take(max_chars).collect();
        format!("{}...", cut)
    } else {
        flat
    }
}

/// Batch (CSV upload) result
#[derive(Debug, Clone, PartialEq)]
pub struct BatchView {
    pub stats: BatchStats,
    pub rows: Vec<RowView>,
}

impl BatchView {
    pub fn new(rows: &[ReviewRow]) -> Self {
        Self {
            stats: BatchStats::from_rows(rows),
            rows: RowView::from_rows(rows),
        }
    }
}

impl fmt::Display for BatchView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total reviews: {}", self.stats.total)?;
        writeln!(f, "Real reviews:  {}", self.stats.real)?;
        write!(f, "Fake reviews:  {}", self.stats.fake)?;
        if !self.rows.is_empty() {
            writeln!(f, "\n")?;
            write_table(f, &self.rows)?;
        }
        Ok(())
    }
}

/// URL scrape result
#[derive(Debug, Clone, PartialEq)]
pub enum ScrapeView {
    Table(Vec<RowView>),
    /// Nothing was scraped
    Empty { message: String },
}

impl ScrapeView {
    pub fn new(rows: &[ReviewRow]) -> Self {
        if rows.is_empty() {
            ScrapeView::Empty {
                message: "No reviews found at this URL.".to_string(),
            }
        } else {
            ScrapeView::Table(RowView::from_rows(rows))
        }
    }
}

impl fmt::Display for ScrapeView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrapeView::Table(rows) => write_table(f, rows),
            ScrapeView::Empty { message } => f.write_str(message),
        }
    }
}

/// Presentational tone of a cross-check verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictTone {
    Fake,
    Real,
    Neutral,
}

impl VerdictTone {
    pub fn class(&self) -> &'static str {
        match self {
            VerdictTone::Fake => "fake",
            VerdictTone::Real => "real",
            VerdictTone::Neutral => "neutral",
        }
    }
}

impl From<Verdict> for VerdictTone {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Fake => VerdictTone::Fake,
            Verdict::Genuine => VerdictTone::Real,
            Verdict::Inconclusive => VerdictTone::Neutral,
        }
    }
}

/// One clause card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClauseCard {
    pub clause: String,
    pub aspect: String,
    pub sentiment: String,
    /// "outlier" or "consistent"
    pub class: &'static str,
    /// "sentiment-<value>"
    pub sentiment_class: String,
    pub reason: String,
}

impl From<&ClauseFinding> for ClauseCard {
    fn from(finding: &ClauseFinding) -> Self {
        Self {
            clause: finding.clause.clone(),
            aspect: finding.aspect.clone(),
            sentiment: finding.sentiment.clone(),
            class: if finding.is_outlier { "outlier" } else { "consistent" },
            sentiment_class: format!("sentiment-{}", finding.sentiment),
            reason: finding.reason.clone(),
        }
    }
}

/// Body under the verdict header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrossCheckBody {
    Clauses(Vec<ClauseCard>),
    Reason(String),
    Empty,
}

/// Cross-check result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossCheckView {
    pub tone: VerdictTone,
    pub title: &'static str,
    pub body: CrossCheckBody,
}

impl fmt::Display for CrossCheckView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.tone.class(), self.title)?;
        match &self.body {
            CrossCheckBody::Clauses(cards) => {
                for card in cards {
                    write!(f, "\n\n  \"{}\" ({})", card.clause, card.class)?;
                    write!(f, "\n    Detected Aspect: {}", card.aspect)?;
                    write!(f, "\n    Sentiment:       {}", card.sentiment)?;
                    write!(f, "\n    {}", card.reason)?;
                }
                Ok(())
            }
            CrossCheckBody::Reason(reason) => write!(f, "\n{}", reason),
            CrossCheckBody::Empty => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_view() {
        let view = PredictionView::new(Label::Real, Score::new(87.0), Duration::from_millis(1234));

        assert_eq!(view.class, "real");
        assert_eq!(view.headline, "This review is likely REAL");
        assert_eq!(view.score_text, "Authenticity Score: 87%");
        assert!(view.to_string().ends_with("Analysis time: 1.23s"));
    }

    #[test]
    fn test_batch_stats() {
        let rows = vec![
            ReviewRow::new("a", Label::Real, 90.0),
            ReviewRow::new("b", Label::Fake, 80.0),
            ReviewRow::new("c", Label::Real, 70.0),
        ];

        let view = BatchView::new(&rows);
        assert_eq!(view.stats, BatchStats { total: 3, real: 2, fake: 1 });
        assert_eq!(view.rows[1].class, "fake-row");
        assert_eq!(view.rows[2].index, 3);
    }

    #[test]
    fn test_scrape_empty() {
        let view = ScrapeView::new(&[]);
        assert_eq!(view.to_string(), "No reviews found at this URL.");
    }

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(truncate("héllo wörld", 5), "héllo...");
        assert_eq!(truncate("line\nbreak", 20), "line break");
    }

    #[test]
    fn test_error_view_prefix() {
        let err = AnalysisError::from_http(500, br#"{"error":"model unavailable"}"#);
        let view = ErrorView::new("Failed to analyze text", &err);
        assert_eq!(view.message, "Failed to analyze text: model unavailable");
    }
}
