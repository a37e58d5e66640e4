//! Domain types for the review-authenticity client.
//!
//! This module contains the wire data structures:
//! - Prediction: labels, normalized scores, result rows
//! - CrossCheck: verdicts and clause findings
//! - Input: user-supplied inputs per variant

pub mod cross_check;
pub mod input;
pub mod prediction;

// Re-export commonly used types
pub use cross_check::{ClauseFinding, CrossCheckReport, Verdict};
pub use input::{CrossCheckInput, CsvUpload};
pub use prediction::{Label, ReviewPrediction, ReviewRow, Score};
