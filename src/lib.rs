//! revcheck - review authenticity client
//!
//! A typed client and terminal front end for a remote review-authenticity
//! classification service. The service does the scoring; this crate
//! collects input, sends it, and renders what comes back.
//!
//! # Architecture
//!
//! Every user action goes through one generic request orchestrator:
//! - Input is validated locally before anything is sent
//! - Exactly one request is issued per accepted trigger
//! - The response is interpreted into a view-model by a pure function
//! - A surface applies the view; the trigger control is always restored
//!
//! # Modules
//!
//! - `adapters`: Network transport (reqwest)
//! - `analysis`: The four variants (text, file, URL, cross-check)
//! - `core`: Orchestrator, control state, progress, export, errors
//! - `domain`: Wire types (predictions, scores, verdicts)
//! - `view`: View-models and surface traits
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Classify one review
//! revcheck predict "The room was spotless and the staff lovely."
//!
//! # Batch-analyze a CSV and export the results
//! revcheck analyze-file reviews.csv --export
//!
//! # Cross-check a review against a hotel's consensus
//! revcheck cross-check --hotel "Goa Shoreline Resort" "The WiFi was blazing fast"
//! ```

pub mod adapters;
pub mod analysis;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod view;

// Re-export main types at crate root for convenience
pub use adapters::{HttpTransport, RawResponse, RequestBody, Transport, TransportError};
pub use analysis::{Analysis, CrossCheckAnalysis, Exportable, FileAnalysis, TextAnalysis, UrlAnalysis};
pub use crate::core::{AnalysisError, Orchestrator, UiState};
pub use domain::{CrossCheckReport, Label, ReviewRow, Score, Verdict};
pub use view::{ErrorView, Feedback, Surface};
