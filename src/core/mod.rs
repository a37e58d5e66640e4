//! Core orchestration logic.
//!
//! This module contains:
//! - Orchestrator: Request lifecycle for one variant
//! - Control: Trigger state and its restore guard
//! - Progress: Cosmetic in-flight progress
//! - Export: CSV export of retained rows
//! - Error: Error taxonomy

pub mod control;
pub mod error;
pub mod export;
pub mod orchestrator;
pub mod progress;

// Re-export commonly used types
pub use control::{Control, ControlGuard, UiState};
pub use error::AnalysisError;
pub use export::{to_csv, write_csv, ExportFormat};
pub use orchestrator::Orchestrator;
pub use progress::{ProgressMeter, ProgressSettings};
