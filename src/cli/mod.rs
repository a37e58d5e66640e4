//! Command-line interface for revcheck.
//!
//! Provides one command per analysis variant (single review, CSV batch,
//! URL scrape, hotel cross-check) plus a config dump.

pub mod surface;

use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::adapters::{HttpTransport, Transport};
use crate::analysis::batch::NO_FILE_MESSAGE;
use crate::analysis::{CrossCheckAnalysis, Exportable, FileAnalysis, TextAnalysis, UrlAnalysis};
use crate::config::{self, ResolvedConfig};
use crate::core::{AnalysisError, Orchestrator, UiState};
use crate::domain::{CrossCheckInput, CsvUpload};
use crate::view::Feedback;

use surface::TerminalSurface;

/// revcheck - review authenticity client
#[derive(Parser, Debug)]
#[command(name = "revcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the classification service
    #[arg(long, global = true, env = "REVCHECK_API_URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a single review as real or fake
    Predict {
        /// Review text (reads --input or piped stdin if omitted)
        text: Option<String>,

        /// Read the review from a file
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Upload a CSV with a "review" column for batch analysis
    AnalyzeFile {
        /// CSV file to upload
        file: Option<PathBuf>,

        /// Export results as CSV (default file name if no path given)
        #[arg(long, num_args = 0..=1)]
        export: Option<Option<PathBuf>>,
    },

    /// Scrape reviews from a URL and classify each one
    Scrape {
        /// Review page URL
        url: Option<String>,

        /// Export results as CSV (default file name if no path given)
        #[arg(long, num_args = 0..=1)]
        export: Option<Option<PathBuf>>,
    },

    /// Cross-check a review clause by clause against a hotel's consensus
    CrossCheck {
        /// Hotel name
        #[arg(long)]
        hotel: String,

        /// Review text (reads --input or piped stdin if omitted)
        text: Option<String>,

        /// Read the review from a file
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let mut cfg = config::config()?.clone();
        if let Some(url) = self.api_url {
            cfg.api_url = url;
        }

        match self.command {
            Commands::Predict { text, input } => predict(&cfg, text, input).await,
            Commands::AnalyzeFile { file, export } => analyze_file(&cfg, file, export).await,
            Commands::Scrape { url, export } => scrape(&cfg, url, export).await,
            Commands::CrossCheck { hotel, text, input } => {
                cross_check(&cfg, hotel, text, input).await
            }
            Commands::Config => show_config(&cfg),
        }
    }
}

fn transport(cfg: &ResolvedConfig) -> Result<Arc<dyn Transport>> {
    Ok(Arc::new(HttpTransport::new(cfg.api_url.clone(), cfg.timeout)?))
}

/// Review text from the argument, a file, or piped stdin
///
/// Returns an empty string when nothing was given so that the orchestrator
/// reports the missing input.
fn read_text(text: Option<String>, input_file: Option<PathBuf>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    if let Some(path) = input_file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read input file: {}", path.display()));
    }

    if !io::stdin().is_terminal() {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        return Ok(buffer);
    }

    Ok(String::new())
}

/// Process exit status for one command
///
/// Only a successful round-trip exits 0, and only if the requested export
/// (if any) was written. Input rejected before sending leaves the
/// orchestrator Idle, which counts as a failure.
fn exit_code(state: UiState, export: Option<&Result<PathBuf, AnalysisError>>) -> i32 {
    match (state, export) {
        (UiState::Success, None | Some(Ok(_))) => 0,
        _ => 1,
    }
}

fn finish(code: i32) -> Result<()> {
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

/// Export retained rows after a successful analysis
async fn export_results<A>(
    cfg: &ResolvedConfig,
    orchestrator: &Orchestrator<A, TerminalSurface>,
    target: Option<PathBuf>,
) -> Result<PathBuf, AnalysisError>
where
    A: Exportable,
    A::View: std::fmt::Display,
{
    let path = cfg.export_path(target.as_deref(), orchestrator.export_file_name());
    let written = orchestrator.export(&path).await?;
    eprintln!("📄 Results saved to {}", written.display());
    Ok(written)
}

/// Classify a single review
async fn predict(cfg: &ResolvedConfig, text: Option<String>, input: Option<PathBuf>) -> Result<()> {
    let review = read_text(text, input)?;

    let mut orchestrator = Orchestrator::new(TextAnalysis, transport(cfg)?, TerminalSurface::new());
    let state = orchestrator.trigger(review).await;

    finish(exit_code(state, None))
}

/// Upload a CSV for batch analysis
async fn analyze_file(
    cfg: &ResolvedConfig,
    file: Option<PathBuf>,
    export: Option<Option<PathBuf>>,
) -> Result<()> {
    let surface = TerminalSurface::new();
    let Some(path) = file else {
        surface.notify(NO_FILE_MESSAGE);
        return finish(exit_code(UiState::Idle, None));
    };
    let upload = CsvUpload::from_path(&path).await?;

    let mut orchestrator =
        Orchestrator::new(FileAnalysis::new(cfg.progress), transport(cfg)?, surface);
    let state = orchestrator.trigger(upload).await;

    let exported = match (state, export) {
        (UiState::Success, Some(target)) => Some(export_results(cfg, &orchestrator, target).await),
        _ => None,
    };

    finish(exit_code(state, exported.as_ref()))
}

/// Scrape a URL and classify its reviews
async fn scrape(
    cfg: &ResolvedConfig,
    url: Option<String>,
    export: Option<Option<PathBuf>>,
) -> Result<()> {
    let mut orchestrator = Orchestrator::new(UrlAnalysis, transport(cfg)?, TerminalSurface::new());
    let state = orchestrator.trigger(url.unwrap_or_default()).await;

    let exported = match (state, export) {
        (UiState::Success, Some(target)) => Some(export_results(cfg, &orchestrator, target).await),
        _ => None,
    };

    finish(exit_code(state, exported.as_ref()))
}

/// Cross-check a review against a hotel's consensus
async fn cross_check(
    cfg: &ResolvedConfig,
    hotel: String,
    text: Option<String>,
    input: Option<PathBuf>,
) -> Result<()> {
    let review = read_text(text, input)?;

    let mut orchestrator =
        Orchestrator::new(CrossCheckAnalysis, transport(cfg)?, TerminalSurface::new());
    let state = orchestrator
        .trigger(CrossCheckInput::new(hotel, review))
        .await;

    finish(exit_code(state, None))
}

/// Show the resolved configuration (for debugging)
fn show_config(cfg: &ResolvedConfig) -> Result<()> {
    println!("revcheck configuration");
    println!();
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!();
    println!("API:");
    println!("  Base URL: {}", cfg.api_url);
    println!("  Timeout:  {}s", cfg.timeout.as_secs());
    println!();
    println!("Progress:");
    println!("  Interval: {}ms", cfg.progress.interval_ms);
    println!("  Step:     {}%", cfg.progress.step_percent);
    println!("  Cap:      {}%", cfg.progress.cap_percent);
    println!();
    println!("Export directory: {}", display_dir(&cfg.export_dir));

    Ok(())
}

fn display_dir(dir: &Path) -> String {
    dir.canonicalize()
        .unwrap_or_else(|_| dir.to_path_buf())
        .display()
        .to_string()
}
