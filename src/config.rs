//! Configuration for the revcheck client.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (REVCHECK_API_URL, REVCHECK_TIMEOUT_SECONDS)
//! 2. Config file (.revcheck/config.yaml, then <config dir>/revcheck/config.yaml)
//! 3. Defaults (http://127.0.0.1:5000)
//!
//! Config file discovery:
//! - Searches current directory and parents for .revcheck/config.yaml
//! - Falls back to the user config directory
//! - A relative export directory is resolved against the config file's project root

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::progress::ProgressSettings;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 120;

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub progress: ProgressSettings,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the classification service
    pub base_url: Option<String>,
    /// Request timeout in seconds
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportConfig {
    /// Directory for CSV exports (relative to the project root)
    pub dir: Option<String>,
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Base URL of the classification service
    pub api_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Cosmetic progress timing
    pub progress: ProgressSettings,
    /// Where exports land when no explicit path is given
    pub export_dir: PathBuf,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            progress: ProgressSettings::default(),
            export_dir: PathBuf::from("."),
            config_file: None,
        }
    }
}

impl ResolvedConfig {
    /// Resolve an export target: explicit path, or default name in export_dir
    pub fn export_path(&self, explicit: Option<&Path>, default_name: &str) -> PathBuf {
        match explicit {
            Some(path) => path.to_path_buf(),
            None => self.export_dir.join(default_name),
        }
    }
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".revcheck").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    dirs::config_dir()
        .map(|dir| dir.join("revcheck").join("config.yaml"))
        .filter(|path| path.exists())
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the config file's project root
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

/// Merge a parsed file with defaults
fn resolve_file(config_path: &Path, file: ConfigFile) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    // Project root is the parent of .revcheck/
    let base_dir = config_path
        .parent()
        .and_then(|p| p.parent())
        .unwrap_or(Path::new("."));

    ResolvedConfig {
        api_url: file.api.base_url.unwrap_or(defaults.api_url),
        timeout: file
            .api
            .timeout_seconds
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout),
        progress: file.progress,
        export_dir: file
            .export
            .dir
            .map(|dir| resolve_path(base_dir, &dir))
            .unwrap_or(defaults.export_dir),
        config_file: Some(config_path.to_path_buf()),
    }
}

/// Apply environment overrides
fn apply_env(
    mut config: ResolvedConfig,
    api_url: Option<String>,
    timeout: Option<String>,
) -> Result<ResolvedConfig> {
    if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
        config.api_url = url;
    }

    if let Some(raw) = timeout {
        let seconds: u64 = raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid REVCHECK_TIMEOUT_SECONDS: {}", raw))?;
        config.timeout = Duration::from_secs(seconds);
    }

    Ok(config)
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let config_file = find_config_file();

    let config = match config_file {
        Some(ref path) => resolve_file(path, load_config_file(path)?),
        None => ResolvedConfig::default(),
    };

    apply_env(
        config,
        std::env::var("REVCHECK_API_URL").ok(),
        std::env::var("REVCHECK_TIMEOUT_SECONDS").ok(),
    )
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}
