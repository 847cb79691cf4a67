//! Command-line configuration loaded from environment variables.
//!
//! The library itself is configuration-free; these settings only shape how
//! the `reddit-links` binary logs and prints.
//!
//! ## Optional Variables
//!
//! - `RUST_LOG` - Log filter directive (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `OUTPUT_FORMAT` - Result format: `text` or `json` (default: `text`)
//! - `COLOR` - Colored output: `auto`, `always` or `never` (default: `auto`)
//!
//! A `.env` file in the working directory is honored when the binary loads it
//! with `dotenvy::dotenv()` before calling [`load_from_env`].

use anyhow::Result;
use std::env;

const FORMATS: &[&str] = &["text", "json"];
const COLOR_MODES: &[&str] = &["auto", "always", "never"];

/// Settings for the `reddit-links` binary.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_format: String,
    pub output_format: String,
    pub color: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            output_format: "text".to_string(),
            color: "auto".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to the
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: env::var("LOG_FORMAT")
                .map(|v| v.to_ascii_lowercase())
                .unwrap_or(defaults.log_format),
            output_format: env::var("OUTPUT_FORMAT")
                .map(|v| v.to_ascii_lowercase())
                .unwrap_or(defaults.output_format),
            color: env::var("COLOR")
                .map(|v| v.to_ascii_lowercase())
                .unwrap_or(defaults.color),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` or `output_format` is not `text` or `json`
    /// - `color` is not `auto`, `always` or `never`
    /// - `log_level` is empty
    pub fn validate(&self) -> Result<()> {
        if !FORMATS.contains(&self.log_format.as_str()) {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !FORMATS.contains(&self.output_format.as_str()) {
            anyhow::bail!(
                "OUTPUT_FORMAT must be 'text' or 'json', got '{}'",
                self.output_format
            );
        }

        if !COLOR_MODES.contains(&self.color.as_str()) {
            anyhow::bail!(
                "COLOR must be 'auto', 'always' or 'never', got '{}'",
                self.color
            );
        }

        if self.log_level.trim().is_empty() {
            anyhow::bail!("RUST_LOG must not be empty");
        }

        Ok(())
    }

    /// Returns whether results are printed as JSON lines.
    pub fn json_output(&self) -> bool {
        self.output_format == "json"
    }

    /// Returns whether logs are emitted as JSON.
    pub fn json_logs(&self) -> bool {
        self.log_format == "json"
    }

    /// Forced color setting, or `None` to let the terminal decide.
    pub fn color_override(&self) -> Option<bool> {
        match self.color.as_str() {
            "always" => Some(true),
            "never" => Some(false),
            _ => None,
        }
    }

    /// Logs the effective configuration.
    pub fn print_summary(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!("  Log level: {}", self.log_level);
        tracing::debug!("  Log format: {}", self.log_format);
        tracing::debug!("  Output format: {}", self.output_format);
        tracing::debug!("  Color: {}", self.color);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
