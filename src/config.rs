//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any roster
//! file is touched.
//!
//! ## Optional Variables
//!
//! - `ROSTER_FILE` - Path of the roster JSON file (default: `data/roster.json`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

const DEFAULT_ROSTER_FILE: &str = "data/roster.json";

/// Configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub roster_file: PathBuf,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `ROSTER_FILE` is set but not valid Unicode.
    pub fn from_env() -> Result<Self> {
        let roster_file = match env::var("ROSTER_FILE") {
            Ok(path) => PathBuf::from(path),
            Err(env::VarError::NotPresent) => PathBuf::from(DEFAULT_ROSTER_FILE),
            Err(e) => return Err(e).context("Failed to read ROSTER_FILE"),
        };

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            roster_file,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `roster_file` is empty or names a directory-like path
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.roster_file.as_os_str().is_empty() {
            anyhow::bail!("ROSTER_FILE must not be empty");
        }

        if self.roster_file.file_name().is_none() {
            anyhow::bail!(
                "ROSTER_FILE must name a file, got '{}'",
                self.roster_file.display()
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Returns whether logs are emitted as JSON lines.
    pub fn is_json_logging(&self) -> bool {
        self.log_format == "json"
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!("  Roster file: {}", self.roster_file.display());
        tracing::debug!("  Log level: {}", self.log_level);
        tracing::debug!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if variables are unreadable or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in the binary).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn test_config() -> Config {
        Config {
            roster_file: PathBuf::from("data/roster.json"),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = test_config();
        assert!(config.validate().is_ok());

        config.log_format = "yaml".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());
        assert!(config.is_json_logging());

        config.roster_file = PathBuf::new();
        assert!(config.validate().is_err());

        config.roster_file = PathBuf::from("data/..");
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("ROSTER_FILE");
            env::remove_var("LOG_FORMAT");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.roster_file, PathBuf::from(DEFAULT_ROSTER_FILE));
        assert_eq!(config.log_format, "text");
        assert!(!config.is_json_logging());
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("ROSTER_FILE", "/tmp/cs2103/students.json");
            env::set_var("LOG_FORMAT", "json");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.roster_file, PathBuf::from("/tmp/cs2103/students.json"));
        assert!(config.is_json_logging());

        // Cleanup
        unsafe {
            env::remove_var("ROSTER_FILE");
            env::remove_var("LOG_FORMAT");
        }
    }

    #[test]
    #[serial]
    fn test_load_rejects_bad_log_format() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LOG_FORMAT", "xml");
        }

        assert!(load_from_env().is_err());

        unsafe {
            env::remove_var("LOG_FORMAT");
        }
    }
}
