//! # Configuration
//!
//! Application configuration loading and management.
//!
//! # Configuration Sources
//!
//! Configuration is loaded in the following order (later sources override earlier):
//! 1. Default values
//! 2. Configuration file (if exists)
//! 3. Environment variables (prefixed with `FIATSEND_`)
//!
//! # Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `FIATSEND_CONFIG_FILE` | Path of the TOML file | `config.toml` |
//! | `FIATSEND_LOG_LEVEL` | Log level | `info` |
//! | `FIATSEND_LOG_FORMAT` | Log format (json/pretty) | `json` |
//! | `FIATSEND_OFFERINGS_BASE_URL` | PFI base URL | `http://localhost:9000` |
//! | `FIATSEND_OFFERINGS_TIMEOUT_MS` | Offering fetch timeout | `5000` |
//! | `FIATSEND_QUOTES_FEE_RATE` | Fee rate | `0.003` |
//! | `FIATSEND_QUOTES_MAX_QUOTES` | Maximum quotes returned | unlimited |
//! | `FIATSEND_TRUSTED_ISSUERS` | Comma-separated issuer DIDs | empty |
//!
//! # Examples
//!
//! ```ignore
//! use fiatsend_core::config::AppConfig;
//!
//! let config = AppConfig::load()?;
//! config.validate()?;
//! println!("PFI: {}", config.offerings.base_url);
//! ```

use crate::application::services::quote_aggregation::AggregationConfig;
use crate::domain::services::quote_normalizer::FEE_RATE;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse configuration.
    #[error("failed to parse config: {0}")]
    Parse(String),

    /// Invalid configuration value.
    #[error("invalid config value for {field}: {message}")]
    InvalidValue {
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },
}

// ============================================================================
// Logging Configuration
// ============================================================================

/// Log format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (structured logging).
    #[default]
    Json,
    /// Pretty format (human-readable).
    Pretty,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::Json,
        }
    }
}

// ============================================================================
// Offering Source Configuration
// ============================================================================

/// Where offerings are fetched from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferingsConfig {
    /// Base URL of the PFI.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Fetch timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for OfferingsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

// ============================================================================
// Quote Configuration
// ============================================================================

/// Quote computation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotesConfig {
    /// Fee rate applied to received amounts.
    #[serde(default = "default_fee_rate")]
    pub fee_rate: Decimal,

    /// Maximum number of quotes returned (unset = all).
    #[serde(default)]
    pub max_quotes: Option<usize>,
}

impl Default for QuotesConfig {
    fn default() -> Self {
        Self {
            fee_rate: default_fee_rate(),
            max_quotes: None,
        }
    }
}

// ============================================================================
// Credential Configuration
// ============================================================================

/// Credential verification settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Accepted issuers (empty = any issuer).
    #[serde(default)]
    pub trusted_issuers: Vec<String>,
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,

    /// Offering source configuration.
    #[serde(default)]
    pub offerings: OfferingsConfig,

    /// Quote configuration.
    #[serde(default)]
    pub quotes: QuotesConfig,

    /// Credential configuration.
    #[serde(default)]
    pub credentials: CredentialsConfig,
}

impl AppConfig {
    /// Loads configuration from environment variables and optional config file.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading fails.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let config_path =
            std::env::var("FIATSEND_CONFIG_FILE").unwrap_or_else(|_| "config.toml".to_string());

        if Path::new(&config_path).exists() {
            config = Self::from_file(&config_path)?;
        }

        config.apply_env_overrides();

        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the text is not valid configuration.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Applies environment variable overrides to the configuration.
    fn apply_env_overrides(&mut self) {
        // Logging configuration
        if let Ok(level) = std::env::var("FIATSEND_LOG_LEVEL") {
            self.log.level = level;
        }
        if let Ok(format) = std::env::var("FIATSEND_LOG_FORMAT") {
            self.log.format = match format.to_lowercase().as_str() {
                "pretty" => LogFormat::Pretty,
                _ => LogFormat::Json,
            };
        }

        // Offering source
        if let Ok(url) = std::env::var("FIATSEND_OFFERINGS_BASE_URL") {
            self.offerings.base_url = url;
        }
        if let Ok(timeout) = std::env::var("FIATSEND_OFFERINGS_TIMEOUT_MS")
            && let Ok(t) = timeout.parse()
        {
            self.offerings.timeout_ms = t;
        }

        // Quotes
        if let Ok(rate) = std::env::var("FIATSEND_QUOTES_FEE_RATE")
            && let Ok(r) = rate.parse()
        {
            self.quotes.fee_rate = r;
        }
        if let Ok(max) = std::env::var("FIATSEND_QUOTES_MAX_QUOTES")
            && let Ok(m) = max.parse()
        {
            self.quotes.max_quotes = Some(m);
        }

        // Credentials
        if let Ok(issuers) = std::env::var("FIATSEND_TRUSTED_ISSUERS") {
            self.credentials.trusted_issuers = issuers
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "log.level".to_string(),
                message: format!(
                    "invalid log level '{}', must be one of: {:?}",
                    self.log.level, valid_levels
                ),
            });
        }

        if self.quotes.fee_rate < Decimal::ZERO || self.quotes.fee_rate >= Decimal::ONE {
            return Err(ConfigError::InvalidValue {
                field: "quotes.fee_rate".to_string(),
                message: format!("{} is outside [0, 1)", self.quotes.fee_rate),
            });
        }

        if self.quotes.max_quotes == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "quotes.max_quotes".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        let url = self.offerings.base_url.as_str();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "offerings.base_url".to_string(),
                message: format!("'{url}' must start with http:// or https://"),
            });
        }

        Ok(())
    }

    /// Builds the aggregation settings from this configuration.
    #[must_use]
    pub fn aggregation(&self) -> AggregationConfig {
        let config = AggregationConfig::with_timeout(self.offerings.timeout_ms)
            .with_fee_rate(self.quotes.fee_rate);
        match self.quotes.max_quotes {
            Some(max) => config.with_max_quotes(max),
            None => config,
        }
    }
}

// ============================================================================
// Default Value Functions
// ============================================================================

fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    "http://localhost:9000".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_fee_rate() -> Decimal {
    FEE_RATE
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.log.level, "info");
        assert_eq!(config.offerings.timeout_ms, 5000);
        assert_eq!(config.quotes.fee_rate, FEE_RATE);
        assert!(config.credentials.trusted_issuers.is_empty());
    }

    #[test]
    fn log_format_default() {
        assert_eq!(LogFormat::default(), LogFormat::Json);
    }

    #[test]
    fn app_config_validate_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn app_config_validate_invalid_log_level() {
        let mut config = AppConfig::default();
        config.log.level = "invalid".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn app_config_validate_fee_rate() {
        let mut config = AppConfig::default();
        config.quotes.fee_rate = Decimal::ONE;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "quotes.fee_rate"
        ));
    }

    #[test]
    fn app_config_validate_base_url() {
        let mut config = AppConfig::default();
        config.offerings.base_url = "ftp://pfi".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn app_config_validate_max_quotes() {
        let mut config = AppConfig::default();
        config.quotes.max_quotes = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn parses_partial_toml() {
        let config = AppConfig::from_toml(
            r#"
            [log]
            format = "pretty"

            [offerings]
            base_url = "https://pfi.example.com"

            [quotes]
            fee_rate = "0.005"
            max_quotes = 3

            [credentials]
            trusted_issuers = ["did:dht:issuer"]
            "#,
        )
        .unwrap();

        assert_eq!(config.log.format, LogFormat::Pretty);
        assert_eq!(config.log.level, "info");
        assert_eq!(config.offerings.base_url, "https://pfi.example.com");
        assert_eq!(config.offerings.timeout_ms, 5000);
        assert_eq!(config.quotes.fee_rate, Decimal::from_str("0.005").unwrap());
        assert_eq!(config.quotes.max_quotes, Some(3));
        assert_eq!(config.credentials.trusted_issuers, ["did:dht:issuer"]);
        assert!(config.validate().is_ok());

        let aggregation = config.aggregation();
        assert_eq!(aggregation.max_quotes, Some(3));
        assert_eq!(aggregation.timeout_ms, 5000);
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        assert!(matches!(
            AppConfig::from_toml("[log\nlevel = 1"),
            Err(ConfigError::Parse(_))
        ));
    }
}
