//! SDK configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use hedera_types::{AccountReference, Hbar};
use hedera_utils::logging::{init_logging, LogFormat};

use crate::error::ConfigError;

/// Defaults applied to transactions that leave shared fields unset, plus
/// logging settings.
///
/// Can be loaded from a TOML file via [`SdkConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SdkConfig {
    /// Account that pays for transactions, used to generate transaction ids.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator_account_id: Option<AccountReference>,

    /// Fee bound in tinybars used when a transaction sets none.
    #[serde(default = "default_max_transaction_fee")]
    pub default_max_transaction_fee: Hbar,

    #[serde(default = "default_valid_duration_secs")]
    pub default_transaction_valid_duration_secs: u64,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_max_transaction_fee() -> Hbar {
    Hbar::new(2)
}

fn default_valid_duration_secs() -> u64 {
    120
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl SdkConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    pub fn default_transaction_valid_duration(&self) -> Duration {
        Duration::from_secs(self.default_transaction_valid_duration_secs)
    }

    pub fn log_format(&self) -> Result<LogFormat, ConfigError> {
        self.log_format.parse::<LogFormat>().map_err(ConfigError::Parse)
    }

    /// Install the global tracing subscriber described by this config.
    pub fn init_logging(&self) -> Result<(), ConfigError> {
        init_logging(self.log_format()?, &self.log_level);
        Ok(())
    }
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            operator_account_id: None,
            default_max_transaction_fee: default_max_transaction_fee(),
            default_transaction_valid_duration_secs: default_valid_duration_secs(),
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }
}
