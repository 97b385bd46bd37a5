// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Observer configuration
//!
//! Loaded from TOML. Every section and key is optional:
//!
//! ```toml
//! [logger]
//! payload = false
//!
//! [notifier]
//! enabled = true
//! rules = [
//!   { pattern = "user:registered", urgency = "normal" },
//!   { pattern = "order:placed", urgency = "important" },
//!   { pattern = "error:occurred", urgency = "critical" },
//! ]
//!
//! [alert]
//! pattern = "payment:received"
//! field = "amount"
//! threshold = 1000.0
//! critical = ["error:occurred"]
//! ```

use crate::notify::NotifyUrgency;
use herald_core::{kinds, EventPattern};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("empty event pattern in [{0}]")]
    InvalidPattern(&'static str),
    #[error("alert threshold must be finite, got {0}")]
    InvalidThreshold(f64),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ObserversConfig {
    pub logger: LoggerConfig,
    pub notifier: NotifierConfig,
    pub alert: AlertConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// Include the payload in each log line
    pub payload: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NotifierConfig {
    pub enabled: bool,
    /// Checked in order; the first match decides
    pub rules: Vec<RuleConfig>,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            rules: vec![
                RuleConfig::new(kinds::USER_REGISTERED, NotifyUrgency::Normal),
                RuleConfig::new(kinds::ORDER_PLACED, NotifyUrgency::Important),
                RuleConfig::new(kinds::ERROR_OCCURRED, NotifyUrgency::Critical),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    pub pattern: EventPattern,
    #[serde(default)]
    pub urgency: NotifyUrgency,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

impl RuleConfig {
    pub fn new(pattern: &str, urgency: NotifyUrgency) -> Self {
        Self {
            pattern: EventPattern::new(pattern),
            urgency,
            enabled: true,
        }
    }
}

fn enabled_by_default() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlertConfig {
    /// Events the threshold applies to
    pub pattern: EventPattern,
    /// Numeric payload field to compare
    pub field: String,
    pub threshold: f64,
    /// Events that always alert
    pub critical: Vec<EventPattern>,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            pattern: EventPattern::new(kinds::PAYMENT_RECEIVED),
            field: "amount".to_string(),
            threshold: 1000.0,
            critical: vec![EventPattern::new(kinds::ERROR_OCCURRED)],
        }
    }
}

impl ObserversConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), "loaded observer config");
        Ok(config)
    }

    /// Parse and validate configuration from TOML content
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.notifier.rules.iter().any(|r| r.pattern.is_empty()) {
            return Err(ConfigError::InvalidPattern("notifier"));
        }
        let mut alert_patterns = std::iter::once(&self.alert.pattern).chain(&self.alert.critical);
        if alert_patterns.any(EventPattern::is_empty) {
            return Err(ConfigError::InvalidPattern("alert"));
        }
        if !self.alert.threshold.is_finite() {
            return Err(ConfigError::InvalidThreshold(self.alert.threshold));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
