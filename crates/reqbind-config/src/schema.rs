//! Configuration sections.

use reqbind_core::{BodyOptions, DEFAULT_MAX_BODY_SIZE};
use reqbind_telemetry::LogConfig;
use serde::{Deserialize, Serialize};

/// Resolver configuration section.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ResolverSection {
    /// Bodies larger than this many bytes are treated as empty.
    #[serde(default = "default_max_body_size")]
    pub max_body_size: usize,

    /// Only decode bodies declared as JSON.
    #[serde(default)]
    pub require_json_content_type: bool,

    /// Log every constraint violation at debug level.
    #[serde(default)]
    pub log_violations: bool,
}

impl Default for ResolverSection {
    fn default() -> Self {
        Self {
            max_body_size: default_max_body_size(),
            require_json_content_type: false,
            log_violations: false,
        }
    }
}

impl ResolverSection {
    /// Body decoding options for this section.
    #[must_use]
    pub fn body_options(&self) -> BodyOptions {
        BodyOptions {
            max_body_size: self.max_body_size,
            require_json_content_type: self.require_json_content_type,
        }
    }
}

fn default_max_body_size() -> usize {
    DEFAULT_MAX_BODY_SIZE
}

/// Log format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON formatted logs (production).
    #[default]
    Json,
    /// Human-readable pretty format (development).
    Pretty,
}

/// Logging configuration section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggingSection {
    /// Enable logging.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log filter directive (e.g. "info", "reqbind_resolver=debug").
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log output format.
    #[serde(default)]
    pub format: LogFormat,

    /// Include source file and line in logs.
    #[serde(default)]
    pub include_location: bool,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_log_level(),
            format: LogFormat::default(),
            include_location: false,
        }
    }
}

impl LoggingSection {
    /// Subscriber settings for this section.
    #[must_use]
    pub fn to_log_config(&self) -> LogConfig {
        let base = match self.format {
            LogFormat::Json => LogConfig::production(),
            LogFormat::Pretty => LogConfig::development(),
        };

        LogConfig {
            enabled: self.enabled,
            level: self.level.clone(),
            file_line_info: self.include_location,
            ..base
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}
