//! Root configuration type.

use serde::{Deserialize, Serialize};

use crate::{ConfigError, LogFormat, LoggingSection, ResolverSection};
use reqbind_resolver::ResolverOptions;
use reqbind_telemetry::{create_env_filter, LogConfig};

/// Complete reqbind configuration.
///
/// # Example
///
/// ```
/// use reqbind_config::ReqbindConfig;
///
/// let config = ReqbindConfig::default();
/// assert_eq!(config.resolver.max_body_size, 1024 * 1024);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct ReqbindConfig {
    /// Resolver configuration.
    #[serde(default)]
    pub resolver: ResolverSection,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSection,
}

impl ReqbindConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if:
    /// - `resolver.max_body_size` is zero
    /// - `logging.level` is not a valid filter directive
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.max_body_size == 0 {
            return Err(ConfigError::invalid_value(
                "resolver.max_body_size",
                "must be greater than 0",
            ));
        }

        if self.logging.enabled {
            create_env_filter(&self.logging.level)
                .map_err(|e| ConfigError::invalid_value("logging.level", e.to_string()))?;
        }

        Ok(())
    }

    /// Development preset: pretty debug logs, every violation logged.
    ///
    /// ```
    /// use reqbind_config::{LogFormat, ReqbindConfig};
    ///
    /// let config = ReqbindConfig::development();
    /// assert_eq!(config.logging.format, LogFormat::Pretty);
    /// assert!(config.resolver.log_violations);
    /// ```
    #[must_use]
    pub fn development() -> Self {
        let mut config = Self::default();

        config.logging.level = "debug".to_string();
        config.logging.format = LogFormat::Pretty;
        config.logging.include_location = true;

        config.resolver.log_violations = true;

        config
    }

    /// Production preset: JSON logs, JSON-only bodies.
    #[must_use]
    pub fn production() -> Self {
        let mut config = Self::default();

        config.logging.level = "info".to_string();
        config.logging.format = LogFormat::Json;

        config.resolver.require_json_content_type = true;
        config.resolver.log_violations = false;

        config
    }

    /// Options for a [`RequestResolver`](reqbind_resolver::RequestResolver).
    #[must_use]
    pub fn resolver_options(&self) -> ResolverOptions {
        ResolverOptions {
            body: self.resolver.body_options(),
            log_violations: self.resolver.log_violations,
        }
    }

    /// Subscriber settings for [`init_logging`](reqbind_telemetry::init_logging).
    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        self.logging.to_log_config()
    }
}
