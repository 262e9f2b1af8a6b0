//! Typed configuration for reqbind.
//!
//! Loads resolver and logging settings from TOML/JSON files and environment
//! variables, rejecting unknown fields.
//!
//! # Example
//!
//! ```no_run
//! use reqbind_config::ConfigLoader;
//!
//! # fn main() -> Result<(), reqbind_config::ConfigError> {
//! let config = ConfigLoader::new()
//!     .with_file("reqbind.toml")?
//!     .with_env_prefix("REQBIND")
//!     .load()?;
//!
//! let options = config.resolver_options();
//! # let _ = options;
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration File Format
//!
//! ```toml
//! [resolver]
//! max_body_size = 1048576
//! require_json_content_type = false
//! log_violations = false
//!
//! [logging]
//! enabled = true
//! level = "info"
//! format = "json"
//! include_location = false
//! ```

#![doc(html_root_url = "https://docs.rs/reqbind-config/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod loader;
mod schema;

pub use config::ReqbindConfig;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::{LogFormat, LoggingSection, ResolverSection};
