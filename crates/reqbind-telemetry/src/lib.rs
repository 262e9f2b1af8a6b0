//! Observability setup for reqbind.
//!
//! The resolver emits `tracing` events and a `resolve` span for every
//! resolution. This crate installs a `tracing-subscriber` pipeline that
//! renders them either as JSON (production) or pretty-printed text
//! (development).
//!
//! # Example
//!
//! ```rust,no_run
//! use reqbind_telemetry::{init_logging, LogConfig};
//!
//! # fn main() -> Result<(), reqbind_telemetry::TelemetryError> {
//! init_logging(&LogConfig::development())?;
//! tracing::info!("binding ready");
//! # Ok(())
//! # }
//! ```

#![doc(html_root_url = "https://docs.rs/reqbind-telemetry/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod logging;

pub use error::TelemetryError;
pub use logging::{create_env_filter, init_logging, LogConfig};

/// Result type for telemetry operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;
