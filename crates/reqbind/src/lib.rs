//! # Reqbind
//!
//! **Request objects for HTTP handlers: populated, authorized and validated
//! before the handler runs.**
//!
//! A request object is a plain Rust type that carries the raw request and
//! its decoded body, decides whether the caller may proceed, and declares the
//! constraints its input must satisfy. The host framework asks a
//! [`RequestResolver`](resolver::RequestResolver) whether it can bind a
//! handler parameter and, if so, resolves it.
//!
//! ## Quick Start
//!
//! ```rust
//! use reqbind::prelude::*;
//!
//! #[derive(Debug, Default)]
//! struct CreateUserRequest {
//!     data: RequestData,
//! }
//!
//! impl RequestObject for CreateUserRequest {
//!     fn request_data(&self) -> &RequestData { &self.data }
//!     fn request_data_mut(&mut self) -> &mut RequestData { &mut self.data }
//!
//!     fn check_constraints(&self) -> ViolationList {
//!         let mut violations = ViolationList::new();
//!         if self.data.input_str("email").is_none() {
//!             violations.add("email", "This value should not be blank.");
//!         }
//!         violations
//!     }
//! }
//!
//! let config = ReqbindConfig::default();
//! let resolver = RequestResolver::new(
//!     RequestObjectLocator::builder()
//!         .register_default::<CreateUserRequest>()
//!         .build(),
//!     DeclaredConstraints,
//! )
//! .with_options(config.resolver_options());
//!
//! let request = RawRequest::get("/users");
//! let err = resolver.resolve_as::<CreateUserRequest>(&request).unwrap_err();
//! assert_eq!(err.kind(), BindErrorKind::ValidationFailed);
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! Construct → Populate → Authorize → Validate → Produce
//!                            │           │
//!                      NotAuthorized  ValidationFailed
//! ```

#![doc(html_root_url = "https://docs.rs/reqbind/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use reqbind_core as core;

// Re-export resolver types
pub use reqbind_resolver as resolver;

// Re-export logging setup
pub use reqbind_telemetry as telemetry;

// Re-export configuration types
pub use reqbind_config as config;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use reqbind_core::{
        BindError, BindErrorKind, BindResult, ErrorEnvelope, ParameterMetadata, ParsedBody,
        RawRequest, RequestData, RequestObject, RequestType, Violation, ViolationList,
    };

    pub use reqbind_resolver::{
        ConstraintValidator, DeclaredConstraints, RequestObjectLocator, RequestResolver,
        Resolution, ResolverOptions,
    };

    pub use reqbind_config::{ConfigLoader, ReqbindConfig};

    pub use reqbind_telemetry::{init_logging, LogConfig};
}
