//! # Reqbind Resolver
//!
//! Turns a raw request into a validated request object for a handler
//! parameter.
//!
//! - [`RequestObjectLocator`] - Type tag → factory registry
//! - [`ConstraintValidator`] - Seam for the external validation engine
//! - [`RequestResolver`] - `supports` / `resolve` entry points for the host
//! - [`Resolution`] - Lazy sequence of at most one resolved object
//!
//! ## Pipeline
//!
//! ```text
//! host ── supports(request, metadata) ──▶ locator.has_factory(type)
//!      ── resolve(request, metadata) ───▶ Resolution (lazy)
//!                                            │ next()
//!                                            ▼
//!             construct → populate → authorize → validate → produce
//! ```

#![doc(html_root_url = "https://docs.rs/reqbind-resolver/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod locator;
mod resolution;
mod resolver;
mod validator;

pub use locator::{Factory, LocatorBuilder, RequestObjectLocator};
pub use resolution::{Resolution, ResolutionState};
pub use resolver::{RequestResolver, ResolverOptions};
pub use validator::{ConstraintValidator, DeclaredConstraints};
