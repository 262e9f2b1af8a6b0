//! # Reqbind Core
//!
//! Core types for binding HTTP requests to typed handler parameters.
//!
//! - [`RawRequest`] - The transport-level request handed over by the host
//! - [`RequestObject`] - Capability trait implemented by domain request types
//! - [`RequestData`] - Raw request and parsed body embedded in request objects
//! - [`ParsedBody`] - JSON object decoded from the request body
//! - [`ParameterMetadata`] - The handler parameter being resolved
//! - [`ViolationList`] - Ordered constraint violations
//! - [`BindError`] - Terminal resolution errors

#![doc(html_root_url = "https://docs.rs/reqbind-core/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod body;
mod error;
mod metadata;
mod object;
mod request;
mod violation;

pub use body::{BodyOptions, ParsedBody, DEFAULT_MAX_BODY_SIZE};
pub use error::{BindError, BindErrorKind, BindResult, ErrorDetail, ErrorEnvelope};
pub use metadata::ParameterMetadata;
pub use object::{AsAny, RequestData, RequestObject, RequestType};
pub use request::{RawRequest, RawRequestBuilder};
pub use violation::{Violation, ViolationList};
