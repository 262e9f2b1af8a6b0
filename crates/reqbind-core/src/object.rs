//! The request object capability surface.
//!
//! A request object is a domain type constructed fresh for every resolution.
//! Concrete types embed a [`RequestData`] holding the raw request and the
//! parsed body, and implement [`RequestObject`] to expose it together with
//! their authorization decision and declared constraints.
//!
//! # Example
//!
//! ```rust
//! use reqbind_core::{RequestData, RequestObject, ViolationList};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct CreateUser {
//!     data: RequestData,
//! }
//!
//! impl RequestObject for CreateUser {
//!     fn request_data(&self) -> &RequestData {
//!         &self.data
//!     }
//!
//!     fn request_data_mut(&mut self) -> &mut RequestData {
//!         &mut self.data
//!     }
//!
//!     fn check_constraints(&self) -> ViolationList {
//!         let mut violations = ViolationList::new();
//!         if self.data.input_str("email").is_none() {
//!             violations.add("email", "This value should not be blank.");
//!         }
//!         violations
//!     }
//! }
//! ```

use crate::{BodyOptions, ParsedBody, RawRequest, ViolationList};
use serde_json::{Map, Value};
use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Explicit type tag identifying a request object type.
///
/// Equality and hashing use the [`TypeId`] only; the name is kept for
/// diagnostics.
#[derive(Clone, Copy)]
pub struct RequestType {
    id: TypeId,
    name: &'static str,
}

impl RequestType {
    /// Returns the tag for `T`.
    #[must_use]
    pub fn of<T: RequestObject>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Returns the fully qualified type name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the type name without its module path.
    #[must_use]
    pub fn short_name(&self) -> &'static str {
        self.name.rsplit("::").next().unwrap_or(self.name)
    }
}

impl PartialEq for RequestType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for RequestType {}

impl Hash for RequestType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RequestType").field(&self.name).finish()
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Request state shared by every request object type.
///
/// Populated by the resolver before authorization or validation runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestData {
    request: Option<RawRequest>,
    body: Option<ParsedBody>,
}

impl RequestData {
    /// Creates empty, unpopulated request data.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the attached raw request.
    #[must_use]
    pub fn request(&self) -> Option<&RawRequest> {
        self.request.as_ref()
    }

    /// Returns the attached parsed body.
    #[must_use]
    pub fn body(&self) -> Option<&ParsedBody> {
        self.body.as_ref()
    }

    /// Attaches the raw request.
    pub fn set_request(&mut self, request: RawRequest) {
        self.request = Some(request);
    }

    /// Attaches the parsed body.
    pub fn set_body(&mut self, body: ParsedBody) {
        self.body = Some(body);
    }

    /// Returns `true` once both the raw request and the parsed body are attached.
    #[must_use]
    pub fn is_populated(&self) -> bool {
        self.request.is_some() && self.body.is_some()
    }

    /// Decoded query string parameters. Repeated keys keep the last value.
    #[must_use]
    pub fn query(&self) -> Map<String, Value> {
        self.request
            .as_ref()
            .and_then(RawRequest::query_string)
            .and_then(|q| serde_urlencoded::from_str::<Vec<(String, String)>>(q).ok())
            .unwrap_or_default()
            .into_iter()
            .map(|(k, v)| (k, Value::String(v)))
            .collect()
    }

    /// Looks up `key` in the parsed body, then in the query string.
    #[must_use]
    pub fn input(&self, key: &str) -> Option<Value> {
        if let Some(value) = self.body.as_ref().and_then(|b| b.get(key)) {
            return Some(value.clone());
        }
        self.query().remove(key)
    }

    /// Like [`input`](Self::input), but only returns non-empty strings.
    #[must_use]
    pub fn input_str(&self, key: &str) -> Option<String> {
        match self.input(key)? {
            Value::String(s) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    /// All input: query parameters overlaid with body fields.
    #[must_use]
    pub fn all(&self) -> Map<String, Value> {
        let mut all = self.query();
        if let Some(body) = &self.body {
            for (k, v) in body.as_map() {
                all.insert(k.clone(), v.clone());
            }
        }
        all
    }
}

/// Upcasting helper so boxed request objects can be downcast to their
/// concrete type.
pub trait AsAny: Any {
    /// Returns `self` as `&dyn Any`.
    fn as_any(&self) -> &dyn Any;

    /// Converts a boxed value into `Box<dyn Any>`.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Capabilities a request object exposes to the resolver.
///
/// Only [`request_data`](Self::request_data) and
/// [`request_data_mut`](Self::request_data_mut) are required. The defaults
/// authorize everything and declare no constraints.
pub trait RequestObject: AsAny + fmt::Debug + Send {
    /// Shared request state.
    fn request_data(&self) -> &RequestData;

    /// Mutable shared request state.
    fn request_data_mut(&mut self) -> &mut RequestData;

    /// Attaches the raw request this object is bound from.
    fn attach_raw_request(&mut self, request: RawRequest) {
        self.request_data_mut().set_request(request);
    }

    /// Derives the parsed body from the attached raw request.
    ///
    /// Returns an empty body if no request is attached yet.
    fn parse_body(&self, options: &BodyOptions) -> ParsedBody {
        self.request_data()
            .request()
            .map(|request| ParsedBody::from_request(request, options))
            .unwrap_or_default()
    }

    /// Attaches the parsed body.
    fn attach_parsed_body(&mut self, body: ParsedBody) {
        self.request_data_mut().set_body(body);
    }

    /// Whether the caller may perform this request. Must not have side effects.
    fn authorize(&self) -> bool {
        true
    }

    /// Constraints declared by the type itself.
    fn check_constraints(&self) -> ViolationList {
        ViolationList::new()
    }

    /// The view of this object handed to external validators.
    fn validation_target(&self) -> Value {
        Value::Object(self.request_data().all())
    }

    /// Returns `true` once the object has been populated.
    fn is_populated(&self) -> bool {
        self.request_data().is_populated()
    }
}

impl dyn RequestObject {
    /// Returns `true` if the object is a `T`.
    #[must_use]
    pub fn is<T: RequestObject>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Returns a reference to the concrete `T`.
    #[must_use]
    pub fn downcast_ref<T: RequestObject>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Converts into the concrete `T`, or `None` if the object is another type.
    #[must_use]
    pub fn downcast<T: RequestObject>(self: Box<Self>) -> Option<Box<T>> {
        self.into_any().downcast::<T>().ok()
    }
}
