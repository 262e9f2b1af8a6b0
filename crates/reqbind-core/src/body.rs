//! Parsed body representation.
//!
//! A request object derives its [`ParsedBody`] from the raw request during
//! population. Decoding never fails: a body that cannot be read as a JSON
//! object simply yields an empty map, and constraint validation reports
//! whatever fields are missing as a result.

use crate::RawRequest;
use serde::Serialize;
use serde_json::{Map, Value};

/// Default maximum body size decoded into a [`ParsedBody`] (1 MB).
pub const DEFAULT_MAX_BODY_SIZE: usize = 1024 * 1024;

/// Options controlling how a request body is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyOptions {
    /// Bodies larger than this are not decoded.
    pub max_body_size: usize,
    /// Only decode bodies whose Content-Type is JSON (`application/json` or `*/*+json`).
    pub require_json_content_type: bool,
}

impl Default for BodyOptions {
    fn default() -> Self {
        Self {
            max_body_size: DEFAULT_MAX_BODY_SIZE,
            require_json_content_type: false,
        }
    }
}

/// Structured key/value data decoded from a request body.
///
/// # Example
///
/// ```rust
/// use reqbind_core::{BodyOptions, ParsedBody, RawRequest};
/// use serde_json::json;
///
/// let request = RawRequest::builder()
///     .json(&json!({"email": "alice@example.com", "age": 31}))
///     .build();
///
/// let body = ParsedBody::from_request(&request, &BodyOptions::default());
/// assert_eq!(body.get_str("email"), Some("alice@example.com"));
/// assert_eq!(body.get("age"), Some(&json!(31)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ParsedBody(Map<String, Value>);

impl ParsedBody {
    /// Creates an empty parsed body.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes the body of `request` according to `options`.
    #[must_use]
    pub fn from_request(request: &RawRequest, options: &BodyOptions) -> Self {
        let body = request.body();

        if body.is_empty() {
            return Self::new();
        }

        if body.len() > options.max_body_size {
            tracing::debug!(
                size = body.len(),
                max = options.max_body_size,
                "body exceeds decode limit, leaving parsed body empty"
            );
            return Self::new();
        }

        if options.require_json_content_type && !is_json_content_type(request.content_type()) {
            tracing::debug!(
                content_type = request.content_type().unwrap_or("none"),
                "body is not JSON, leaving parsed body empty"
            );
            return Self::new();
        }

        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(map)) => Self(map),
            Ok(_) => {
                tracing::debug!("body is valid JSON but not an object");
                Self::new()
            }
            Err(e) => {
                tracing::debug!(error = %e, "body is not valid JSON");
                Self::new()
            }
        }
    }

    /// Returns the value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the value for `key` if it is a string.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of top-level keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no keys were decoded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the underlying map.
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Converts into a JSON object value.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for ParsedBody {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

fn is_json_content_type(content_type: Option<&str>) -> bool {
    let Some(parsed) = content_type.and_then(|ct| ct.parse::<mime::Mime>().ok()) else {
        return false;
    };

    parsed.type_() == mime::APPLICATION
        && (parsed.subtype() == mime::JSON || parsed.suffix() == Some(mime::JSON))
}
