//! Handler parameter metadata.

use crate::{RequestObject, RequestType};
use serde_json::Value;

/// Description of the handler argument being resolved.
///
/// Supplied by the host framework for every call. Only the declared type is
/// used to pick a factory; the remaining attributes are carried for the host's
/// own bookkeeping and diagnostics.
///
/// # Example
///
/// ```rust
/// use reqbind_core::{ParameterMetadata, RequestData, RequestObject};
///
/// #[derive(Debug, Default)]
/// struct UpdateProfile {
///     data: RequestData,
/// }
///
/// impl RequestObject for UpdateProfile {
///     fn request_data(&self) -> &RequestData { &self.data }
///     fn request_data_mut(&mut self) -> &mut RequestData { &mut self.data }
/// }
///
/// let metadata = ParameterMetadata::of::<UpdateProfile>("profile").nullable(true);
///
/// assert_eq!(metadata.name(), "profile");
/// assert!(metadata.is_nullable());
/// assert!(!metadata.is_variadic());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterMetadata {
    name: String,
    declared_type: Option<RequestType>,
    is_variadic: bool,
    is_nullable: bool,
    default_value: Option<Value>,
}

impl ParameterMetadata {
    /// Creates metadata for a parameter declared with `declared_type`.
    #[must_use]
    pub fn new(name: impl Into<String>, declared_type: RequestType) -> Self {
        Self {
            name: name.into(),
            declared_type: Some(declared_type),
            is_variadic: false,
            is_nullable: false,
            default_value: None,
        }
    }

    /// Creates metadata for a parameter declared as `T`.
    #[must_use]
    pub fn of<T: RequestObject>(name: impl Into<String>) -> Self {
        Self::new(name, RequestType::of::<T>())
    }

    /// Creates metadata for a parameter without a declared request type.
    #[must_use]
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: None,
            is_variadic: false,
            is_nullable: false,
            default_value: None,
        }
    }

    /// Sets whether the parameter is variadic.
    #[must_use]
    pub fn variadic(mut self, is_variadic: bool) -> Self {
        self.is_variadic = is_variadic;
        self
    }

    /// Sets whether the parameter accepts null.
    #[must_use]
    pub fn nullable(mut self, is_nullable: bool) -> Self {
        self.is_nullable = is_nullable;
        self
    }

    /// Sets the parameter's default value.
    #[must_use]
    pub fn with_default(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }

    /// The parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared type, if any.
    #[must_use]
    pub fn declared_type(&self) -> Option<RequestType> {
        self.declared_type
    }

    /// The declared type name, or `"<untyped>"`.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.declared_type.map_or("<untyped>", |t| t.name())
    }

    /// Whether the parameter is variadic.
    #[must_use]
    pub fn is_variadic(&self) -> bool {
        self.is_variadic
    }

    /// Whether the parameter accepts null.
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        self.is_nullable
    }

    /// The default value, if any.
    #[must_use]
    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    /// Whether a default value is declared.
    #[must_use]
    pub fn has_default_value(&self) -> bool {
        self.default_value.is_some()
    }
}
