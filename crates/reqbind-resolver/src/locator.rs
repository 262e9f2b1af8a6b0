//! Request object locator.
//!
//! The locator maps a [`RequestType`] to a factory producing a fresh, empty
//! instance of that type. Registrations are collected with a
//! [`LocatorBuilder`] at startup; the built locator is immutable and can be
//! read concurrently from any number of resolutions.
//!
//! # Example
//!
//! ```rust
//! use reqbind_core::{RequestData, RequestObject, RequestType};
//! use reqbind_resolver::RequestObjectLocator;
//!
//! #[derive(Debug, Default)]
//! struct CreateOrder {
//!     data: RequestData,
//! }
//!
//! impl RequestObject for CreateOrder {
//!     fn request_data(&self) -> &RequestData { &self.data }
//!     fn request_data_mut(&mut self) -> &mut RequestData { &mut self.data }
//! }
//!
//! let locator = RequestObjectLocator::builder()
//!     .register_default::<CreateOrder>()
//!     .build();
//!
//! let order_type = RequestType::of::<CreateOrder>();
//! assert!(locator.has_factory(&order_type));
//!
//! let object = locator.create(&order_type).unwrap();
//! assert!(object.is::<CreateOrder>());
//! assert!(!object.is_populated());
//! ```

use reqbind_core::{BindError, BindResult, RequestObject, RequestType};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Factory producing a fresh request object.
pub type Factory = Arc<dyn Fn() -> Box<dyn RequestObject> + Send + Sync>;

/// Immutable registry of request object factories.
#[derive(Clone, Default)]
pub struct RequestObjectLocator {
    factories: HashMap<RequestType, Factory>,
}

impl RequestObjectLocator {
    /// Creates a builder.
    #[must_use]
    pub fn builder() -> LocatorBuilder {
        LocatorBuilder::new()
    }

    /// Checks if a factory is registered for `request_type`.
    #[must_use]
    pub fn has_factory(&self, request_type: &RequestType) -> bool {
        self.factories.contains_key(request_type)
    }

    /// Creates a fresh instance of `request_type`.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::UnknownType`] if no factory is registered.
    pub fn create(&self, request_type: &RequestType) -> BindResult<Box<dyn RequestObject>> {
        self.factories
            .get(request_type)
            .map(|factory| factory())
            .ok_or_else(|| BindError::unknown_type(request_type.name()))
    }

    /// Iterates over the registered types.
    pub fn registered_types(&self) -> impl Iterator<Item = RequestType> + '_ {
        self.factories.keys().copied()
    }

    /// Returns the number of registered factories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Returns `true` if no factories are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl fmt::Debug for RequestObjectLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut types: Vec<_> = self.factories.keys().map(RequestType::name).collect();
        types.sort_unstable();
        f.debug_struct("RequestObjectLocator")
            .field("types", &types)
            .finish()
    }
}

/// Collects factory registrations for a [`RequestObjectLocator`].
#[derive(Default)]
pub struct LocatorBuilder {
    factories: HashMap<RequestType, Factory>,
}

impl LocatorBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `factory` for `T`. A later registration for the same type
    /// replaces the earlier one.
    #[must_use]
    pub fn register<T, F>(mut self, factory: F) -> Self
    where
        T: RequestObject,
        F: Fn() -> T + Send + Sync + 'static,
    {
        let factory: Factory = Arc::new(move || Box::new(factory()) as Box<dyn RequestObject>);
        self.factories.insert(RequestType::of::<T>(), factory);
        self
    }

    /// Registers `T::default` as the factory for `T`.
    #[must_use]
    pub fn register_default<T>(self) -> Self
    where
        T: RequestObject + Default,
    {
        self.register::<T, _>(T::default)
    }

    /// Builds the locator.
    #[must_use]
    pub fn build(self) -> RequestObjectLocator {
        RequestObjectLocator {
            factories: self.factories,
        }
    }
}

impl fmt::Debug for LocatorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocatorBuilder")
            .field("factory_count", &self.factories.len())
            .finish()
    }
}
