//! The request resolver.
//!
//! [`RequestResolver`] decides whether it can bind a handler parameter and,
//! if so, runs the binding pipeline:
//!
//! ```text
//! Construct → Populate → Authorize → Validate → Produce
//!     │           │           │           │
//!     └─ UnknownType          │           └─ ValidationFailed
//!                             └─ NotAuthorized
//! ```
//!
//! Each stage runs only if the previous one succeeded. The object is only
//! handed out once every gate has passed.

use crate::{ConstraintValidator, RequestObjectLocator, Resolution, ResolutionState};
use reqbind_core::{
    BindError, BindResult, BodyOptions, ParameterMetadata, RawRequest, RequestObject, RequestType,
};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, instrument, warn};

/// Tuning for a [`RequestResolver`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolverOptions {
    /// How request bodies are decoded during population.
    pub body: BodyOptions,
    /// Log each violation (path and message) at debug level.
    pub log_violations: bool,
}

/// Binds raw requests to request object parameters.
///
/// The resolver is cheap to clone and safe to share between threads; it holds
/// no per-request state.
///
/// # Example
///
/// ```rust
/// use reqbind_core::{ParameterMetadata, RawRequest, RequestData, RequestObject};
/// use reqbind_resolver::{DeclaredConstraints, RequestObjectLocator, RequestResolver};
///
/// #[derive(Debug, Default)]
/// struct SearchRequest {
///     data: RequestData,
/// }
///
/// impl RequestObject for SearchRequest {
///     fn request_data(&self) -> &RequestData { &self.data }
///     fn request_data_mut(&mut self) -> &mut RequestData { &mut self.data }
/// }
///
/// let resolver = RequestResolver::new(
///     RequestObjectLocator::builder().register_default::<SearchRequest>().build(),
///     DeclaredConstraints,
/// );
///
/// let request = RawRequest::get("/search?q=rust");
/// let metadata = ParameterMetadata::of::<SearchRequest>("search");
///
/// assert!(resolver.supports(&request, &metadata));
///
/// let objects = resolver
///     .resolve(&request, &metadata)
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap();
/// assert_eq!(objects.len(), 1);
/// assert!(objects[0].is_populated());
/// ```
#[derive(Clone)]
pub struct RequestResolver {
    locator: Arc<RequestObjectLocator>,
    validator: Arc<dyn ConstraintValidator>,
    options: ResolverOptions,
}

impl RequestResolver {
    /// Creates a resolver from a locator and a validator.
    pub fn new(locator: RequestObjectLocator, validator: impl ConstraintValidator + 'static) -> Self {
        Self::from_shared(Arc::new(locator), Arc::new(validator))
    }

    /// Creates a resolver from shared components.
    pub fn from_shared(
        locator: Arc<RequestObjectLocator>,
        validator: Arc<dyn ConstraintValidator>,
    ) -> Self {
        Self {
            locator,
            validator,
            options: ResolverOptions::default(),
        }
    }

    /// Replaces the resolver options.
    #[must_use]
    pub fn with_options(mut self, options: ResolverOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the resolver options.
    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Returns the locator.
    pub fn locator(&self) -> &RequestObjectLocator {
        &self.locator
    }

    /// Checks whether this resolver can bind `metadata`.
    ///
    /// True iff a factory is registered for the declared type. The request
    /// is not inspected and no object is constructed.
    pub fn supports(&self, _request: &RawRequest, metadata: &ParameterMetadata) -> bool {
        metadata
            .declared_type()
            .is_some_and(|request_type| self.locator.has_factory(&request_type))
    }

    /// Starts resolving `metadata` from `request`.
    ///
    /// The returned [`Resolution`] is lazy: the pipeline runs on its first
    /// `next()`. Parameters this resolver does not [support](Self::supports)
    /// fail with [`BindError::UnknownType`].
    pub fn resolve<'a>(
        &'a self,
        request: &'a RawRequest,
        metadata: &'a ParameterMetadata,
    ) -> Resolution<'a> {
        Resolution::new(self, request, metadata)
    }

    /// Resolves a `T` directly.
    ///
    /// # Errors
    ///
    /// Returns the [`BindError`] that stopped the pipeline.
    pub fn resolve_as<T: RequestObject>(&self, request: &RawRequest) -> BindResult<T> {
        let request_type = RequestType::of::<T>();
        let metadata = ParameterMetadata::new(request_type.short_name(), request_type);

        self.resolve(request, &metadata)
            .into_single()?
            .and_then(<dyn RequestObject>::downcast::<T>)
            .map(|object| *object)
            .ok_or_else(|| BindError::unknown_type(request_type.name()))
    }

    #[instrument(
        level = "debug",
        name = "resolve",
        skip_all,
        fields(parameter = metadata.name(), request_type = metadata.type_name())
    )]
    pub(crate) fn run_pipeline(
        &self,
        request: &RawRequest,
        metadata: &ParameterMetadata,
        state: &mut ResolutionState,
    ) -> BindResult<Box<dyn RequestObject>> {
        let Some(request_type) = metadata.declared_type() else {
            error!("parameter has no declared request type");
            return Err(BindError::unknown_type(metadata.type_name()));
        };

        let mut object = self.locator.create(&request_type).map_err(|e| {
            error!(error = %e, "no factory registered");
            e
        })?;
        advance(state, ResolutionState::Constructed);

        object.attach_raw_request(request.clone());
        let body = object.parse_body(&self.options.body);
        object.attach_parsed_body(body);
        debug!(method = %request.method(), path = request.path(), "request object populated");
        advance(state, ResolutionState::Populated);

        if !object.authorize() {
            warn!("request object denied access");
            return Err(BindError::not_authorized(request_type.name()));
        }
        advance(state, ResolutionState::Authorized);

        let violations = self.validator.validate(&*object);
        if !violations.is_empty() {
            warn!(violation_count = violations.len(), "request object failed validation");
            if self.options.log_violations {
                for violation in &violations {
                    debug!(
                        property_path = %violation.property_path,
                        violation = %violation.message,
                        "constraint violation"
                    );
                }
            }
            return Err(BindError::validation_failed(request_type.name(), violations));
        }
        advance(state, ResolutionState::Validated);

        debug!("request object resolved");
        Ok(object)
    }
}

fn advance(state: &mut ResolutionState, next: ResolutionState) {
    debug!(stage = ?next, "resolution advanced");
    *state = next;
}

impl fmt::Debug for RequestResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestResolver")
            .field("locator", &self.locator)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
