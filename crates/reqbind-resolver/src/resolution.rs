//! Lazy, one-shot production of a resolved request object.

use crate::RequestResolver;
use reqbind_core::{BindErrorKind, BindResult, ParameterMetadata, RawRequest, RequestObject};
use std::fmt;
use std::iter::FusedIterator;

/// Progress of a single resolution.
///
/// ```text
/// Unstarted → Constructed → Populated → Authorized → Validated → Produced
///                  └──────────────┴────────────┴───────────→ Failed(kind)
/// ```
///
/// The pipeline runs inside a single call to `next()`, so
/// [`Resolution::state`] only ever reports `Unstarted`, `Produced` or
/// `Failed`. The intermediate stages are reported as `stage` fields of
/// `debug` events in the `resolve` span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionState {
    /// Nothing has run yet.
    Unstarted,
    /// A fresh object was obtained from the locator.
    Constructed,
    /// The raw request and parsed body are attached.
    Populated,
    /// The object's authorization check passed.
    Authorized,
    /// The validator reported no violations.
    Validated,
    /// The object was handed to the caller.
    Produced,
    /// A gate failed; nothing was or will be produced.
    Failed(BindErrorKind),
}

impl ResolutionState {
    /// Returns `true` for `Produced` and `Failed`.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Produced | Self::Failed(_))
    }
}

/// Sequence of at most one resolved request object.
///
/// Nothing runs until the first call to [`Iterator::next`]. That call runs the
/// whole pipeline and yields either the validated object or the error that
/// stopped it; every later call yields `None`.
///
/// Collecting into `Result<Vec<_>, _>` gives the familiar
/// "zero or one values, or an error" view:
///
/// ```rust,ignore
/// let objects: Vec<_> = resolver.resolve(&request, &metadata).collect::<Result<_, _>>()?;
/// ```
#[must_use = "a resolution does nothing until it is iterated"]
pub struct Resolution<'a> {
    resolver: &'a RequestResolver,
    request: &'a RawRequest,
    metadata: &'a ParameterMetadata,
    state: ResolutionState,
}

impl<'a> Resolution<'a> {
    pub(crate) fn new(
        resolver: &'a RequestResolver,
        request: &'a RawRequest,
        metadata: &'a ParameterMetadata,
    ) -> Self {
        Self {
            resolver,
            request,
            metadata,
            state: ResolutionState::Unstarted,
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> ResolutionState {
        self.state
    }

    /// The parameter being resolved.
    pub fn metadata(&self) -> &ParameterMetadata {
        self.metadata
    }

    /// Drives the resolution to completion.
    ///
    /// Returns `Ok(None)` if the object was already taken.
    ///
    /// # Errors
    ///
    /// Returns the [`BindError`](reqbind_core::BindError) that stopped the pipeline.
    pub fn into_single(mut self) -> BindResult<Option<Box<dyn RequestObject>>> {
        self.next().transpose()
    }
}

impl Iterator for Resolution<'_> {
    type Item = BindResult<Box<dyn RequestObject>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state != ResolutionState::Unstarted {
            return None;
        }

        let result = self
            .resolver
            .run_pipeline(self.request, self.metadata, &mut self.state);

        self.state = match &result {
            Ok(_) => ResolutionState::Produced,
            Err(e) => ResolutionState::Failed(e.kind()),
        };

        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.state == ResolutionState::Unstarted {
            (1, Some(1))
        } else {
            (0, Some(0))
        }
    }
}

impl FusedIterator for Resolution<'_> {}

impl fmt::Debug for Resolution<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolution")
            .field("parameter", &self.metadata.name())
            .field("request_type", &self.metadata.type_name())
            .field("state", &self.state)
            .finish()
    }
}
