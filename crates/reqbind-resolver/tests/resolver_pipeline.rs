//! Resolution pipeline integration tests.
//!
//! These tests drive the resolver the way a host framework does:
//!
//! 1. `supports` - decide whether the parameter is bindable
//! 2. `resolve` - construct, populate, authorize, validate, produce
//!
//! and check that each gate short-circuits with its own error.

use http::Method;
use proptest::prelude::*;
use reqbind_core::{
    BindErrorKind, ParameterMetadata, RawRequest, RequestData, RequestObject, ViolationList,
};
use reqbind_resolver::{
    ConstraintValidator, DeclaredConstraints, RequestObjectLocator, RequestResolver,
    ResolutionState,
};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
struct TestRequest {
    data: RequestData,
    authorized: bool,
}

impl Default for TestRequest {
    fn default() -> Self {
        Self {
            data: RequestData::default(),
            authorized: true,
        }
    }
}

impl TestRequest {
    fn denied() -> Self {
        Self {
            authorized: false,
            ..Self::default()
        }
    }
}

impl RequestObject for TestRequest {
    fn request_data(&self) -> &RequestData {
        &self.data
    }

    fn request_data_mut(&mut self) -> &mut RequestData {
        &mut self.data
    }

    fn authorize(&self) -> bool {
        self.authorized
    }
}

#[derive(Debug, Default)]
struct UnregisteredRequest {
    data: RequestData,
}

impl RequestObject for UnregisteredRequest {
    fn request_data(&self) -> &RequestData {
        &self.data
    }

    fn request_data_mut(&mut self) -> &mut RequestData {
        &mut self.data
    }
}

/// Validator double recording how often it ran and what it saw.
#[derive(Default)]
struct RecordingValidator {
    calls: AtomicUsize,
    unpopulated_calls: AtomicUsize,
    violations: ViolationList,
}

impl RecordingValidator {
    fn accepting() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn rejecting() -> Arc<Self> {
        let mut violations = ViolationList::new();
        violations.add("name", "This value should not be blank.");
        Arc::new(Self {
            violations,
            ..Self::default()
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ConstraintValidator for RecordingValidator {
    fn validate(&self, object: &dyn RequestObject) -> ViolationList {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !object.is_populated() {
            self.unpopulated_calls.fetch_add(1, Ordering::SeqCst);
        }
        self.violations.clone()
    }
}

fn resolver_with<F>(factory: F, validator: Arc<RecordingValidator>) -> RequestResolver
where
    F: Fn() -> TestRequest + Send + Sync + 'static,
{
    let locator = RequestObjectLocator::builder().register(factory).build();
    RequestResolver::from_shared(Arc::new(locator), validator)
}

fn test_request_argument() -> ParameterMetadata {
    ParameterMetadata::of::<TestRequest>("testRequest")
}

#[test]
fn valid_request_yields_the_populated_object() {
    let validator = RecordingValidator::accepting();
    let resolver = resolver_with(TestRequest::default, Arc::clone(&validator));
    let request = RawRequest::get("/");
    let argument = test_request_argument();

    let mut expected = TestRequest::default();
    expected.attach_raw_request(request.clone());
    let body = expected.parse_body(&resolver.options().body);
    expected.attach_parsed_body(body);

    assert!(resolver.supports(&request, &argument));

    let objects: Vec<_> = resolver
        .resolve(&request, &argument)
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(objects.len(), 1);
    assert_eq!(objects[0].downcast_ref::<TestRequest>(), Some(&expected));
    assert_eq!(validator.calls(), 1);
    assert_eq!(validator.unpopulated_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn json_body_is_parsed_before_validation() {
    let resolver = RequestResolver::new(
        RequestObjectLocator::builder()
            .register_default::<TestRequest>()
            .build(),
        |object: &dyn RequestObject| {
            let mut violations = ViolationList::new();
            if object.validation_target().get("name") != Some(&json!("Alice")) {
                violations.add("name", "expected Alice");
            }
            violations
        },
    );

    let request = RawRequest::builder()
        .method(Method::POST)
        .json(&json!({"name": "Alice"}))
        .build();

    let object = resolver
        .resolve(&request, &test_request_argument())
        .into_single()
        .unwrap()
        .unwrap();

    let body = object.request_data().body().unwrap();
    assert_eq!(body.get_str("name"), Some("Alice"));
    assert_eq!(object.request_data().request(), Some(&request));
}

#[test]
fn violations_fail_with_the_full_list_and_yield_nothing() {
    let validator = RecordingValidator::rejecting();
    let resolver = resolver_with(TestRequest::default, Arc::clone(&validator));
    let request = RawRequest::get("/");
    let argument = test_request_argument();

    assert!(resolver.supports(&request, &argument));

    let mut resolution = resolver.resolve(&request, &argument);
    let err = resolution.next().unwrap().unwrap_err();

    assert_eq!(err.kind(), BindErrorKind::ValidationFailed);
    assert_eq!(err.violations(), Some(&validator.violations));
    assert_eq!(
        resolution.state(),
        ResolutionState::Failed(BindErrorKind::ValidationFailed)
    );
    assert!(resolution.next().is_none());

    let produced: Vec<_> = resolver
        .resolve(&request, &argument)
        .filter_map(Result::ok)
        .collect();
    assert!(produced.is_empty());
}

#[test]
fn denied_request_never_reaches_the_validator() {
    let validator = RecordingValidator::accepting();
    let resolver = resolver_with(TestRequest::denied, Arc::clone(&validator));
    let request = RawRequest::get("/");
    let argument = test_request_argument();

    assert!(resolver.supports(&request, &argument));

    let err = resolver
        .resolve(&request, &argument)
        .into_single()
        .unwrap_err();

    assert_eq!(err.kind(), BindErrorKind::NotAuthorized);
    assert!(err.violations().is_none());
    assert_eq!(validator.calls(), 0);
}

#[test]
fn authorization_is_checked_before_validation() {
    let validator = RecordingValidator::rejecting();
    let resolver = resolver_with(TestRequest::denied, Arc::clone(&validator));

    let err = resolver
        .resolve(&RawRequest::get("/"), &test_request_argument())
        .into_single()
        .unwrap_err();

    assert_eq!(err.kind(), BindErrorKind::NotAuthorized);
    assert_eq!(validator.calls(), 0);
}

#[test]
fn unknown_type_is_unsupported_and_fails_to_resolve() {
    let validator = RecordingValidator::accepting();
    let resolver = resolver_with(TestRequest::default, Arc::clone(&validator));
    let request = RawRequest::get("/");
    let argument = ParameterMetadata::of::<UnregisteredRequest>("other");

    assert!(!resolver.supports(&request, &argument));

    let mut resolution = resolver.resolve(&request, &argument);
    let err = resolution.next().unwrap().unwrap_err();

    assert_eq!(err.kind(), BindErrorKind::UnknownType);
    assert!(err.type_name().ends_with("UnregisteredRequest"));
    assert_eq!(
        resolution.state(),
        ResolutionState::Failed(BindErrorKind::UnknownType)
    );
    assert_eq!(validator.calls(), 0);
}

#[test]
fn supports_never_constructs_an_object() {
    let constructed = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&constructed);
    let resolver = resolver_with(
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
            TestRequest::default()
        },
        RecordingValidator::accepting(),
    );

    let request = RawRequest::get("/");
    for _ in 0..3 {
        assert!(resolver.supports(&request, &test_request_argument()));
    }
    assert_eq!(constructed.load(Ordering::SeqCst), 0);

    let _ = resolver
        .resolve(&request, &test_request_argument())
        .into_single();
    assert_eq!(constructed.load(Ordering::SeqCst), 1);
}

#[test]
fn each_resolution_gets_a_fresh_object() {
    let resolver = RequestResolver::new(
        RequestObjectLocator::builder()
            .register_default::<TestRequest>()
            .build(),
        DeclaredConstraints,
    );

    let first = RawRequest::builder().json(&json!({"n": 1})).build();
    let second = RawRequest::builder().json(&json!({"n": 2})).build();

    let a: TestRequest = resolver.resolve_as(&first).unwrap();
    let b: TestRequest = resolver.resolve_as(&second).unwrap();

    assert_eq!(a.data.input("n"), Some(json!(1)));
    assert_eq!(b.data.input("n"), Some(json!(2)));
}

#[test]
fn resolver_is_shared_across_threads() {
    let resolver = Arc::new(RequestResolver::new(
        RequestObjectLocator::builder()
            .register_default::<TestRequest>()
            .build(),
        DeclaredConstraints,
    ));

    std::thread::scope(|scope| {
        for i in 0..4 {
            let resolver = Arc::clone(&resolver);
            scope.spawn(move || {
                let request = RawRequest::builder().json(&json!({"worker": i})).build();
                let object: TestRequest = resolver.resolve_as(&request).unwrap();
                assert_eq!(object.data.input("worker"), Some(json!(i)));
            });
        }
    });
}

proptest! {
    #[test]
    fn supports_depends_only_on_the_declared_type(
        name in "[a-zA-Z_][a-zA-Z0-9_]{0,16}",
        variadic in any::<bool>(),
        nullable in any::<bool>(),
        path in "/[a-z]{0,8}",
    ) {
        let resolver = resolver_with(TestRequest::default, RecordingValidator::accepting());
        let request = RawRequest::builder()
            .uri(path.parse().unwrap())
            .build();

        let registered = ParameterMetadata::of::<TestRequest>(name.clone())
            .variadic(variadic)
            .nullable(nullable);
        let unregistered = ParameterMetadata::of::<UnregisteredRequest>(name.clone())
            .variadic(variadic)
            .nullable(nullable);
        let untyped = ParameterMetadata::untyped(name);

        prop_assert!(resolver.supports(&request, &registered));
        prop_assert!(!resolver.supports(&request, &unregistered));
        prop_assert!(!resolver.supports(&request, &untyped));
    }
}
