//! Constraint validator seam.
//!
//! The rule engine is external: anything that can turn a populated request
//! object into a [`ViolationList`] plugs in here. Closures work directly:
//!
//! ```rust
//! use reqbind_core::{RequestObject, ViolationList};
//! use reqbind_resolver::ConstraintValidator;
//!
//! let require_name = |object: &dyn RequestObject| {
//!     let mut violations = ViolationList::new();
//!     if object.validation_target().get("name").is_none() {
//!         violations.add("name", "This value should not be blank.");
//!     }
//!     violations
//! };
//!
//! fn assert_validator(_: &impl ConstraintValidator) {}
//! assert_validator(&require_name);
//! ```

use reqbind_core::{RequestObject, ViolationList};

/// Validates a populated request object.
pub trait ConstraintValidator: Send + Sync {
    /// Returns every violation found, in a stable order. Empty means valid.
    fn validate(&self, object: &dyn RequestObject) -> ViolationList;
}

impl<F> ConstraintValidator for F
where
    F: Fn(&dyn RequestObject) -> ViolationList + Send + Sync,
{
    fn validate(&self, object: &dyn RequestObject) -> ViolationList {
        self(object)
    }
}

/// Validator that reports the constraints each type declares through
/// [`RequestObject::check_constraints`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclaredConstraints;

impl ConstraintValidator for DeclaredConstraints {
    fn validate(&self, object: &dyn RequestObject) -> ViolationList {
        object.check_constraints()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqbind_core::RequestData;

    #[derive(Debug, Default)]
    struct NewsletterRequest {
        data: RequestData,
        email: Option<String>,
    }

    impl RequestObject for NewsletterRequest {
        fn request_data(&self) -> &RequestData {
            &self.data
        }

        fn request_data_mut(&mut self) -> &mut RequestData {
            &mut self.data
        }

        fn check_constraints(&self) -> ViolationList {
            let mut violations = ViolationList::new();
            if self.email.is_none() {
                violations.add("email", "This value should not be blank.");
            }
            violations
        }
    }

    #[test]
    fn test_declared_constraints() {
        let invalid = NewsletterRequest::default();
        let violations = DeclaredConstraints.validate(&invalid);
        assert_eq!(violations.len(), 1);

        let valid = NewsletterRequest {
            email: Some("a@b.c".to_string()),
            ..NewsletterRequest::default()
        };
        assert!(DeclaredConstraints.validate(&valid).is_empty());
    }

    #[test]
    fn test_closure_validator() {
        let reject_all = |_: &dyn RequestObject| {
            let mut violations = ViolationList::new();
            violations.add("", "rejected");
            violations
        };

        let violations = reject_all.validate(&NewsletterRequest::default());
        assert_eq!(violations.to_string(), ": rejected");
    }
}
