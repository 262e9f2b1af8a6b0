//! Constraint violations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single failed constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Path of the offending property, e.g. `email` or `address.zip`.
    pub property_path: String,
    /// Human-readable message.
    pub message: String,
    /// Optional machine-readable constraint code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl Violation {
    /// Creates a violation for `property_path`.
    #[must_use]
    pub fn new(property_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            property_path: property_path.into(),
            message: message.into(),
            code: None,
        }
    }

    /// Attaches a constraint code.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property_path, self.message)
    }
}

/// Ordered list of violations. An empty list means the object is valid.
///
/// # Example
///
/// ```rust
/// use reqbind_core::ViolationList;
///
/// let mut violations = ViolationList::new();
/// assert!(violations.is_empty());
///
/// violations.add("email", "This value should not be blank.");
/// violations.add("age", "This value should be 18 or more.");
///
/// assert_eq!(violations.len(), 2);
/// assert_eq!(violations.to_string(), "email: This value should not be blank.\nage: This value should be 18 or more.");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViolationList(Vec<Violation>);

impl ViolationList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a violation.
    pub fn push(&mut self, violation: Violation) {
        self.0.push(violation);
    }

    /// Appends a violation built from a path and message.
    pub fn add(&mut self, property_path: impl Into<String>, message: impl Into<String>) {
        self.push(Violation::new(property_path, message));
    }

    /// Returns the number of violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no violations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the violations in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.0.iter()
    }

    /// Returns the violations recorded for `property_path`.
    pub fn for_property<'a>(&'a self, property_path: &'a str) -> impl Iterator<Item = &'a Violation> {
        self.0
            .iter()
            .filter(move |v| v.property_path == property_path)
    }
}

impl fmt::Display for ViolationList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl From<Vec<Violation>> for ViolationList {
    fn from(violations: Vec<Violation>) -> Self {
        Self(violations)
    }
}

impl FromIterator<Violation> for ViolationList {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Violation> for ViolationList {
    fn extend<I: IntoIterator<Item = Violation>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for ViolationList {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ViolationList {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_is_preserved() {
        let list: ViolationList = vec![
            Violation::new("zeta", "first"),
            Violation::new("alpha", "second"),
        ]
        .into();

        let paths: Vec<_> = list.iter().map(|v| v.property_path.as_str()).collect();
        assert_eq!(paths, ["zeta", "alpha"]);
    }

    #[test]
    fn test_for_property() {
        let mut list = ViolationList::new();
        list.add("email", "blank");
        list.add("name", "too long");
        list.add("email", "invalid");

        let messages: Vec<_> = list.for_property("email").map(|v| v.message.as_str()).collect();
        assert_eq!(messages, ["blank", "invalid"]);
    }

    #[test]
    fn test_serialization() {
        let mut list = ViolationList::new();
        list.push(Violation::new("email", "invalid").with_code("EMAIL"));
        list.add("name", "blank");

        assert_eq!(
            serde_json::to_value(&list).unwrap(),
            json!([
                {"property_path": "email", "message": "invalid", "code": "EMAIL"},
                {"property_path": "name", "message": "blank"}
            ])
        );
    }

    #[test]
    fn test_extend_and_collect() {
        let mut list: ViolationList = std::iter::once(Violation::new("a", "x")).collect();
        list.extend([Violation::new("b", "y")]);
        assert_eq!(list.len(), 2);
    }
}
