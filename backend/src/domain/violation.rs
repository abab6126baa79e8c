//! Structured field-level validation failures.
//!
//! A [`FieldViolation`] names the offending location, a human-readable
//! message and a coarse category. Serialised as `{loc, msg, type}`.

use serde::{Deserialize, Serialize};

/// Category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// A required field is absent.
    Missing,
    /// The value has the wrong JSON type or cannot be parsed.
    TypeMismatch,
    /// The value parsed but breaks a length or range rule.
    ConstraintViolation,
}

/// One field-level validation failure.
///
/// # Examples
/// ```
/// use mobility_api::domain::{FieldViolation, ViolationKind};
///
/// let violation = FieldViolation::missing(["firstname"]).with_prefix("body");
/// assert_eq!(violation.loc(), ["body", "firstname"]);
/// assert_eq!(violation.kind(), ViolationKind::Missing);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Path to the offending value, outermost segment first.
    loc: Vec<String>,
    /// Human-readable description.
    msg: String,
    /// Failure category.
    #[serde(rename = "type")]
    kind: ViolationKind,
}

impl FieldViolation {
    /// Build a violation from its parts.
    pub fn new<L, S>(loc: L, msg: impl Into<String>, kind: ViolationKind) -> Self
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            loc: loc.into_iter().map(Into::into).collect(),
            msg: msg.into(),
            kind,
        }
    }

    /// A required field was not supplied.
    pub fn missing<L, S>(loc: L) -> Self
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(loc, "Field required", ViolationKind::Missing)
    }

    /// The value has the wrong type or could not be parsed.
    pub fn type_mismatch<L, S>(loc: L, msg: impl Into<String>) -> Self
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(loc, msg, ViolationKind::TypeMismatch)
    }

    /// The value breaks a length or range constraint.
    pub fn constraint<L, S>(loc: L, msg: impl Into<String>) -> Self
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(loc, msg, ViolationKind::ConstraintViolation)
    }

    /// Prepend a location segment, e.g. `body` or `path`.
    #[must_use]
    pub fn with_prefix(mut self, segment: impl Into<String>) -> Self {
        self.loc.insert(0, segment.into());
        self
    }

    /// Location of the offending value.
    pub fn loc(&self) -> &[String] {
        &self.loc
    }

    /// Human-readable message.
    pub fn msg(&self) -> &str {
        &self.msg
    }

    /// Failure category.
    pub fn kind(&self) -> ViolationKind {
        self.kind
    }
}
