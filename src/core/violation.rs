//! The violation value produced by a failed rule.

use super::attribute::{self, Attributes};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable record of one validation failure.
///
/// A violation is created at the moment a rule decides a value is invalid
/// and is never mutated afterwards. Equality compares all four fields,
/// including the attribute map by value, and hashing agrees with it, so
/// violations can be collected in a `HashSet` or used as map keys.
///
/// # Example
///
/// ```rust
/// use verdict::core::{Attributes, Violation};
///
/// let mut attributes = Attributes::new();
/// attributes.insert("min".to_string(), 3.into());
///
/// let violation = Violation::with_attributes(
///     "user.name",
///     "value.too.short",
///     "The value is too short.",
///     Some(attributes),
/// );
///
/// assert_eq!(violation.field_path(), "user.name");
/// assert_eq!(violation.message(), "value.too.short");
/// assert!(violation.attributes().is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    field_path: String,
    message: String,
    details: String,
    attributes: Option<Attributes>,
}

impl Violation {
    /// Create a violation without attributes.
    pub fn of(
        field_path: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self::with_attributes(field_path, message, details, None)
    }

    /// Create a violation carrying structured parameters.
    pub fn with_attributes(
        field_path: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
        attributes: Option<Attributes>,
    ) -> Self {
        Self {
            field_path: field_path.into(),
            message: message.into(),
            details: details.into(),
            attributes,
        }
    }

    /// Dotted path of the input location that failed, e.g. `user.account.email`.
    pub fn field_path(&self) -> &str {
        &self.field_path
    }

    /// Machine-readable message key.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Default explanation of the message.
    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        self.attributes.as_ref()
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{field='{}', message='{}', details='{}', attributes=",
            self.field_path, self.message, self.details
        )?;
        match &self.attributes {
            Some(attributes) => f.write_str(&attribute::render(attributes))?,
            None => f.write_str("null")?,
        }
        f.write_str("}")
    }
}
