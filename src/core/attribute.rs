//! Structured parameters carried by a violation.
//!
//! Attributes let the layer that renders a message fill in placeholders
//! such as `min` and `max` without parsing the details text.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Ordered map of attribute name to value.
///
/// A `BTreeMap` keeps rendering deterministic, which matters for the
/// diagnostic text of [`ValidationError`](crate::ValidationError).
pub type Attributes = BTreeMap<String, AttributeValue>;

/// A small tagged value stored in [`Attributes`].
///
/// Floats compare and hash by bit pattern, so `NaN` equals itself and
/// `0.0` differs from `-0.0`. This keeps equality reflexive, which lets
/// violations live in hash sets and serve as map keys.
///
/// # Example
///
/// ```rust
/// use verdict::core::AttributeValue;
///
/// assert_eq!(AttributeValue::from(3), AttributeValue::Int(3));
/// assert_eq!(AttributeValue::from("x"), AttributeValue::Str("x".to_string()));
/// assert_eq!(AttributeValue::from(None::<i32>), AttributeValue::Null);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl AttributeValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl PartialEq for AttributeValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Str(a), Self::Str(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for AttributeValue {}

impl Hash for AttributeValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Null => {}
            Self::Bool(b) => b.hash(state),
            Self::Int(i) => i.hash(state),
            Self::Float(x) => x.to_bits().hash(state),
            Self::Str(s) => s.hash(state),
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

macro_rules! int_attribute {
    ($($t:ty),*) => {
        $(
            impl From<$t> for AttributeValue {
                fn from(value: $t) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

int_attribute!(i8, i16, i32, i64, u8, u16, u32);

// Wider unsigned values that do not fit an i64 fall back to their text form.
macro_rules! wide_int_attribute {
    ($($t:ty),*) => {
        $(
            impl From<$t> for AttributeValue {
                fn from(value: $t) -> Self {
                    i64::try_from(value)
                        .map(Self::Int)
                        .unwrap_or_else(|_| Self::Str(value.to_string()))
                }
            }
        )*
    };
}

wide_int_attribute!(u64, usize, isize, i128, u128);

impl From<f32> for AttributeValue {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Render attributes as `{k1=v1, k2=v2}`.
pub(crate) fn render(attributes: &Attributes) -> String {
    let entries: Vec<String> = attributes
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect();
    format!("{{{}}}", entries.join(", "))
}
