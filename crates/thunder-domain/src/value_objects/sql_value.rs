//! SQL Value Object
//!
//! Dialect-neutral representation of the values bound to command parameters
//! and returned from scalar queries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value Object: SQL parameter or scalar
///
/// ## Example
///
/// ```rust
/// use thunder_domain::SqlValue;
///
/// let params: Vec<SqlValue> = vec!["Ferrari".into(), 2024_i64.into(), SqlValue::Null];
/// assert_eq!(params[1].as_i64(), Some(2024));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum SqlValue {
    /// SQL NULL
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value (all integer widths widen to 64 bits)
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Text value
    Text(String),
    /// Binary value
    Bytes(Vec<u8>),
}

impl SqlValue {
    /// Whether the value is SQL NULL
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Interpret the value as an integer.
    ///
    /// Drivers report generated identities with different types (SQL Server
    /// returns a decimal from `SCOPE_IDENTITY()`), so floats with no fractional
    /// part and numeric text are accepted too. Values outside the `i64` range
    /// are rejected rather than clamped.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            Self::Float(value) => whole_f64_to_i64(*value),
            Self::Text(text) => {
                let trimmed = text.trim();
                trimmed
                    .parse::<i64>()
                    .ok()
                    .or_else(|| trimmed.parse::<f64>().ok().and_then(whole_f64_to_i64))
            }
            _ => None,
        }
    }

    /// Short name of the variant, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Bytes(_) => "bytes",
        }
    }
}

// 2^63 is exactly representable, so [-2^63, 2^63) is the convertible range
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

#[allow(clippy::cast_possible_truncation)]
fn whole_f64_to_i64(value: f64) -> Option<i64> {
    (value.fract() == 0.0 && (-I64_BOUND..I64_BOUND).contains(&value)).then(|| value as i64)
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "NULL"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "'{}'", value.replace('\'', "''")),
            Self::Bytes(bytes) => write!(f, "<{} bytes>", bytes.len()),
        }
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
