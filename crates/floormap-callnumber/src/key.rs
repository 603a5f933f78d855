use std::cmp::Ordering;
use std::fmt;

/// A normalized call number of either notation.
///
/// Serializes natively: LC keys as JSON strings, Dewey keys as JSON numbers.
/// Keys of different notations are unordered.
#[derive(Debug, Clone, PartialEq)]
pub enum CallNumberKey {
    Text(String),
    Number(f64),
}

impl PartialOrd for CallNumberKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Text(left), Self::Text(right)) => left.partial_cmp(right),
            (Self::Number(left), Self::Number(right)) => left.partial_cmp(right),
            _ => None,
        }
    }
}

impl serde::Serialize for CallNumberKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(value) => serializer.serialize_str(value),
            Self::Number(value) => serializer.serialize_f64(*value),
        }
    }
}

impl fmt::Display for CallNumberKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Number(value) => write!(f, "{value}"),
        }
    }
}

impl From<String> for CallNumberKey {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CallNumberKey {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}
