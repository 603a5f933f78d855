//! The normalization contract shared by every call number notation.

use std::fmt;

use serde::Serialize;

use crate::error::Result;

/// Notation a call number range was parsed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CallNumberKind {
    /// Library of Congress classification.
    #[serde(rename = "LC")]
    Lc,
    /// Dewey Decimal classification.
    Dewey,
}

impl CallNumberKind {
    /// Returns the tag written to the `type` field of serialized entries.
    pub fn as_str(self) -> &'static str {
        match self {
            CallNumberKind::Lc => "LC",
            CallNumberKind::Dewey => "Dewey",
        }
    }
}

impl fmt::Display for CallNumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A call number notation that maps tokens onto orderable keys.
///
/// `start_key(a)` and `end_key(b)` bracket a half-open interval: a call number
/// whose normalized key `k` satisfies `start_key(a) <= k < end_key(b)` is
/// shelved within `a - b`.
pub trait CallNumberScheme {
    /// Orderable key produced by this scheme.
    type Key: PartialOrd + Clone;

    /// Tag identifying the scheme.
    const KIND: CallNumberKind;

    /// Normalizes a single token.
    ///
    /// # Errors
    ///
    /// Returns [`CallNumberError::InvalidFormat`](crate::CallNumberError::InvalidFormat)
    /// when the token does not belong to this scheme.
    fn parse_token(&self, token: &str) -> Result<Self::Key>;

    /// Key for the first call number of a range.
    fn start_key(&self, token: &str) -> Result<Self::Key> {
        self.parse_token(token)
    }

    /// Exclusive upper bound covering every call number that starts with `token`.
    fn end_key(&self, token: &str) -> Result<Self::Key>;
}
