//! Dewey Decimal call numbers.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{CallNumberError, Result};
use crate::scheme::{CallNumberKind, CallNumberScheme};

/// Digits, optionally followed by a decimal point and more digits.
static DEWEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(\.[0-9]+)?$").expect("Invalid Dewey call number regex"));

/// Appended to the fractional part of a stop key.
pub const STOP_FRACTION_SUFFIX: &str = "9999";

/// Normalizes Dewey numbers into `f64` keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeweyScheme;

impl CallNumberScheme for DeweyScheme {
    type Key = f64;

    const KIND: CallNumberKind = CallNumberKind::Dewey;

    fn parse_token(&self, token: &str) -> Result<f64> {
        let trimmed = token.trim();
        if !DEWEY_PATTERN.is_match(trimmed) {
            return Err(CallNumberError::invalid(Self::KIND, token));
        }
        trimmed
            .parse::<f64>()
            .map_err(|_| CallNumberError::invalid(Self::KIND, token))
    }

    /// `"813"` ends at `813.9999`, `"813.5"` at `813.59999`.
    fn end_key(&self, token: &str) -> Result<f64> {
        let mut bound = self.parse_token(token)?.to_string();
        if !bound.contains('.') {
            bound.push('.');
        }
        bound.push_str(STOP_FRACTION_SUFFIX);
        bound
            .parse::<f64>()
            .map_err(|_| CallNumberError::invalid(Self::KIND, token))
    }
}
