//! Library of Congress call numbers.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{CallNumberError, Result};
use crate::scheme::{CallNumberKind, CallNumberScheme};

/// Class letters, an optional class number, then cutters and dates.
/// Applied to the compacted, lower-cased token. The remainder is limited to
/// ASCII below [`STOP_SENTINEL`].
static LC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z]+)([0-9]+)?([\x00-\x7d]*)$").expect("Invalid LC call number regex")
});

/// Width the class number is zero-padded to.
pub const CLASS_NUMBER_WIDTH: usize = 5;

/// Appended to stop keys. Sorts after every character a normalized key can contain.
pub const STOP_SENTINEL: char = '~';

/// Normalizes LC call numbers into padded string keys.
///
/// The token is compacted first, so `"QA76.73 C15"` becomes `"qa7673c15"` and
/// normalizes to `"qa07673c15"`: letters, the class number padded to
/// [`CLASS_NUMBER_WIDTH`] digits, then the remainder.
#[derive(Debug, Clone, Copy, Default)]
pub struct LcScheme;

impl CallNumberScheme for LcScheme {
    type Key = String;

    const KIND: CallNumberKind = CallNumberKind::Lc;

    fn parse_token(&self, token: &str) -> Result<String> {
        let compact = compact(token);
        let Some(captures) = LC_PATTERN.captures(&compact) else {
            return Err(CallNumberError::invalid(Self::KIND, token));
        };
        let letters = &captures[1];
        let digits = captures.get(2).map_or("", |m| m.as_str());
        let remainder = captures.get(3).map_or("", |m| m.as_str());

        if digits.is_empty() && remainder.is_empty() {
            return Ok(letters.to_string());
        }
        Ok(format!("{letters}{}{remainder}", pad_class_number(digits)))
    }

    fn end_key(&self, token: &str) -> Result<String> {
        let mut key = self.parse_token(token)?;
        key.push(STOP_SENTINEL);
        Ok(key)
    }
}

/// Lower-cases and drops whitespace and periods.
fn compact(token: &str) -> String {
    token
        .to_lowercase()
        .chars()
        .filter(|ch| !ch.is_whitespace() && *ch != '.')
        .collect()
}

/// Pads by numeric value: `"0100"` and `"100"` both become `"00100"`.
fn pad_class_number(digits: &str) -> String {
    let significant = digits.trim_start_matches('0');
    format!("{significant:0>width$}", width = CLASS_NUMBER_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(token: &str) -> String {
        LcScheme.parse_token(token).expect("valid LC token")
    }

    #[test]
    fn pads_class_number() {
        assert_eq!(key("QA76.73 C15"), "qa07673c15");
        assert_eq!(key("A100"), "a00100");
        assert_eq!(key("PS3545.I345"), "ps03545i345");
    }

    #[test]
    fn letters_only() {
        assert_eq!(key("QA"), "qa");
        assert_eq!(key("  q a  "), "qa");
        assert_eq!(key("Q."), "q");
    }

    #[test]
    fn missing_class_number_defaults_to_zero() {
        assert_eq!(key("A-1"), "a00000-1");
        assert_eq!(key("A.B12"), "ab00012");
    }

    #[test]
    fn wide_class_numbers_are_kept_whole() {
        assert_eq!(key("A123456"), "a123456");
        assert_eq!(key("A000123"), "a00123");
    }

    #[test]
    fn rejects_tokens_without_leading_letters() {
        assert!(matches!(
            LcScheme.parse_token("510.12"),
            Err(CallNumberError::InvalidFormat {
                kind: CallNumberKind::Lc,
                ..
            })
        ));
        assert!(LcScheme.parse_token("").is_err());
        assert!(LcScheme.parse_token("-A1").is_err());
    }

    #[test]
    fn rejects_characters_outside_the_key_alphabet() {
        for token in ["A1é", "A1~", "QA76 Ω", "Ä1"] {
            assert!(
                matches!(
                    LcScheme.parse_token(token),
                    Err(CallNumberError::InvalidFormat {
                        kind: CallNumberKind::Lc,
                        ..
                    })
                ),
                "{token} should be rejected"
            );
        }
        assert!(key("A1}") < LcScheme.end_key("A1").unwrap());
    }

    #[test]
    fn end_key_appends_sentinel() {
        assert_eq!(LcScheme.end_key("A9").unwrap(), "a00009~");
        assert!(key("A9zz") < LcScheme.end_key("A9").unwrap());
        assert!(key("A9 Z99 1999") < LcScheme.end_key("A9").unwrap());
        assert!(key("A10") > LcScheme.end_key("A9").unwrap());
    }
}
