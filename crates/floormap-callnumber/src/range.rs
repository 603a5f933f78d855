//! Call number range parsing.

use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::dewey::DeweyScheme;
use crate::error::{CallNumberError, Result};
use crate::key::CallNumberKey;
use crate::lc::LcScheme;
use crate::scheme::{CallNumberKind, CallNumberScheme};

/// A dash with optional surrounding whitespace.
static RANGE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*-\s*").expect("Invalid range separator regex"));

/// Half-open key interval `[start, stop)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds<K> {
    start: K,
    stop: K,
}

impl<K: PartialOrd> Bounds<K> {
    pub fn start(&self) -> &K {
        &self.start
    }

    pub fn stop(&self) -> &K {
        &self.stop
    }

    /// Returns true if `start <= key < stop`.
    pub fn contains(&self, key: &K) -> bool {
        self.start <= *key && *key < self.stop
    }

    fn is_inverted(&self) -> bool {
        self.start.partial_cmp(&self.stop) != Some(Ordering::Less)
    }
}

/// A parsed call number range. Both bounds always share one notation.
#[derive(Debug, Clone, PartialEq)]
pub enum CallNumberRange {
    Lc(Bounds<String>),
    Dewey(Bounds<f64>),
}

impl CallNumberRange {
    /// Parses free text such as `"A100 - A200"` or a single token such as `"813"`.
    ///
    /// The start token decides the notation: LC is tried first, Dewey second.
    /// The stop token is then normalized with the same scheme; a single token is
    /// both start and stop, so the range covers everything filed under it.
    ///
    /// # Errors
    ///
    /// - [`CallNumberError::UnrecognizedCallNumberFormat`] if neither scheme accepts the start.
    /// - [`CallNumberError::InvalidFormat`] if the chosen scheme rejects the stop.
    /// - [`CallNumberError::InvertedRange`] if the stop sorts before the start.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        let (raw_start, raw_stop) = split_range(text);

        let range = match LcScheme.start_key(raw_start) {
            Ok(start) => Self::Lc(Bounds {
                start,
                stop: LcScheme.end_key(raw_stop)?,
            }),
            Err(CallNumberError::InvalidFormat { .. }) => {
                let start = DeweyScheme.start_key(raw_start).map_err(|source| {
                    CallNumberError::UnrecognizedCallNumberFormat {
                        range: text.to_string(),
                        source: Box::new(source),
                    }
                })?;
                Self::Dewey(Bounds {
                    start,
                    stop: DeweyScheme.end_key(raw_stop)?,
                })
            }
            Err(other) => return Err(other),
        };

        if range.is_inverted() {
            return Err(CallNumberError::InvertedRange {
                range: text.to_string(),
            });
        }
        Ok(range)
    }

    pub fn kind(&self) -> CallNumberKind {
        match self {
            Self::Lc(_) => CallNumberKind::Lc,
            Self::Dewey(_) => CallNumberKind::Dewey,
        }
    }

    pub fn start(&self) -> CallNumberKey {
        match self {
            Self::Lc(bounds) => CallNumberKey::Text(bounds.start.clone()),
            Self::Dewey(bounds) => CallNumberKey::Number(bounds.start),
        }
    }

    pub fn stop(&self) -> CallNumberKey {
        match self {
            Self::Lc(bounds) => CallNumberKey::Text(bounds.stop.clone()),
            Self::Dewey(bounds) => CallNumberKey::Number(bounds.stop),
        }
    }

    /// Tests whether `call_number` is shelved within this range.
    ///
    /// The candidate is normalized with this range's own notation; a candidate
    /// that notation rejects is never contained.
    pub fn contains(&self, call_number: &str) -> bool {
        match self {
            Self::Lc(bounds) => LcScheme
                .parse_token(call_number)
                .is_ok_and(|key| bounds.contains(&key)),
            Self::Dewey(bounds) => DeweyScheme
                .parse_token(call_number)
                .is_ok_and(|key| bounds.contains(&key)),
        }
    }

    fn is_inverted(&self) -> bool {
        match self {
            Self::Lc(bounds) => bounds.is_inverted(),
            Self::Dewey(bounds) => bounds.is_inverted(),
        }
    }
}

impl fmt::Display for CallNumberRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start(), self.stop())
    }
}

/// Splits `"start - stop"`. A missing or empty stop repeats the start.
fn split_range(text: &str) -> (&str, &str) {
    let mut pieces = RANGE_SEPARATOR.split(text);
    let start = pieces.next().unwrap_or_default();
    let stop = pieces
        .next()
        .filter(|piece| !piece.is_empty())
        .unwrap_or(start);
    let ignored = pieces.filter(|piece| !piece.is_empty()).count();
    if ignored > 0 {
        warn!(range = text, ignored, "ignoring extra call number range pieces");
    }
    (start, stop)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lc_range() {
        let range = CallNumberRange::parse("A100 - A200").unwrap();
        assert_eq!(range.kind(), CallNumberKind::Lc);
        assert_eq!(range.start(), CallNumberKey::Text("a00100".to_string()));
        assert_eq!(range.stop(), CallNumberKey::Text("a00200~".to_string()));
    }

    #[test]
    fn single_token_covers_its_stem() {
        let range = CallNumberRange::parse("QA76").unwrap();
        assert_eq!(range.start(), CallNumberKey::Text("qa00076".to_string()));
        assert_eq!(range.stop(), CallNumberKey::Text("qa00076~".to_string()));
        assert!(range.contains("QA76 C15"));
        assert!(!range.contains("QA76.73 C15"));
        assert!(!range.contains("QA77"));
    }

    #[test]
    fn falls_back_to_dewey() {
        let range = CallNumberRange::parse("510.12").unwrap();
        assert_eq!(range.kind(), CallNumberKind::Dewey);
        assert_eq!(range.start(), CallNumberKey::Number(510.12));
        assert_eq!(range.stop(), CallNumberKey::Number(510.129999));
    }

    #[test]
    fn parses_dewey_range() {
        let range = CallNumberRange::parse("800-813").unwrap();
        assert_eq!(range.kind(), CallNumberKind::Dewey);
        assert!(range.contains("800"));
        assert!(range.contains("813.54"));
        assert!(!range.contains("814"));
        assert!(!range.contains("799.9"));
        assert!(!range.contains("PS3545"));
    }

    #[test]
    fn membership_is_half_open() {
        let range = CallNumberRange::parse("A100-A200").unwrap();
        assert!(range.contains("A100"));
        assert!(range.contains("A150"));
        assert!(range.contains("A200"));
        assert!(range.contains("A200 B3"));
        assert!(!range.contains("A201"));
        assert!(!range.contains("A99"));
        assert!(!range.contains("B1"));
        assert!(!range.contains("510"));
    }

    #[test]
    fn unrecognized_start_carries_dewey_error() {
        let err = CallNumberRange::parse("#12 - #20").unwrap_err();
        let CallNumberError::UnrecognizedCallNumberFormat { range, source } = err else {
            panic!("expected unrecognized format");
        };
        assert_eq!(range, "#12 - #20");
        assert_eq!(
            *source,
            CallNumberError::InvalidFormat {
                kind: CallNumberKind::Dewey,
                token: "#12".to_string(),
            }
        );
    }

    #[test]
    fn empty_range_is_unrecognized() {
        assert!(matches!(
            CallNumberRange::parse("   "),
            Err(CallNumberError::UnrecognizedCallNumberFormat { .. })
        ));
    }

    #[test]
    fn stop_must_match_start_notation() {
        assert_eq!(
            CallNumberRange::parse("A100 - 200"),
            Err(CallNumberError::InvalidFormat {
                kind: CallNumberKind::Lc,
                token: "200".to_string(),
            })
        );
        assert!(matches!(
            CallNumberRange::parse("100 - B2"),
            Err(CallNumberError::InvalidFormat {
                kind: CallNumberKind::Dewey,
                ..
            })
        ));
    }

    #[test]
    fn rejects_inverted_ranges() {
        assert_eq!(
            CallNumberRange::parse("Z999-A1"),
            Err(CallNumberError::InvertedRange {
                range: "Z999-A1".to_string(),
            })
        );
        assert!(matches!(
            CallNumberRange::parse("900 - 100"),
            Err(CallNumberError::InvertedRange { .. })
        ));
    }

    #[test]
    fn trailing_dash_repeats_start() {
        let range = CallNumberRange::parse("B1 -").unwrap();
        assert_eq!(range, CallNumberRange::parse("B1").unwrap());
    }

    #[test]
    fn extra_pieces_are_ignored() {
        let range = CallNumberRange::parse("A1 - B2 - C3").unwrap();
        assert_eq!(range, CallNumberRange::parse("A1-B2").unwrap());
    }

    #[test]
    fn displays_keys() {
        let range = CallNumberRange::parse("813").unwrap();
        assert_eq!(range.to_string(), "813 - 813.9999");
        let range = CallNumberRange::parse("A1-A9").unwrap();
        assert_eq!(range.to_string(), "a00001 - a00009~");
    }
}
