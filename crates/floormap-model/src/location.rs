//! Floor location entries built from spreadsheet rows.

use serde::{Serialize, Serializer};
use tracing::warn;

use floormap_callnumber::{CallNumberKey, CallNumberRange, Result};

/// Collection column literal meaning "no collection".
pub const NO_COLLECTION: &str = "(none)";

/// `type` tag written for catch-all entries.
pub const EVERYTHING_TYPE: &str = "Everything";

/// Raw column values of one spreadsheet row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationRow {
    pub library: String,
    pub collection: String,
    pub call_number_range: String,
    pub floor_key: Option<String>,
    pub text: Option<String>,
}

impl LocationRow {
    /// Trimmed, upper-cased library code.
    pub fn library_code(&self) -> String {
        self.library.trim().to_uppercase()
    }

    /// Trimmed, upper-cased collection code used as the catalog key.
    /// [`NO_COLLECTION`] maps to the empty code.
    pub fn collection_code(&self) -> String {
        let trimmed = self.collection.trim();
        if trimmed.eq_ignore_ascii_case(NO_COLLECTION) {
            String::new()
        } else {
            trimmed.to_uppercase()
        }
    }

    /// A blank range column marks a catch-all row.
    pub fn covers_all(&self) -> bool {
        self.call_number_range.trim().is_empty()
    }
}

/// Fields shared by every entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationInfo {
    library: String,
    collection: Option<String>,
    floor_key: Option<String>,
    text: Option<String>,
}

impl LocationInfo {
    fn from_row(row: &LocationRow) -> Self {
        let library = row.library_code();
        let code = row.collection_code();
        let collection = if is_collection_code(&code) {
            Some(code)
        } else {
            if !code.is_empty() {
                warn!(
                    library = %library,
                    collection = %code,
                    "collection code is not alphabetic, recording no collection"
                );
            }
            None
        };
        Self {
            library,
            collection,
            floor_key: row.floor_key.clone(),
            text: row.text.clone(),
        }
    }

    pub fn library(&self) -> &str {
        &self.library
    }

    pub fn collection(&self) -> Option<&str> {
        self.collection.as_deref()
    }

    pub fn floor_key(&self) -> Option<&str> {
        self.floor_key.as_deref()
    }

    /// Display text for the location.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// Collections are runs of ASCII letters; anything else is recorded as no collection.
fn is_collection_code(code: &str) -> bool {
    !code.is_empty() && code.chars().all(|ch| ch.is_ascii_uppercase())
}

/// An entry covering one call number range.
#[derive(Debug, Clone, PartialEq)]
pub struct RangedLocation {
    info: LocationInfo,
    range: CallNumberRange,
}

impl RangedLocation {
    pub fn info(&self) -> &LocationInfo {
        &self.info
    }

    pub fn range(&self) -> &CallNumberRange {
        &self.range
    }
}

/// An entry for a sublibrary not organized by call number.
#[derive(Debug, Clone, PartialEq)]
pub struct CoversAllLocation {
    info: LocationInfo,
}

impl CoversAllLocation {
    pub fn info(&self) -> &LocationInfo {
        &self.info
    }
}

/// One row of the floor location catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationEntry {
    Ranged(RangedLocation),
    CoversAll(CoversAllLocation),
}

impl LocationEntry {
    /// Builds an entry from raw column values.
    ///
    /// # Errors
    ///
    /// Returns the range parse error when the range column is not blank and
    /// cannot be parsed.
    pub fn from_row(row: &LocationRow) -> Result<Self> {
        let info = LocationInfo::from_row(row);
        if row.covers_all() {
            return Ok(Self::CoversAll(CoversAllLocation { info }));
        }
        let range = CallNumberRange::parse(&row.call_number_range)?;
        Ok(Self::Ranged(RangedLocation { info, range }))
    }

    pub fn info(&self) -> &LocationInfo {
        match self {
            Self::Ranged(location) => &location.info,
            Self::CoversAll(location) => &location.info,
        }
    }

    pub fn library(&self) -> &str {
        self.info().library()
    }

    pub fn collection(&self) -> Option<&str> {
        self.info().collection()
    }

    pub fn range(&self) -> Option<&CallNumberRange> {
        match self {
            Self::Ranged(location) => Some(&location.range),
            Self::CoversAll(_) => None,
        }
    }

    pub fn covers_all(&self) -> bool {
        matches!(self, Self::CoversAll(_))
    }

    /// `"LC"`, `"Dewey"` or `"Everything"`.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Self::Ranged(location) => location.range.kind().as_str(),
            Self::CoversAll(_) => EVERYTHING_TYPE,
        }
    }

    /// Tests whether `call_number` is shelved at this location.
    /// Catch-all entries contain every input, including malformed ones.
    pub fn contains(&self, call_number: &str) -> bool {
        match self {
            Self::Ranged(location) => location.range.contains(call_number),
            Self::CoversAll(_) => true,
        }
    }

    fn record(&self) -> EntryRecord<'_> {
        let info = self.info();
        let range = self.range();
        EntryRecord {
            library: &info.library,
            collection: info.collection(),
            start: range.map(CallNumberRange::start),
            stop: range.map(CallNumberRange::stop),
            floor_key: info.floor_key(),
            text: info.text(),
            kind: self.type_tag(),
        }
    }
}

/// Wire shape of an entry. Catch-all entries omit `start` and `stop`.
#[derive(Serialize)]
struct EntryRecord<'a> {
    library: &'a str,
    collection: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start: Option<CallNumberKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stop: Option<CallNumberKey>,
    floor_key: Option<&'a str>,
    text: Option<&'a str>,
    #[serde(rename = "type")]
    kind: &'static str,
}

impl Serialize for LocationEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.record().serialize(serializer)
    }
}
