//! Column layout of the floor locations export.

use csv::StringRecord;

use floormap_model::LocationRow;

use crate::error::{IngestError, Result};

pub const COLUMN_LIBRARY: usize = 0;
pub const COLUMN_COLLECTION: usize = 1;
pub const COLUMN_CALL_NUMBER_RANGE: usize = 2;
// Columns 3 and 4 are present in the export but unused.
pub const COLUMN_FLOOR_KEY: usize = 5;
pub const COLUMN_TEXT: usize = 6;

/// Maps a record onto a [`LocationRow`].
///
/// Library and collection must be present but may be blank; a blank
/// collection is filed like `(none)`. A missing range column means the row
/// covers everything; missing or empty floor key and text become `None`.
pub fn location_row(record: &StringRecord, line: u64) -> Result<LocationRow> {
    Ok(LocationRow {
        library: required(record, COLUMN_LIBRARY, "library", line)?,
        collection: required(record, COLUMN_COLLECTION, "collection", line)?,
        call_number_range: record
            .get(COLUMN_CALL_NUMBER_RANGE)
            .unwrap_or_default()
            .to_string(),
        floor_key: optional(record, COLUMN_FLOOR_KEY),
        text: optional(record, COLUMN_TEXT),
    })
}

fn required(
    record: &StringRecord,
    index: usize,
    column: &'static str,
    line: u64,
) -> Result<String> {
    record
        .get(index)
        .map(str::to_string)
        .ok_or(IngestError::MissingColumn { line, column })
}

fn optional(record: &StringRecord, index: usize) -> Option<String> {
    record
        .get(index)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
