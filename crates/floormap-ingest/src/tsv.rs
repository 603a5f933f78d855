//! TSV reading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::debug;

use floormap_model::{Catalog, CatalogBuilder};

use crate::error::{IngestError, Result};
use crate::row::location_row;

/// Field delimiter of the spreadsheet export.
pub const TSV_DELIMITER: u8 = b'\t';

fn reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder
        .delimiter(TSV_DELIMITER)
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .trim(Trim::None);
    builder
}

/// Reads a floor locations export from disk into a [`Catalog`].
///
/// # Errors
///
/// Fails on the first unreadable file, malformed record, missing required
/// column or unparseable call number range. No partial catalog is returned.
pub fn read_catalog(path: &Path) -> Result<Catalog> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    read_catalog_from_reader(file)
}

/// Reads a floor locations export from any reader.
///
/// The first line is a header and is skipped, as are blank lines.
pub fn read_catalog_from_reader<R: Read>(reader: R) -> Result<Catalog> {
    let mut reader = reader_builder().from_reader(reader);
    let mut builder = CatalogBuilder::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let line = record.position().map_or(0, csv::Position::line);
        let row = location_row(&record, line)?;
        let entry = builder
            .add_row(&row)
            .map_err(|source| IngestError::Entry { line, source })?;
        debug!(
            line,
            library = entry.library(),
            collection = entry.collection().unwrap_or_default(),
            kind = entry.type_tag(),
            "location row"
        );
    }
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Library\tCollection\tRange\tNotes\tOwner\tFloor\tText\n";

    fn read(body: &str) -> Result<Catalog> {
        read_catalog_from_reader(format!("{HEADER}{body}").as_bytes())
    }

    #[test]
    fn skips_header_and_blank_lines() {
        let catalog = read("\nhlg\tmain\tA1-A9\t\t\t1\tFirst\n   \n\t\t\n").unwrap();
        assert_eq!(catalog.stats().entries, 1);
        assert!(catalog.library("LIBRARY").is_none());
    }

    #[test]
    fn quotes_are_literal() {
        let catalog = read("hlg\tmain\t\t\t\t1\t\"Quoted\" text\n").unwrap();
        let entries = catalog.entries("HLG", "MAIN").unwrap();
        assert_eq!(entries[0].info().text(), Some("\"Quoted\" text"));
    }

    #[test]
    fn handles_crlf_line_endings() {
        let catalog = read("hlg\tmain\t813\t\t\t2\tStacks\r\n").unwrap();
        let entries = catalog.entries("HLG", "MAIN").unwrap();
        assert_eq!(entries[0].info().text(), Some("Stacks"));
    }

    #[test]
    fn reports_line_of_bad_range() {
        let err = read("hlg\tmain\tA1\t\t\t1\tok\nhlg\tmain\t#1-#2\t\t\t1\tbad\n").unwrap_err();
        match err {
            IngestError::Entry { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn blank_collection_is_filed_without_collection() {
        let catalog = read("ugl\t\tA1-A9\t\t\t1\tFirst\n").unwrap();
        assert_eq!(catalog.stats().entries, 1);
        let entries = catalog.entries("UGL", "").unwrap();
        assert_eq!(entries[0].collection(), None);
        assert!(entries[0].contains("A5"));
    }

    #[test]
    fn header_only_is_empty() {
        assert!(read("").unwrap().is_empty());
    }
}
