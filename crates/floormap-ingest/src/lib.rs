//! Floor location ingestion.
//!
//! Loads the tab-separated export of the floor locations spreadsheet into a
//! [`floormap_model::Catalog`].
//!
//! # Input Layout
//!
//! One header line, then rows of
//! `library, collection, call number range, (unused), (unused), floor key, text`.
//! Blank lines are skipped and `(none)` in the collection column means no collection.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use floormap_ingest::read_catalog;
//!
//! let catalog = read_catalog(Path::new("floor_locations.tsv"))?;
//! println!("{} libraries", catalog.stats().libraries);
//! ```

mod error;
mod row;
mod tsv;

// === Error Types ===
pub use error::{IngestError, Result};

// === Column Layout ===
pub use row::{
    COLUMN_CALL_NUMBER_RANGE, COLUMN_COLLECTION, COLUMN_FLOOR_KEY, COLUMN_LIBRARY, COLUMN_TEXT,
    location_row,
};

// === TSV Reading ===
pub use tsv::{TSV_DELIMITER, read_catalog, read_catalog_from_reader};
