//! Library → collection → entries catalog.
//!
//! Libraries and collections keep first-seen order; entries keep row order.
//! Serializes as `{ "<LIBRARY>": { "<COLLECTION>": [entry, ...] } }`.

use serde::{Serialize, Serializer};

use floormap_callnumber::Result;

use crate::location::{LocationEntry, LocationRow};

/// Entries of one collection, in row order.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionLocations {
    code: String,
    entries: Vec<LocationEntry>,
}

impl CollectionLocations {
    /// Catalog key. Empty for rows without a collection.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn entries(&self) -> &[LocationEntry] {
        &self.entries
    }
}

/// Collections of one library, in first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryLocations {
    code: String,
    collections: Vec<CollectionLocations>,
}

impl LibraryLocations {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn collections(&self) -> &[CollectionLocations] {
        &self.collections
    }

    pub fn collection(&self, code: &str) -> Option<&CollectionLocations> {
        self.collections.iter().find(|collection| collection.code == code)
    }

    fn collection_mut(&mut self, code: &str) -> &mut CollectionLocations {
        let index = match self.collections.iter().position(|c| c.code == code) {
            Some(index) => index,
            None => {
                self.collections.push(CollectionLocations {
                    code: code.to_string(),
                    entries: Vec::new(),
                });
                self.collections.len() - 1
            }
        };
        &mut self.collections[index]
    }
}

impl Serialize for LibraryLocations {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.collections
                .iter()
                .map(|collection| (&collection.code, &collection.entries)),
        )
    }
}

/// Counts reported after a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogStats {
    pub libraries: usize,
    pub collections: usize,
    pub entries: usize,
    pub catch_all_entries: usize,
}

/// The complete floor location mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    libraries: Vec<LibraryLocations>,
}

impl Catalog {
    pub fn libraries(&self) -> &[LibraryLocations] {
        &self.libraries
    }

    pub fn library(&self, code: &str) -> Option<&LibraryLocations> {
        self.libraries.iter().find(|library| library.code == code)
    }

    pub fn collections(&self, library: &str) -> Option<&[CollectionLocations]> {
        self.library(library).map(LibraryLocations::collections)
    }

    /// Entries filed under `library` / `collection`.
    pub fn entries(&self, library: &str, collection: &str) -> Option<&[LocationEntry]> {
        self.library(library)?
            .collection(collection)
            .map(CollectionLocations::entries)
    }

    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }

    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats {
            libraries: self.libraries.len(),
            ..CatalogStats::default()
        };
        for library in &self.libraries {
            stats.collections += library.collections.len();
            for collection in &library.collections {
                stats.entries += collection.entries.len();
                stats.catch_all_entries += collection
                    .entries
                    .iter()
                    .filter(|entry| entry.covers_all())
                    .count();
            }
        }
        stats
    }

    fn library_mut(&mut self, code: &str) -> &mut LibraryLocations {
        let index = match self.libraries.iter().position(|l| l.code == code) {
            Some(index) => index,
            None => {
                self.libraries.push(LibraryLocations {
                    code: code.to_string(),
                    collections: Vec::new(),
                });
                self.libraries.len() - 1
            }
        };
        &mut self.libraries[index]
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.libraries.iter().map(|library| (&library.code, library)))
    }
}

/// Accumulates rows into a [`Catalog`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    catalog: Catalog,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the row's entry and files it under its library and collection codes.
    ///
    /// # Errors
    ///
    /// Returns the range parse error of the row; the catalog is left unchanged.
    pub fn add_row(&mut self, row: &LocationRow) -> Result<&LocationEntry> {
        let entry = LocationEntry::from_row(row)?;
        Ok(self.insert(&row.library_code(), &row.collection_code(), entry))
    }

    /// Files an already built entry.
    pub fn insert(
        &mut self,
        library: &str,
        collection: &str,
        entry: LocationEntry,
    ) -> &LocationEntry {
        let entries = &mut self
            .catalog
            .library_mut(library)
            .collection_mut(collection)
            .entries;
        entries.push(entry);
        &entries[entries.len() - 1]
    }

    pub fn build(self) -> Catalog {
        self.catalog
    }
}
