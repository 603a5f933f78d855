pub mod catalog;
pub mod location;

pub use catalog::{Catalog, CatalogBuilder, CatalogStats, CollectionLocations, LibraryLocations};
pub use location::{
    CoversAllLocation, EVERYTHING_TYPE, LocationEntry, LocationInfo, LocationRow, NO_COLLECTION,
    RangedLocation,
};

pub use floormap_callnumber::{CallNumberError, CallNumberKey, CallNumberKind, CallNumberRange};
