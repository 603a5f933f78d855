//! CLI library components for floormap.

pub mod convert;
pub mod logging;
