//! Call number normalization for library floor location ranges.
//!
//! Two notations are supported:
//!
//! - **Library of Congress** (`QA76.73 C15`): normalized to a zero-padded string key
//!   whose lexicographic order matches shelf order.
//! - **Dewey Decimal** (`813.54`): normalized to a floating-point key.
//!
//! Both implement [`CallNumberScheme`]. [`CallNumberRange::parse`] splits a range such as
//! `"A100 - A200"`, tries the LC scheme on the start token and falls back to Dewey.
//!
//! # Example
//!
//! ```ignore
//! use floormap_callnumber::{CallNumberKind, CallNumberRange};
//!
//! let range = CallNumberRange::parse("A100-A200")?;
//! assert_eq!(range.kind(), CallNumberKind::Lc);
//! assert!(range.contains("A150"));
//! assert!(!range.contains("B1"));
//! ```

mod dewey;
mod error;
mod key;
mod lc;
mod range;
mod scheme;

// === Error Types ===
pub use error::{CallNumberError, Result};

// === Schemes ===
pub use dewey::{DeweyScheme, STOP_FRACTION_SUFFIX};
pub use lc::{CLASS_NUMBER_WIDTH, LcScheme, STOP_SENTINEL};
pub use scheme::{CallNumberKind, CallNumberScheme};

// === Keys and Ranges ===
pub use key::CallNumberKey;
pub use range::{Bounds, CallNumberRange};
