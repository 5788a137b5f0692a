//! # numver
//!
//! A library for ordering and incrementing dot-delimited versions, one segment at a time.
//!
//! Versions are plain strings. They are split on `.` into *segments*, and each segment is split on
//! its first `-` into a *head* and an optional *qualifier* tail. Heads made of digits are compared
//! and incremented as numbers of unbounded size, everything else is text.
//!
//! ## Examples
//!
//! Compare versions:
//!
//! ```
//! use core::cmp::Ordering;
//! use numver::prelude::*;
//!
//! assert_eq!(compare("1.3.34", "1.3.9"), Ordering::Greater);
//! assert_eq!(compare("1.3.4-SNAPSHOT", "1.3.4"), Ordering::Less);
//! assert_eq!(compare("1.2", "1.2.0"), Ordering::Equal);
//! ```
//!
//! Get a next version by bumping a segment (counted from zero). Later segments are reset to `0`:
//!
//! ```
//! use numver::prelude::*;
//!
//! assert_eq!(increment("1.2.3", 1).unwrap(), "1.3.0");
//! assert_eq!(increment("1.0-alpha", 1).unwrap(), "1.0-beta");
//! assert!(matches!(
//!     increment("1.2.3", 5),
//!     Err(VersionError::InvalidSegment { segment: 5, segment_count: 3, .. })
//! ));
//! ```
//!
//! Or sort owned versions:
//!
//! ```
//! use numver::prelude::*;
//!
//! let mut versions: Vec<Version> = vec!["1.10".into(), "1.9".into(), "1.9-rc".into()];
//! versions.sort();
//! assert_eq!(versions.last().map(Version::as_str), Some("1.10"));
//! ```
//!
//! ## Ordering
//!
//! Segments are compared left to right and the first difference decides:
//!
//! 1. Two numeric heads compare as numbers (`34 > 9`), otherwise heads compare as text.
//! 2. With equal heads, a segment with a qualifier is older than one without (`1.0-SNAPSHOT <
//!    1.0`), and two qualifiers compare as text.
//! 3. When one version has more segments, each extra segment is compared to zero: a non-zero
//!    number makes the longer version newer (`1.2 < 1.2.1`), zeros are ignored (`1.2 == 1.2.0`),
//!    and anything else makes it older (`1.2.0-alpha < 1.2`).
//!
//! ## Qualifier progression
//!
//! | Qualifier | Next |
//! |---|---|
//! | `alpha` | `beta` |
//! | `beta` | `milestone` |
//! | `milestone` | `rc` |
//! | `rc`, `cr` | `ga` |
//! | `ga`, `final` | `sp-1` |
//!
//! Qualifiers match case-insensitively. A qualifier with a numeric tail, like `rc-2`, increments
//! the tail instead (`rc-3`). Unknown text is incremented like an odometer: `a` → `b`, `z` → `aa`.
//!
//! ## Prelude
//!
//! ```
//! use numver::prelude::*;
//! ```
#![warn(missing_docs)]

mod change;
mod comparator;
mod error;
mod increment;
mod ordering;
mod segment;
mod version;

pub use crate::change::VersionChange;
pub use crate::comparator::{Numeric, VersionComparator};
pub use crate::error::VersionError;
pub use crate::increment::increment;
pub use crate::ordering::{compare, segment_count};
pub use crate::version::Version;

/// A convenience module appropriate for glob imports (`use numver::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::compare;
    #[doc(no_inline)]
    pub use crate::increment;
    #[doc(no_inline)]
    pub use crate::segment_count;
    #[doc(no_inline)]
    pub use crate::Numeric;
    #[doc(no_inline)]
    pub use crate::Version;
    #[doc(no_inline)]
    pub use crate::VersionChange;
    #[doc(no_inline)]
    pub use crate::VersionComparator;
    #[doc(no_inline)]
    pub use crate::VersionError;
}
