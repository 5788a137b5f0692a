use crate::{error::VersionError, increment, ordering};
use core::cmp::Ordering;

/// A strategy for ordering and incrementing version strings.
///
/// Implementors provide the ordering, the segment count and an unchecked increment. The range
/// check on the segment index is shared by all strategies in
/// [`increment_segment`](VersionComparator::increment_segment).
pub trait VersionComparator {
    /// Returns the name of the strategy for diagnostics.
    fn name(&self) -> &'static str;

    /// Orders two versions.
    fn compare(&self, v1: &str, v2: &str) -> Ordering;

    /// Returns the number of segments in `version` that can be incremented.
    fn segment_count(&self, version: &str) -> usize;

    /// Increments the segment at `segment`, which is already known to be at most
    /// [`segment_count`](VersionComparator::segment_count). Larger indices are a logic error and
    /// panic in debug builds.
    fn increment_unchecked(&self, version: &str, segment: usize) -> String;

    /// Returns the next version after incrementing the segment at index `segment`. The segment
    /// count itself is a valid index and appends a segment.
    ///
    /// # Errors
    ///
    /// Returns [VersionError::InvalidSegment] if `segment` is greater than the segment count.
    fn increment_segment(&self, version: &str, segment: usize) -> Result<String, VersionError> {
        let segment_count = self.segment_count(version);
        if segment > segment_count {
            tracing::debug!(version, segment, segment_count, "segment out of range");
            return Err(VersionError::InvalidSegment {
                segment,
                segment_count,
                version: version.to_owned(),
            });
        }
        Ok(self.increment_unchecked(version, segment))
    }
}

/// Compares every `.`-separated segment as an unbounded number where possible, falling back to
/// text. See [`compare`](crate::compare) and [`increment`](crate::increment).
///
/// ```
/// use core::cmp::Ordering;
/// use numver::{Numeric, VersionComparator};
///
/// assert_eq!(Numeric.compare("1.3.34", "1.3.9"), Ordering::Greater);
/// assert_eq!(Numeric.increment_segment("1.0-alpha", 1).unwrap(), "1.0-beta");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Numeric;

impl VersionComparator for Numeric {
    fn name(&self) -> &'static str {
        "numeric"
    }

    fn compare(&self, v1: &str, v2: &str) -> Ordering {
        ordering::compare(v1, v2)
    }

    fn segment_count(&self, version: &str) -> usize {
        ordering::segment_count(version)
    }

    fn increment_unchecked(&self, version: &str, segment: usize) -> String {
        increment::increment_unchecked(version, segment)
    }
}
