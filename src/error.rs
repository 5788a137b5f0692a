/// Errors that can occur when incrementing a version.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// The segment index to increment is past the end of the version. Valid indices are `0`
    /// through the segment count (inclusive), where the segment count itself appends a new
    /// segment.
    #[error("Segment `{segment}` is out of range for version `{version}`, which has {segment_count} segment(s)")]
    InvalidSegment {
        /// The requested segment index.
        segment: usize,
        /// The number of segments in `version`.
        segment_count: usize,
        /// The version that was to be incremented.
        version: String,
    },
}
