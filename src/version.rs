use crate::{
    error::VersionError,
    increment::{increment, increment_unchecked},
    ordering,
};
use core::{
    cmp::Ordering,
    convert::Infallible,
    fmt::{self, Display},
    str::FromStr,
};

/// An owned version string ordered by [`compare`](crate::compare).
///
/// Equality follows the ordering, not the text: `1.2` and `1.2.0` are equal versions. For that
/// reason [Version] does not implement `Hash`.
///
/// ```
/// use numver::Version;
///
/// let mut versions: Vec<Version> = ["1.10", "1.9", "1.9-SNAPSHOT"].map(Version::from).to_vec();
/// versions.sort();
/// assert_eq!(versions, ["1.9-SNAPSHOT", "1.9", "1.10"].map(Version::from));
///
/// assert_eq!(Version::from("1.2"), Version::from("1.2.0"));
/// ```
#[derive(Debug, Clone)]
pub struct Version(String);

impl Version {
    /// Wraps a version string. Every string is a version, so this cannot fail.
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    /// Returns the version text as it was given.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number of `.`-separated segments.
    pub fn segment_count(&self) -> usize {
        ordering::segment_count(&self.0)
    }

    /// Returns the next version after incrementing the segment at index `segment`. See
    /// [`increment`](crate::increment) for how segments advance.
    ///
    /// ```
    /// use numver::Version;
    ///
    /// let version = Version::from("1.2.3");
    /// let next = version.next(1).unwrap();
    /// assert_eq!(next.as_str(), "1.3.0");
    /// assert!(version < next);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [VersionError::InvalidSegment] if `segment` is greater than the segment count.
    pub fn next(&self, segment: usize) -> Result<Self, VersionError> {
        increment(&self.0, segment).map(Self)
    }

    /// Returns the next version after incrementing the last segment.
    pub fn next_last(&self) -> Self {
        // there is always at least one segment
        Self(increment_unchecked(&self.0, self.segment_count() - 1))
    }

    /// Unwraps the version text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Version {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Version {
    fn from(version: &str) -> Self {
        Self::new(version)
    }
}

impl From<String> for Version {
    fn from(version: String) -> Self {
        Self(version)
    }
}

impl AsRef<str> for Version {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        ordering::compare(&self.0, &other.0)
    }
}
