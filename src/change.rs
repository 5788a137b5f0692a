use core::fmt::{self, Display};

/// A change of a component's version, identified by its group and artifact.
///
/// Every field may be absent. Two changes are equal when all four fields are equal, with absent
/// equal to absent.
///
/// ```
/// use numver::VersionChange;
///
/// let change = VersionChange::new(
///     Some("org.example"),
///     Some("widget"),
///     Some("1.0"),
///     Some("1.1"),
/// );
/// assert_eq!(change.to_string(), "org.example:widget:1.0-->1.1");
/// assert_eq!(change.new_version(), Some("1.1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct VersionChange {
    group_id: Option<String>,
    artifact_id: Option<String>,
    old_version: Option<String>,
    new_version: Option<String>,
}

impl VersionChange {
    /// Creates a change of `group_id:artifact_id` from `old_version` to `new_version`.
    pub fn new<G, A, O, N>(
        group_id: Option<G>,
        artifact_id: Option<A>,
        old_version: Option<O>,
        new_version: Option<N>,
    ) -> Self
    where
        G: Into<String>,
        A: Into<String>,
        O: Into<String>,
        N: Into<String>,
    {
        Self {
            group_id: group_id.map(Into::into),
            artifact_id: artifact_id.map(Into::into),
            old_version: old_version.map(Into::into),
            new_version: new_version.map(Into::into),
        }
    }

    /// The group of the changed component.
    pub fn group_id(&self) -> Option<&str> {
        self.group_id.as_deref()
    }

    /// The artifact of the changed component.
    pub fn artifact_id(&self) -> Option<&str> {
        self.artifact_id.as_deref()
    }

    /// The version before the change.
    pub fn old_version(&self) -> Option<&str> {
        self.old_version.as_deref()
    }

    /// The version after the change.
    pub fn new_version(&self) -> Option<&str> {
        self.new_version.as_deref()
    }
}

impl Display for VersionChange {
    /// Renders `group:artifact:old-->new` for diagnostics. Absent fields are left empty. The
    /// output is not meant to be parsed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}-->{}",
            self.group_id().unwrap_or_default(),
            self.artifact_id().unwrap_or_default(),
            self.old_version().unwrap_or_default(),
            self.new_version().unwrap_or_default(),
        )
    }
}
