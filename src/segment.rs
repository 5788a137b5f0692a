use core::fmt::{self, Display};
use num_bigint::BigUint;

/// Separates the segments of a version.
pub(crate) const SEGMENT_SEPARATOR: &str = ".";

/// Separates the head of a segment from its qualifier tail. Only the first occurrence counts.
pub(crate) const QUALIFIER_SEPARATOR: &str = "-";

/// Returns an iterator over the `.`-separated segments of a version. Empty segments are kept, so
/// there is always at least one.
pub(crate) fn segments(version: &str) -> core::str::Split<'_, &'static str> {
    version.split(SEGMENT_SEPARATOR)
}

/// Returns true if `text` is a non-empty run of ASCII digits.
pub(crate) fn is_number(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Parses `text` as an unbounded non-negative integer. Only non-empty runs of ASCII digits are
/// numbers; signs, whitespace and everything else are text.
pub(crate) fn parse_number(text: &str) -> Option<BigUint> {
    if !is_number(text) {
        return None;
    }
    BigUint::parse_bytes(text.as_bytes(), 10)
}

/// One segment of a version, split into its head and optional qualifier tail.
///
/// `"0-rc-2"` has head `"0"` and qualifier `"rc-2"`. `"1-"` has an empty, but present, qualifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Segment<'vs> {
    pub(crate) head: &'vs str,
    pub(crate) qualifier: Option<&'vs str>,
}

impl<'vs> Segment<'vs> {
    pub(crate) fn split(text: &'vs str) -> Self {
        match text.split_once(QUALIFIER_SEPARATOR) {
            Some((head, qualifier)) => Segment {
                head,
                qualifier: Some(qualifier),
            },
            None => Segment {
                head: text,
                qualifier: None,
            },
        }
    }

    pub(crate) fn number(&self) -> Option<BigUint> {
        parse_number(self.head)
    }
}

impl<'vs> Display for Segment<'vs> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.head)?;
        if let Some(qualifier) = self.qualifier {
            write!(f, "{QUALIFIER_SEPARATOR}{qualifier}")?;
        }
        Ok(())
    }
}
