use crate::segment::{parse_number, segments, Segment};
use core::{cmp::Ordering, iter};
use num_traits::Zero;

/// Returns the number of `.`-separated segments in `version`.
///
/// Every separator counts, so this is never zero: `""` has one (empty) segment and `"1..2"` has
/// three.
///
/// ```
/// assert_eq!(numver::segment_count("1.2.3"), 3);
/// assert_eq!(numver::segment_count("1.0-rc-2"), 2);
/// assert_eq!(numver::segment_count("final"), 1);
/// ```
pub fn segment_count(version: &str) -> usize {
    segments(version).count()
}

/// Compares two versions segment by segment.
///
/// Segments whose heads are both numbers are compared numerically with unbounded precision, all
/// other heads are compared as text. When heads are equal, a segment with a qualifier tail (such
/// as `-SNAPSHOT`) is older than one without, and two tails are compared as text.
///
/// When one version runs out of segments, the rest of the longer one decides: a non-zero number
/// makes it newer, zeros are ignored, and anything that is not a number makes it older (it is
/// treated as a pre-release of the shorter version).
///
/// ```
/// use core::cmp::Ordering;
/// use numver::compare;
///
/// assert_eq!(compare("1.3.34", "1.3.9"), Ordering::Greater);
/// assert_eq!(compare("1.2.34", "1.2.34-SNAPSHOT"), Ordering::Greater);
/// assert_eq!(compare("1.2", "1.2.0"), Ordering::Equal);
/// assert_eq!(compare("1.2", "1.2.0-alpha"), Ordering::Greater);
/// ```
pub fn compare(v1: &str, v2: &str) -> Ordering {
    let mut left = segments(v1);
    let mut right = segments(v2);

    loop {
        match (left.next(), right.next()) {
            (Some(l), Some(r)) => {
                let ordering = compare_segments(&Segment::split(l), &Segment::split(r));
                if ordering.is_ne() {
                    return ordering;
                }
            }
            (Some(l), None) => return compare_remainder(iter::once(l).chain(left)),
            (None, Some(r)) => return compare_remainder(iter::once(r).chain(right)).reverse(),
            (None, None) => return Ordering::Equal,
        }
    }
}

fn compare_segments(left: &Segment<'_>, right: &Segment<'_>) -> Ordering {
    let heads = match (left.number(), right.number()) {
        (Some(l), Some(r)) => l.cmp(&r),
        _ => left.head.cmp(right.head),
    };

    heads.then_with(|| match (left.qualifier, right.qualifier) {
        (Some(l), Some(r)) => l.cmp(r),
        // a qualifier marks a build before the bare release
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    })
}

/// Orders the trailing segments of the longer version against the implicit zeros of the shorter
/// one. The result is from the longer version's point of view.
fn compare_remainder<'vs>(remainder: impl Iterator<Item = &'vs str>) -> Ordering {
    for text in remainder {
        match parse_number(text) {
            Some(number) if number.is_zero() => continue,
            Some(_) => {
                tracing::trace!(segment = text, "trailing number decides comparison");
                return Ordering::Greater;
            }
            None => {
                tracing::trace!(segment = text, "trailing qualifier decides comparison");
                return Ordering::Less;
            }
        }
    }
    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rstest::{fixture, rstest};

    #[rstest]
    #[case("1.3.34", "1.3.9", Ordering::Greater)]
    #[case("1.3.4.3.2.34", "1.3.4.3.2.9", Ordering::Greater)]
    #[case("1.3.4.3.2.34", "1.3.4.3.2.34-SNAPSHOT", Ordering::Greater)]
    #[case("1.2", "1.2.0", Ordering::Equal)]
    #[case("1.2", "1.2.1", Ordering::Less)]
    #[case("1.2", "1.2.0-alpha", Ordering::Greater)]
    #[case("1.2", "1.2.0.0.0", Ordering::Equal)]
    #[case("1.2", "1.2.0.0.7", Ordering::Less)]
    #[case("1.2", "1.2.0.rc", Ordering::Greater)]
    #[case("01.2", "1.2", Ordering::Equal)]
    #[case("1.0-alpha", "1.0-beta", Ordering::Less)]
    #[case("1.0-rc-2", "1.0-rc-10", Ordering::Greater)] // tails are text
    #[case("1.0-", "1.0", Ordering::Less)] // an empty tail is still a tail
    #[case("1.0-", "1.0-a", Ordering::Less)]
    #[case("a", "b", Ordering::Less)]
    #[case("1.a", "1.1", Ordering::Greater)]
    #[case("1.-beta", "1.-alpha", Ordering::Greater)]
    #[case("", "", Ordering::Equal)]
    #[case("", "0", Ordering::Less)]
    #[case("1.", "1", Ordering::Less)]
    fn test_compare(#[case] v1: &str, #[case] v2: &str, #[case] expected: Ordering) {
        assert_eq!(compare(v1, v2), expected, "{v1} vs {v2}");
        assert_eq!(compare(v2, v1), expected.reverse(), "{v2} vs {v1}");
    }

    #[test]
    fn test_compare_unbounded_numbers() {
        assert_eq!(
            compare("1.99999999999999999999999", "1.99999999999999999999998"),
            Ordering::Greater
        );
        assert_eq!(
            compare("1.100000000000000000000", "1.99999999999999999999"),
            Ordering::Greater
        );
        assert_eq!(
            compare("18446744073709551616", "18446744073709551615.9"),
            Ordering::Greater
        );
    }

    /// Versions in strictly ascending order.
    #[fixture]
    fn ascending() -> Vec<&'static str> {
        vec![
            "0.9",
            "1.0.0-alpha",
            "1.0.0-beta",
            "1.0.0",
            "1.0.1",
            "1.0.10",
            "1.2",
            "1.2.1",
            "1.10",
            "2",
            "10.0",
        ]
    }

    #[rstest]
    fn test_strict_order_is_transitive(ascending: Vec<&'static str>) {
        for (lesser, greater) in ascending.iter().tuple_combinations() {
            assert_eq!(compare(lesser, greater), Ordering::Less, "{lesser} < {greater}");
            assert_eq!(compare(greater, lesser), Ordering::Greater, "{greater} > {lesser}");
        }
    }

    #[rstest]
    fn test_sort_recovers_order(ascending: Vec<&'static str>) {
        let mut shuffled = ascending.clone();
        shuffled.reverse();
        shuffled.swap(0, 4);
        shuffled.sort_by(|a, b| compare(a, b));
        assert_eq!(shuffled, ascending);
    }

    #[test]
    fn test_equal_is_transitive() {
        let equal = ["1.2", "1.2.0", "1.2.0.0", "01.2", "1.02.0"];
        for (a, b) in equal.iter().tuple_combinations() {
            assert_eq!(compare(a, b), Ordering::Equal, "{a} == {b}");
        }
    }

    #[test]
    fn test_reflexive() {
        let versions = ["", "1", "1.0-rc-2", "-beta", "1..2", "a.b-c.d", "1.2.3-SNAPSHOT"];
        for version in versions {
            assert_eq!(compare(version, version), Ordering::Equal, "{version}");
        }
    }

    #[rstest]
    #[case("", 1)]
    #[case("1", 1)]
    #[case("1.2.3", 3)]
    #[case("1..2", 3)]
    #[case("1.0-rc-2", 2)]
    #[case("1.2.3.", 4)]
    fn test_segment_count(#[case] version: &str, #[case] expected: usize) {
        assert_eq!(segment_count(version), expected);
    }
}
