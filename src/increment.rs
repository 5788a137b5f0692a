use crate::{
    comparator::{Numeric, VersionComparator},
    error::VersionError,
    ordering::segment_count,
    segment::{
        is_number, parse_number, segments, Segment, QUALIFIER_SEPARATOR, SEGMENT_SEPARATOR,
    },
};
use core::cmp::Ordering;

/// One step of the qualifier progression: any of `keywords` (case-insensitive) advances to `next`,
/// which carries `next_qualifier` as its tail, if any.
#[derive(Debug)]
struct Step {
    keywords: &'static [&'static str],
    next: &'static str,
    next_qualifier: Option<&'static str>,
}

/// alpha → beta → milestone → rc → ga → sp-1. `cr` is spelled `rc` and `final` is `ga` once
/// advanced.
static PROGRESSION: [Step; 5] = [
    Step {
        keywords: &["alpha"],
        next: "beta",
        next_qualifier: None,
    },
    Step {
        keywords: &["beta"],
        next: "milestone",
        next_qualifier: None,
    },
    Step {
        keywords: &["milestone"],
        next: "rc",
        next_qualifier: None,
    },
    Step {
        keywords: &["cr", "rc"],
        next: "ga",
        next_qualifier: None,
    },
    Step {
        keywords: &["ga", "final"],
        next: "sp",
        next_qualifier: Some("1"),
    },
];

fn progression_step(head: &str) -> Option<&'static Step> {
    PROGRESSION.iter().find(|step| {
        step.keywords
            .iter()
            .any(|keyword| keyword.eq_ignore_ascii_case(head))
    })
}

/// Returns a new version with the segment at index `segment` advanced and every later segment
/// reset to `0`. Earlier segments are kept as they are.
///
/// Passing the segment count as `segment` appends a new segment, `1`.
///
/// How a segment advances depends on its head (the part before the first `-`):
///
/// - A number is incremented by one, with unbounded precision. If the segment also has a
///   qualifier tail, the number stays and the tail is advanced instead, so `0-alpha` becomes
///   `0-beta`.
/// - A known qualifier follows the progression `alpha`, `beta`, `milestone`, `rc` (or `cr`), `ga`
///   (or `final`), `sp-1`. If it has a numeric tail, only the tail is incremented.
/// - Any other text is bumped like an odometer over its trailing digits or letters, so `a`
///   becomes `b`, `z` becomes `aa` and `rc9` becomes `rc10`.
///
/// ```
/// use numver::increment;
///
/// assert_eq!(increment("1.2.3", 1).unwrap(), "1.3.0");
/// assert_eq!(increment("1.0-rc-2", 1).unwrap(), "1.0-rc-3");
/// assert_eq!(increment("1.0-ga", 1).unwrap(), "1.0-sp-1");
/// assert_eq!(increment("1.2", 2).unwrap(), "1.2.1");
/// ```
///
/// # Errors
///
/// Returns [VersionError::InvalidSegment] if `segment` is greater than the segment count of
/// `version`.
pub fn increment(version: &str, segment: usize) -> Result<String, VersionError> {
    Numeric.increment_segment(version, segment)
}

/// Increments `version` at `segment`, which must be at most its segment count.
pub(crate) fn increment_unchecked(version: &str, segment: usize) -> String {
    let count = segment_count(version);
    debug_assert!(segment <= count, "segment {segment} out of range for {count} segment(s)");

    let mut next_segments = Vec::with_capacity(count + 1);
    for (idx, text) in segments(version).enumerate() {
        let next = match idx.cmp(&segment) {
            Ordering::Less => text.to_owned(),
            Ordering::Equal => advance(text),
            Ordering::Greater => "0".to_owned(),
        };
        next_segments.push(next);
    }
    if segment >= count {
        next_segments.push("1".to_owned());
    }

    let next = next_segments.join(SEGMENT_SEPARATOR);
    tracing::trace!(version, segment, next = next.as_str(), "incremented");
    next
}

/// Renders the successor of a single segment.
///
/// A numeric head followed by a tail is kept and the tail advances in its place. Such links can
/// chain (`0-0-rc-2`), so only the last link is advanced and everything before it is copied.
fn advance(text: &str) -> String {
    let mut offset = 0;
    let mut link = Segment::split(text);
    while let (true, Some(qualifier)) = (is_number(link.head), link.qualifier) {
        offset = text.len() - qualifier.len();
        link = Segment::split(qualifier);
    }

    let next = advance_link(link);
    let mut advanced = String::with_capacity(offset + next.len());
    advanced.push_str(&text[..offset]);
    advanced.push_str(&next);
    advanced
}

/// Advances a segment whose head is either text, or a number without a tail.
fn advance_link(segment: Segment<'_>) -> String {
    let Segment { head, qualifier } = segment;

    if let Some(number) = segment.number() {
        return (number + 1u32).to_string();
    }

    if let Some(step) = progression_step(head) {
        return match qualifier.and_then(parse_number) {
            Some(number) => join(head, Some((number + 1u32).to_string().as_str())),
            None => join(step.next, step.next_qualifier),
        };
    }

    join(&alphanumeric_increment(head), qualifier)
}

fn join(head: &str, qualifier: Option<&str>) -> String {
    match qualifier {
        Some(qualifier) => format!("{head}{QUALIFIER_SEPARATOR}{qualifier}"),
        None => head.to_owned(),
    }
}

/// The class of characters in an incrementable run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Digit,
    Letter,
}

impl Class {
    fn of(c: char) -> Option<Self> {
        if c.is_ascii_digit() {
            Some(Class::Digit)
        } else if c.is_ascii_alphabetic() {
            Some(Class::Letter)
        } else {
            None
        }
    }
}

/// Increments the trailing run of ASCII digits, or of ASCII letters, in `token` as a counter with
/// carry. A run that overflows grows a new leading `1`, `a` or `A`. Tokens without such a run get
/// a `1` appended.
fn alphanumeric_increment(token: &str) -> String {
    let Some(class) = token.chars().next_back().and_then(Class::of) else {
        return format!("{token}1");
    };

    let run_start = token
        .char_indices()
        .rev()
        .take_while(|(_, c)| Class::of(*c) == Some(class))
        .last()
        .map_or(token.len(), |(idx, _)| idx);
    let (prefix, run) = token.split_at(run_start);

    let mut chars: Vec<char> = run.chars().collect();
    let mut carry = true;
    for c in chars.iter_mut().rev() {
        let (next, overflow) = match *c {
            '9' => ('0', true),
            'z' => ('a', true),
            'Z' => ('A', true),
            other => (char::from(other as u8 + 1), false),
        };
        *c = next;
        if !overflow {
            carry = false;
            break;
        }
    }

    let lead = match (carry, class) {
        (false, _) => None,
        (true, Class::Digit) => Some('1'),
        (true, Class::Letter) if run.starts_with(|c: char| c.is_ascii_uppercase()) => Some('A'),
        (true, Class::Letter) => Some('a'),
    };

    let mut next = String::with_capacity(token.len() + 1);
    next.push_str(prefix);
    next.extend(lead);
    next.extend(chars);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::compare;
    use rstest::rstest;

    #[rstest]
    #[case("1.2.3", 2, "1.2.4")]
    #[case("1.2.3", 1, "1.3.0")]
    #[case("1.2.3", 0, "2.0.0")]
    #[case("1.2.3", 3, "1.2.3.1")]
    #[case("9", 0, "10")]
    #[case("1.2.3-SNAPSHOT.4", 0, "2.0.0.0")]
    #[case("1.99999999999999999999999", 1, "1.100000000000000000000000")]
    #[case("", 0, "1")]
    #[case("", 1, ".1")]
    #[case("1..2", 1, "1.1.0")]
    fn test_increment_numbers(
        #[case] version: &str,
        #[case] segment: usize,
        #[case] expected: &str,
    ) {
        assert_eq!(increment(version, segment).as_deref(), Ok(expected));
    }

    #[rstest]
    #[case("1.0-alpha", 1, "1.0-beta")]
    #[case("1.0-beta", 1, "1.0-milestone")]
    #[case("1.0-milestone", 1, "1.0-rc")]
    #[case("1.0-rc", 1, "1.0-ga")]
    #[case("1.0-cr", 1, "1.0-ga")]
    #[case("1.0-ga", 1, "1.0-sp-1")]
    #[case("1.0-final", 1, "1.0-sp-1")]
    #[case("1.0-rc-2", 1, "1.0-rc-3")]
    #[case("1.0-sp-1", 1, "1.0-sq-1")]
    #[case("1.0-a", 1, "1.0-b")]
    #[case("1.0-ALPHA", 1, "1.0-beta")]
    #[case("1.0-Final-x", 1, "1.0-sp-1")]
    #[case("1.0-rc-x", 1, "1.0-ga")]
    #[case("1.0-beta-9", 1, "1.0-beta-10")]
    #[case("1.0-ga-4", 1, "1.0-ga-5")]
    #[case("1.0-SNAPSHOT", 1, "1.0-SNAPSHOU")]
    #[case("1.0-", 1, "1.0-1")]
    #[case("1.0-7", 1, "1.0-8")]
    #[case("1.0-rc.5", 1, "1.0-ga.0")]
    fn test_increment_qualifiers(
        #[case] version: &str,
        #[case] segment: usize,
        #[case] expected: &str,
    ) {
        assert_eq!(increment(version, segment).as_deref(), Ok(expected));
    }

    #[rstest]
    #[case("1.0-0-0", 1, "1.0-0-1")]
    #[case("1.0-0-rc-2", 1, "1.0-0-rc-3")]
    #[case("1.0-1-alpha.3", 1, "1.0-1-beta.0")]
    #[case("1.2-0-a", 1, "1.2-0-b")]
    fn test_increment_chained_tails(
        #[case] version: &str,
        #[case] segment: usize,
        #[case] expected: &str,
    ) {
        assert_eq!(increment(version, segment).as_deref(), Ok(expected));
    }

    #[test]
    fn test_increment_deep_tail_chain() {
        let depth = 100_000;
        let version = format!("1.{}0", "0-".repeat(depth));
        let next = increment(&version, 1).unwrap();
        let expected = format!("1.{}1", "0-".repeat(depth));
        assert_eq!(next, expected);
    }

    #[rstest]
    #[case("1.alpha", 1, "1.beta")]
    #[case("1.RC-2", 1, "1.RC-3")]
    #[case("1.final", 1, "1.sp-1")]
    #[case("1.b-x", 1, "1.c-x")]
    #[case("1.-beta", 1, "1.1-beta")] // empty head
    fn test_increment_text_heads(
        #[case] version: &str,
        #[case] segment: usize,
        #[case] expected: &str,
    ) {
        assert_eq!(increment(version, segment).as_deref(), Ok(expected));
    }

    #[test]
    fn test_increment_out_of_range() {
        assert_eq!(
            increment("1.2.3", 5),
            Err(VersionError::InvalidSegment {
                segment: 5,
                segment_count: 3,
                version: "1.2.3".to_string(),
            })
        );
        assert!(matches!(
            increment("1.2.3", 4),
            Err(VersionError::InvalidSegment {
                segment: 4,
                segment_count: 3,
                ..
            })
        ));
    }

    #[rstest]
    #[case("a", "b")]
    #[case("z", "aa")]
    #[case("Z", "AA")]
    #[case("az", "ba")]
    #[case("Zz", "AAa")]
    #[case("9", "10")]
    #[case("99", "100")]
    #[case("rc9", "rc10")]
    #[case("rc19", "rc20")]
    #[case("v_", "v_1")]
    #[case("", "1")]
    #[case("x_z", "x_aa")]
    #[case("abc-", "abc-1")]
    #[case("ÿz", "ÿaa")]
    fn test_alphanumeric_increment(#[case] token: &str, #[case] expected: &str) {
        assert_eq!(alphanumeric_increment(token), expected);
    }

    #[rstest]
    #[case("1.2.3")]
    #[case("0")]
    #[case("1.0.0.0")]
    #[case("10.99.999")]
    fn test_successor_is_greater(#[case] version: &str) {
        for segment in 0..=segment_count(version) {
            let next = increment(version, segment).unwrap();
            assert_eq!(compare(&next, version), Ordering::Greater, "{next} > {version}");
        }
    }
}
