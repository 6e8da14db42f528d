//! Range descriptors and the textual range grammar.
//!
//! One axis is selected by a [`Range`], written `[start]:[stop][:[step]]`
//! like a Python slice. Several axes are selected by a comma-separated list
//! of such ranges, which [`parse_ranges()`] splits in axis order.

use std::fmt;
use std::str::{FromStr};
use std::sync::{OnceLock};

use regex::{Regex};

/// The grammar for one axis. Integers are base-10 and optionally signed;
/// whitespace around tokens is ignored.
const RANGE_REGEX: &str = r"^\s*([+-]?\d+)?\s*:\s*([+-]?\d+)?\s*(?::\s*([+-]?\d+)?\s*)?$";

fn range_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(RANGE_REGEX).expect("RANGE_REGEX is a valid regex"))
}

/// Errors produced while parsing or constructing a [`Range`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("invalid range `{spec}`: expected `[start]:[stop][:[step]]`")]
    Syntax { spec: String },

    #[error("invalid integer in range `{spec}`: {source}")]
    Integer { spec: String, source: std::num::ParseIntError },

    #[error("range `{spec}` has a zero step")]
    ZeroStep { spec: String },

    #[error("range `{spec}` has a negative step")]
    NegativeStep { spec: String },
}

// ----------------------------------------------------------------------------

/// Selects a sub-sequence along one axis: every `step`th index from `start`
/// up to but excluding `stop`.
///
/// When `stop` is absent the range runs to the end of whichever axis it is
/// applied to. The end is resolved each time the range is applied, so one
/// `Range` can be used against axes of different lengths.
///
/// `step` is always positive. `start` and `stop` are taken literally: they
/// are never offset from the end of the axis.
///
/// ```
/// use slicearray::{Range};
/// let r: Range = "1:".parse().unwrap();
/// assert_eq!((r.start(), r.stop(), r.step()), (1, None, 1));
/// assert!(!r.has_stop());
/// assert_eq!(r.indices(4).collect::<Vec<_>>(), [1, 2, 3]);
/// ```
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawRange"))]
pub struct Range {
    start: isize,
    stop: Option<isize>,
    step: isize,
}

impl Range {
    /// Constructs `start:stop:step`.
    pub fn new(start: isize, stop: Option<isize>, step: isize) -> Result<Self, FormatError> {
        let range = Self {start, stop, step};
        if step == 0 {
            Err(FormatError::ZeroStep {spec: range.to_string()})
        } else if step < 0 {
            Err(FormatError::NegativeStep {spec: range.to_string()})
        } else {
            Ok(range)
        }
    }

    /// Constructs `start:`.
    pub fn to_end(start: isize) -> Self { Self {start, stop: None, step: 1} }

    /// Constructs `:`, which selects a whole axis.
    pub fn full() -> Self { Self::to_end(0) }

    /// Returns a copy of `self` with a different step.
    pub fn with_step(self, step: isize) -> Result<Self, FormatError> {
        Self::new(self.start, self.stop, step)
    }

    /// Parses one axis of the range grammar.
    ///
    /// ```
    /// use slicearray::{Range, FormatError};
    /// assert_eq!(Range::parse("0:1:2").unwrap(), Range::new(0, Some(1), 2).unwrap());
    /// assert_eq!(Range::parse(":2").unwrap(), Range::from(..2));
    /// assert!(matches!(Range::parse("2"), Err(FormatError::Syntax {..})));
    /// ```
    pub fn parse(spec: &str) -> Result<Self, FormatError> {
        let captures = range_regex().captures(spec)
            .ok_or_else(|| FormatError::Syntax {spec: spec.to_string()})?;
        let int = |i: usize| -> Result<Option<isize>, FormatError> {
            captures.get(i).map(|m| m.as_str().parse::<isize>()).transpose()
                .map_err(|source| FormatError::Integer {spec: spec.to_string(), source})
        };
        let start = int(1)?.unwrap_or(0);
        let stop = int(2)?;
        let step = int(3)?.unwrap_or(1);
        Self::new(start, stop, step).map_err(|e| match e {
            FormatError::ZeroStep {..} => FormatError::ZeroStep {spec: spec.to_string()},
            FormatError::NegativeStep {..} => FormatError::NegativeStep {spec: spec.to_string()},
            e => e,
        })
    }

    pub fn start(&self) -> isize { self.start }

    /// The literal stop value, or `None` if the range runs to the end.
    pub fn stop(&self) -> Option<isize> { self.stop }

    pub fn step(&self) -> isize { self.step }

    /// Whether an explicit stop was given. A stop of `0` still counts.
    pub fn has_stop(&self) -> bool { self.stop.is_some() }

    /// The exclusive upper bound of `self` against an axis of length `len`.
    pub fn bound(&self, len: usize) -> isize {
        self.stop.unwrap_or(len as isize)
    }

    /// The indices visited when `self` is applied to an axis of length `len`.
    ///
    /// The indices are not checked against `len`.
    pub fn indices(&self, len: usize) -> std::iter::StepBy<std::ops::Range<isize>> {
        (self.start..self.bound(len)).step_by(self.step as usize)
    }

    /// The number of [`indices()`], computed without visiting them.
    ///
    /// [`indices()`]: Self::indices
    pub fn count(&self, len: usize) -> usize {
        let stop = self.bound(len);
        if stop <= self.start { return 0; }
        (stop.abs_diff(self.start) - 1) / self.step as usize + 1
    }
}

impl Default for Range {
    fn default() -> Self { Self::full() }
}

impl FromStr for Range {
    type Err = FormatError;
    fn from_str(s: &str) -> Result<Self, Self::Err> { Self::parse(s) }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.stop {
            Some(stop) => write!(f, "{}:{}:{}", self.start, stop, self.step),
            None => write!(f, "{}::{}", self.start, self.step),
        }
    }
}

impl From<std::ops::Range<isize>> for Range {
    fn from(r: std::ops::Range<isize>) -> Self { Self {start: r.start, stop: Some(r.end), step: 1} }
}

impl From<std::ops::RangeFrom<isize>> for Range {
    fn from(r: std::ops::RangeFrom<isize>) -> Self { Self::to_end(r.start) }
}

impl From<std::ops::RangeTo<isize>> for Range {
    fn from(r: std::ops::RangeTo<isize>) -> Self { Self {start: 0, stop: Some(r.end), step: 1} }
}

impl From<std::ops::RangeFull> for Range {
    fn from(_: std::ops::RangeFull) -> Self { Self::full() }
}

/// The unvalidated serialized form of a [`Range`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRange {
    start: isize,
    stop: Option<isize>,
    step: isize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRange> for Range {
    type Error = FormatError;
    fn try_from(raw: RawRange) -> Result<Self, FormatError> { Self::new(raw.start, raw.stop, raw.step) }
}

// ----------------------------------------------------------------------------

/// Parses a comma-separated list of ranges, one per axis starting at axis 0.
///
/// ```
/// use slicearray::{parse_ranges, Range};
/// let ranges = parse_ranges("0:1, 1:, ::2").unwrap();
/// assert_eq!(ranges, [
///     Range::new(0, Some(1), 1).unwrap(),
///     Range::to_end(1),
///     Range::full().with_step(2).unwrap(),
/// ]);
/// ```
pub fn parse_ranges(spec: &str) -> Result<Vec<Range>, FormatError> {
    let stripped: String = spec.chars().filter(|c| !c.is_whitespace()).collect();
    stripped.split(',').map(Range::parse).collect()
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn assert_parse(spec: &str, start: isize, stop: Option<isize>, step: isize) {
        let r = Range::parse(spec).unwrap();
        assert_eq!((r.start(), r.stop(), r.step()), (start, stop, step), "{spec}");
        assert_eq!(r.has_stop(), stop.is_some(), "{spec}");
    }

    #[test]
    fn parse() {
        assert_parse("0:1", 0, Some(1), 1);
        assert_parse("1:", 1, None, 1);
        assert_parse("::2", 0, None, 2);
        assert_parse(":2", 0, Some(2), 1);
        assert_parse("0:1:2", 0, Some(1), 2);
        assert_parse(":", 0, None, 1);
        assert_parse("::", 0, None, 1);
        assert_parse(" 3 : 7 : 2 ", 3, Some(7), 2);
        assert_parse("-2:+5", -2, Some(5), 1);
    }

    #[test]
    fn explicit_zero_stop() {
        let r = Range::parse("0:0").unwrap();
        assert!(r.has_stop());
        assert_eq!(r.stop(), Some(0));
        assert_eq!(r.indices(5).count(), 0);
    }

    #[test]
    fn parse_bad() {
        for spec in ["2", "", "a:b", "1:2:3:4", "1 2:3", "1.5:2"] {
            assert!(matches!(Range::parse(spec), Err(FormatError::Syntax {..})), "{spec}");
        }
        assert!(matches!(Range::parse("0:1:0"), Err(FormatError::ZeroStep {..})));
        assert_eq!(
            Range::parse("::-1"),
            Err(FormatError::NegativeStep {spec: "::-1".to_string()}),
        );
        assert!(matches!(
            Range::parse("99999999999999999999999:"),
            Err(FormatError::Integer {..}),
        ));
    }

    #[test]
    fn new_checks_step() {
        assert!(matches!(Range::new(0, None, 0), Err(FormatError::ZeroStep {..})));
        assert!(matches!(Range::new(3, Some(0), -1), Err(FormatError::NegativeStep {..})));
        assert!(Range::full().with_step(-2).is_err());
    }

    #[test]
    fn indices() {
        assert_eq!(Range::parse("1:").unwrap().indices(4).collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(Range::parse("::2").unwrap().indices(5).collect::<Vec<_>>(), [0, 2, 4]);
        assert_eq!(Range::parse("5:3").unwrap().indices(4).count(), 0);
        assert_eq!(Range::parse("1:-1").unwrap().indices(4).count(), 0);
        assert_eq!(Range::parse("0:6:4").unwrap().indices(2).collect::<Vec<_>>(), [0, 4]);
    }

    #[test]
    fn count_without_visiting() {
        assert_eq!(Range::parse("1:").unwrap().count(4), 3);
        assert_eq!(Range::parse("5:3").unwrap().count(4), 0);
        assert_eq!(Range::parse("0:6:4").unwrap().count(2), 2);
        assert_eq!(Range::parse("0:2000000000").unwrap().count(2), 2_000_000_000);
        let r = Range::new(isize::MIN, Some(isize::MAX), 1).unwrap();
        assert_eq!(r.count(0), usize::MAX);
        let r = Range::new(0, Some(isize::MAX), isize::MAX).unwrap();
        assert_eq!(r.count(0), 1);
    }

    #[test]
    fn from_std() {
        assert_eq!(Range::from(1..3), Range::parse("1:3").unwrap());
        assert_eq!(Range::from(2..), Range::parse("2:").unwrap());
        assert_eq!(Range::from(..4), Range::parse(":4").unwrap());
        assert_eq!(Range::from(..), Range::parse(":").unwrap());
        assert_eq!(Range::default(), Range::full());
    }

    #[test]
    fn display() {
        assert_eq!(Range::parse("1:").unwrap().to_string(), "1::1");
        assert_eq!(Range::parse(":2:3").unwrap().to_string(), "0:2:3");
    }

    #[test]
    fn multi_axis() {
        let ranges = parse_ranges(" 0:1 , 1: ,\t::2 ").unwrap();
        assert_eq!(ranges, [
            Range::parse("0:1").unwrap(),
            Range::parse("1:").unwrap(),
            Range::parse("::2").unwrap(),
        ]);
        assert_eq!(parse_ranges("3:").unwrap(), [Range::to_end(3)]);
        assert!(matches!(parse_ranges("0:1,,2:"), Err(FormatError::Syntax {..})));
        assert!(matches!(parse_ranges("0:1, 2"), Err(FormatError::Syntax {spec}) if spec == "2"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_json_form() {
        let r = Range::parse("1:5:2").unwrap();
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"start":1,"stop":5,"step":2}"#);
        assert_eq!(serde_json::from_str::<Range>(&json).unwrap(), r);
        let open: Range = serde_json::from_str(r#"{"start":3,"stop":null,"step":1}"#).unwrap();
        assert_eq!(open, Range::to_end(3));
        assert!(serde_json::from_str::<Range>(r#"{"start":0,"stop":null,"step":0}"#).is_err());
        assert!(serde_json::from_str::<Range>(r#"{"start":0,"stop":4,"step":-1}"#).is_err());
    }

    proptest! {
        #[test]
        fn display_round_trip(
            start in -1000isize..1000,
            stop in proptest::option::of(-1000isize..1000),
            step in 1isize..100,
        ) {
            let r = Range::new(start, stop, step).unwrap();
            prop_assert_eq!(Range::parse(&r.to_string()).unwrap(), r);
        }

        #[test]
        fn count_matches_indices(
            start in -50isize..50,
            stop in proptest::option::of(-50isize..50),
            step in 1isize..10,
            len in 0usize..50,
        ) {
            let r = Range::new(start, stop, step).unwrap();
            prop_assert_eq!(r.count(len), r.indices(len).count());
        }
    }
}
