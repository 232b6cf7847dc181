//! Digit ranges and owner-labeled ranges.
//!
//! A [`DigitRange`] is an inclusive pair of decimal bounds. When both bounds
//! are written with the same number of digits that length is treated as a
//! fixed width: every bound derived from the range (intersections,
//! remainders) is zero-padded back to it, so `0100-0199` minus `0150-0199`
//! yields `0100-0149`, not `100-149`.
//!
//! ```text
//!   self:      |-------------------|
//!   cut:              |------|
//!   difference: |-----|      |-----|     (0, 1 or 2 remainders)
//!   intersection:     |------|
//! ```

use crate::digits::{Decimal, extract_digits};
use crate::pattern::{PatternFlags, range_to_pattern_with};
use crate::{Error, Result};
use std::fmt;

/// Inclusive range of decimal integers written as digit strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitRange {
    low: String,
    high: String,
    low_value: Decimal,
    high_value: Decimal,
    /// Fixed digit width, or `0` when the bounds are free-width integers.
    width: usize,
}

impl DigitRange {
    /// Build a range from two digit strings. An inverted pair is swapped.
    pub fn new(low: &str, high: &str) -> Result<Self> {
        let low_value = Decimal::parse(low)?;
        let high_value = Decimal::parse(high)?;
        let width = if low.len() == high.len() { low.len() } else { 0 };

        if low_value > high_value {
            return Ok(DigitRange {
                low: high.to_string(),
                high: low.to_string(),
                low_value: high_value,
                high_value: low_value,
                width,
            });
        }
        Ok(DigitRange { low: low.to_string(), high: high.to_string(), low_value, high_value, width })
    }

    fn from_values(low_value: Decimal, high_value: Decimal, width: usize) -> Self {
        DigitRange {
            low: low_value.to_padded(width),
            high: high_value.to_padded(width),
            low_value,
            high_value,
            width,
        }
    }

    pub fn low(&self) -> &str {
        &self.low
    }

    pub fn high(&self) -> &str {
        &self.high
    }

    pub fn low_value(&self) -> &Decimal {
        &self.low_value
    }

    pub fn high_value(&self) -> &Decimal {
        &self.high_value
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// True when the range holds exactly one number.
    pub fn is_single(&self) -> bool {
        self.low_value == self.high_value
    }

    pub fn contains(&self, value: &Decimal) -> bool {
        &self.low_value <= value && value <= &self.high_value
    }

    /// Same numbers, ignoring how the bounds are written.
    pub fn same_bounds(&self, other: &DigitRange) -> bool {
        self.low_value == other.low_value && self.high_value == other.high_value
    }

    pub fn overlaps(&self, other: &DigitRange) -> bool {
        self.low_value <= other.high_value && other.low_value <= self.high_value
    }

    /// Exact overlap of two ranges, written in `self`'s width.
    ///
    /// `0100-0199 ∩ 150-250` is `0150-0199`, while `150-250 ∩ 0100-0199` is
    /// `150-199`: same numbers, each side keeps the strings it matches.
    pub fn intersection(&self, other: &DigitRange) -> Option<DigitRange> {
        if !self.overlaps(other) {
            return None;
        }
        let low = self.low_value.clone().max(other.low_value.clone());
        let high = self.high_value.clone().min(other.high_value.clone());
        Some(DigitRange::from_values(low, high, self.width))
    }

    /// The parts of `self` outside `cut`, lowest first.
    pub fn difference(&self, cut: &DigitRange) -> Vec<DigitRange> {
        if !self.overlaps(cut) {
            return vec![self.clone()];
        }

        let mut remainders = Vec::with_capacity(2);
        if self.low_value < cut.low_value {
            if let Some(below) = cut.low_value.pred() {
                remainders.push(DigitRange::from_values(self.low_value.clone(), below, self.width));
            }
        }
        if cut.high_value < self.high_value {
            remainders.push(DigitRange::from_values(cut.high_value.succ(), self.high_value.clone(), self.width));
        }
        remainders
    }

    /// Regular expression matching exactly this range.
    pub fn pattern(&self, flags: PatternFlags) -> Result<String> {
        range_to_pattern_with(&self.low, &self.high, flags)
    }
}

impl fmt::Display for DigitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

/// A digit range owned by a site.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LabeledRange {
    owner: String,
    range: DigitRange,
    local_digits: usize,
}

impl LabeledRange {
    /// Build a range from digit strings.
    ///
    /// With `local_digits > 0` only the trailing `local_digits` digits of each
    /// bound are kept (shorter bounds are zero-padded). The discarded leading
    /// parts must agree, otherwise the bounds would be compared across
    /// different prefixes and [`Error::AmbiguousPrefix`] is returned.
    pub fn new(owner: impl Into<String>, start: &str, end: &str, local_digits: usize) -> Result<Self> {
        let owner = owner.into();
        let range = if local_digits == 0 {
            DigitRange::new(start, end)?
        } else {
            let (start_prefix, start_local) = split_local(start, local_digits)?;
            let (end_prefix, end_local) = split_local(end, local_digits)?;
            if start_prefix != end_prefix {
                return Err(Error::AmbiguousPrefix(format!(
                    "{owner}: {start}-{end} differ before the last {local_digits} digits"
                )));
            }
            DigitRange::new(&start_local, &end_local)?
        };
        Ok(LabeledRange { owner, range, local_digits })
    }

    /// Build a range from formatted telephone numbers such as `+1 (425) 555-0100`.
    pub fn from_did(owner: impl Into<String>, start: &str, end: &str, local_digits: usize) -> Result<Self> {
        let start = extract_digits(start)?;
        let end = extract_digits(end)?;
        Self::new(owner, &start, &end, local_digits)
    }

    pub(crate) fn with_range(&self, range: DigitRange) -> Self {
        LabeledRange { owner: self.owner.clone(), range, local_digits: self.local_digits }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn range(&self) -> &DigitRange {
        &self.range
    }

    pub fn start(&self) -> &str {
        self.range.low()
    }

    pub fn end(&self) -> &str {
        self.range.high()
    }

    pub fn local_digits(&self) -> usize {
        self.local_digits
    }
}

impl fmt::Display for LabeledRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.range, self.owner)
    }
}

/// Split `digits` into (prefix value, trailing `local_digits` digits).
fn split_local(digits: &str, local_digits: usize) -> Result<(Decimal, String)> {
    let value = Decimal::parse(digits)?;
    if digits.len() <= local_digits {
        return Ok((Decimal::zero(), value.to_padded(local_digits)));
    }
    let (prefix, local) = digits.split_at(digits.len() - local_digits);
    Ok((Decimal::parse(prefix)?, local.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn range(low: &str, high: &str) -> DigitRange {
        DigitRange::new(low, high).unwrap()
    }

    #[test]
    fn new_swaps_inverted_bounds() {
        let r = range("2500", "1500");
        assert_eq!((r.low(), r.high()), ("1500", "2500"));
    }

    #[test]
    fn width_only_for_equal_length_bounds() {
        assert_eq!(range("0099", "0150").width(), 4);
        assert_eq!(range("5", "25").width(), 0);
    }

    #[test]
    fn intersection_is_exact() {
        let a = range("1000", "1999");
        let b = range("1500", "2500");
        assert_eq!(a.intersection(&b).unwrap(), range("1500", "1999"));
        assert!(a.intersection(&range("2000", "2999")).is_none());
        assert_eq!(a.intersection(&range("1999", "3000")).unwrap(), range("1999", "1999"));
    }

    #[test]
    fn intersection_keeps_each_sides_width() {
        let padded = range("0100", "0199");
        let free = range("150", "250");
        assert_eq!(padded.intersection(&free).unwrap().to_string(), "0150-0199");
        assert_eq!(free.intersection(&padded).unwrap().to_string(), "150-199");
        assert!(padded.intersection(&free).unwrap().same_bounds(&free.intersection(&padded).unwrap()));
        assert_eq!(range("5", "25").intersection(&range("0010", "0030")).unwrap().to_string(), "10-25");
    }

    #[test]
    fn difference_yields_up_to_two_remainders() {
        let outer = range("0100", "0199");
        assert_eq!(outer.difference(&range("0120", "0129")), vec![range("0100", "0119"), range("0130", "0199")]);
        assert_eq!(outer.difference(&range("0150", "0250")), vec![range("0100", "0149")]);
        assert!(outer.difference(&range("0000", "0999")).is_empty());
        assert_eq!(outer.difference(&range("0500", "0599")), vec![outer.clone()]);
    }

    #[test]
    fn difference_keeps_free_width_bounds_canonical() {
        let outer = range("5", "25");
        let pieces = outer.difference(&range("10", "10"));
        assert_eq!(pieces.iter().map(|r| r.to_string()).collect::<Vec<_>>(), vec!["5-9", "11-25"]);
    }

    #[test]
    fn labeled_range_keeps_trailing_local_digits() {
        let r = LabeledRange::new("Redmond", "14255550100", "14255550199", 4).unwrap();
        assert_eq!((r.start(), r.end()), ("0100", "0199"));
        assert_eq!(r.local_digits(), 4);

        let short = LabeledRange::new("Lab", "7", "42", 3).unwrap();
        assert_eq!((short.start(), short.end()), ("007", "042"));
    }

    #[test]
    fn labeled_range_rejects_mismatched_prefix() {
        let err = LabeledRange::new("Redmond", "14255550100", "14255560099", 4).unwrap_err();
        assert!(matches!(err, Error::AmbiguousPrefix(_)));
    }

    #[test]
    fn from_did_accepts_formatted_numbers() {
        let r = LabeledRange::from_did("HQ", "+1 (425) 555-0100", "tel:+14255550199", 4).unwrap();
        assert_eq!(r.to_string(), "0100-0199 [HQ]");
    }
}
