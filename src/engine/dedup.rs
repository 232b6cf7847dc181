//! Deduplication keys for partition input.
//!
//! Input rows frequently repeat (the same DID block exported twice, or a site
//! listed once per gateway). Exact duplicates would otherwise be split against
//! each other and show up as a conflict between a site and itself.
//!
//! ## What counts as “the same range”
//!
//! The key combines:
//!
//! - Owner name, compared verbatim
//! - Numeric bounds (`Decimal`)
//! - Fixed width, so `0100-0199` and `100-199` stay distinct (their
//!   patterns match different strings) while free-width `05-100` and
//!   `5-100` collapse
//! - Local digit count
//!
//! The first occurrence wins; later copies are dropped before sorting.

use crate::LabeledRange;
use crate::digits::Decimal;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct RangeKey {
    owner: String,
    low: Decimal,
    high: Decimal,
    width: usize,
    local_digits: usize,
}

impl RangeKey {
    pub(crate) fn from_range(range: &LabeledRange) -> Self {
        RangeKey {
            owner: range.owner().to_string(),
            low: range.range().low_value().clone(),
            high: range.range().high_value().clone(),
            width: range.range().width(),
            local_digits: range.local_digits(),
        }
    }
}

/// Drop exact duplicates, keeping input order. Returns the kept ranges and
/// the number dropped.
pub(crate) fn dedup_ranges(ranges: &[LabeledRange]) -> (Vec<LabeledRange>, usize) {
    let mut seen: HashSet<RangeKey> = HashSet::with_capacity(ranges.len());
    let mut kept = Vec::with_capacity(ranges.len());
    let mut dropped = 0;

    for range in ranges {
        if seen.insert(RangeKey::from_range(range)) {
            kept.push(range.clone());
        } else {
            tracing::debug!(range = %range, "dropping duplicate range");
            dropped += 1;
        }
    }
    (kept, dropped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_occurrence_only() {
        let ranges = vec![
            LabeledRange::new("A", "100", "199", 0).unwrap(),
            LabeledRange::new("B", "100", "199", 0).unwrap(),
            LabeledRange::new("A", "100", "199", 0).unwrap(),
        ];
        let (kept, dropped) = dedup_ranges(&ranges);
        assert_eq!(dropped, 1);
        assert_eq!(kept.iter().map(|r| r.owner()).collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn free_width_bounds_compare_numerically() {
        let a = LabeledRange::new("A", "05", "100", 0).unwrap();
        let b = LabeledRange::new("A", "5", "100", 0).unwrap();
        assert_eq!(RangeKey::from_range(&a), RangeKey::from_range(&b));
    }

    #[test]
    fn padded_and_unpadded_bounds_stay_distinct() {
        let ranges = vec![
            LabeledRange::new("A", "0100", "0199", 0).unwrap(),
            LabeledRange::new("A", "100", "199", 0).unwrap(),
        ];
        let (kept, dropped) = dedup_ranges(&ranges);
        assert_eq!(dropped, 0);
        assert_eq!(kept.iter().map(|r| r.start()).collect::<Vec<_>>(), vec!["0100", "100"]);
    }
}
