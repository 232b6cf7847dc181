//! Partition results.
//!
//! A [`RangeSet`] holds every final fragment sorted by `(start, end)`.
//! Fragments with `overlapped == false` are owned outright and never
//! intersect each other. Fragments with `overlapped == true` come in pairs
//! that share an `index` and the same numbers. Each member is written in its
//! own range's width, so `0150-0199` can pair with `150-199`:
//!
//! ```text
//! index 3   1500-1999  A   overlapped  ── kept
//! index 3   1500-1999  B   overlapped  ── exception
//! index 0   1000-1499  A
//! index 1   2000-2500  B
//! ```
//!
//! Which member of a pair is *kept* follows scan order (earlier start, then
//! input order). The partitioner applies no other tie-break.

use crate::LabeledRange;
use std::collections::HashMap;

/// One final piece of the partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub(crate) range: LabeledRange,
    pub(crate) overlapped: bool,
    pub(crate) index: usize,
    pub(crate) pattern: String,
}

impl Fragment {
    pub fn range(&self) -> &LabeledRange {
        &self.range
    }

    pub fn owner(&self) -> &str {
        self.range.owner()
    }

    pub fn start(&self) -> &str {
        self.range.start()
    }

    pub fn end(&self) -> &str {
        self.range.end()
    }

    pub fn local_digits(&self) -> usize {
        self.range.local_digits()
    }

    /// True for members of a conflict pair.
    pub fn overlapped(&self) -> bool {
        self.overlapped
    }

    /// Input position for owned fragments, pair id for conflict fragments.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Regular expression matching exactly this fragment's numbers.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

/// Two fragments covering the same numbers, claimed by different input ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConflictPair<'a> {
    pub index: usize,
    pub kept: &'a Fragment,
    pub exception: &'a Fragment,
}

/// Ordered partition output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeSet {
    fragments: Vec<Fragment>,
}

impl RangeSet {
    pub(crate) fn new(mut fragments: Vec<Fragment>) -> Self {
        // Stable: members of a pair keep their push order.
        fragments.sort_by(|a, b| {
            a.range
                .range()
                .low_value()
                .cmp(b.range.range().low_value())
                .then_with(|| a.range.range().high_value().cmp(b.range.range().high_value()))
        });
        RangeSet { fragments }
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fragment> {
        self.fragments.iter()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Fragments owned by a single range.
    pub fn owned(&self) -> impl Iterator<Item = &Fragment> + '_ {
        self.fragments.iter().filter(|f| !f.overlapped)
    }

    /// Members of conflict pairs.
    pub fn conflicts(&self) -> impl Iterator<Item = &Fragment> + '_ {
        self.fragments.iter().filter(|f| f.overlapped)
    }

    /// Conflict pairs in output order.
    pub fn conflict_pairs(&self) -> Vec<ConflictPair<'_>> {
        let mut first_seen: HashMap<usize, &Fragment> = HashMap::new();
        let mut pairs = Vec::new();
        for fragment in self.conflicts() {
            match first_seen.remove(&fragment.index) {
                Some(kept) => pairs.push(ConflictPair { index: fragment.index, kept, exception: fragment }),
                None => {
                    first_seen.insert(fragment.index, fragment);
                }
            }
        }
        pairs
    }
}

impl<'a> IntoIterator for &'a RangeSet {
    type Item = &'a Fragment;
    type IntoIter = std::slice::Iter<'a, Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.iter()
    }
}
