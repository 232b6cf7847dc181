//! Overlap splitting to a fixed point.
//!
//! This module is the operational core of the engine:
//!
//! - Reject inputs whose ranges use different local digit counts.
//! - Drop exact duplicates (see `dedup.rs`).
//! - Repeatedly split the first overlapping pair of active ranges until a
//!   full scan finds no overlap (a fixed point).
//! - Render a pattern for every final fragment (see `crate::pattern`).
//!
//! ## Key concepts
//!
//! - **Active queue**: ranges still taking part in the scan, kept sorted by
//!   `(start, end)` with input order breaking ties.
//! - **Resolved arena**: conflict fragments; they never re-enter the scan.
//! - **Index**: every input range gets its position as index, remainders
//!   inherit it, each conflict pair gets a fresh one.
//!
//! ## Round structure
//!
//! ```text
//! active: [A 1000-1999 #0] [B 1500-2500 #1]
//!            │  first overlap (i=0, j=1)
//!            ▼
//! resolved += [A 1500-1999 #2 overlapped] [B 1500-1999 #2 overlapped]
//! active    = [A 1000-1499 #0] [B 2000-2500 #1]
//!            │  rescan: no overlap -> fixed point
//!            ▼
//! owned     = active (overlapped = false)
//! ```
//!
//! Every split removes a non-empty intersection from both sides, so the
//! active queue covers strictly fewer numbers after each round. The loop
//! still checks this and caps the number of rounds
//! (`Options::max_rounds`); a violation is reported as
//! [`Error::NoProgress`] and no partial result is returned.

use super::dedup::dedup_ranges;
use super::metrics::{PartitionMetrics, PartitionRun, RoundMetrics};
use super::range_set::{Fragment, RangeSet};
use crate::{DigitRange, Error, LabeledRange, Options, Result};
use std::time::Instant;

/// A range still taking part in the overlap scan.
#[derive(Debug, Clone)]
struct Active {
    range: LabeledRange,
    index: usize,
}

/// A conflict fragment, waiting for its pattern.
#[derive(Debug, Clone)]
struct Resolved {
    range: LabeledRange,
    index: usize,
}

/// Partitions owner-labeled ranges into owned and conflicting fragments.
///
/// Usage: create with `RangePartitioner::new(&ranges)` then call
/// `run(&options)`.
///
/// ```text
/// new() -> split_to_fixpoint() -> render()
///              │                    └─ one pattern per fragment
///              └─ repeatedly split the first overlapping pair
/// ```
#[derive(Debug)]
pub struct RangePartitioner<'a> {
    ranges: &'a [LabeledRange],
    active: Vec<Active>,
    resolved: Vec<Resolved>,
    next_index: usize,
}

impl<'a> RangePartitioner<'a> {
    pub fn new(ranges: &'a [LabeledRange]) -> Self {
        RangePartitioner { ranges, active: Vec::new(), resolved: Vec::new(), next_index: 0 }
    }

    /// All ranges must agree on the local digit count.
    fn check_alignment(&self) -> Result<()> {
        let Some(first) = self.ranges.first() else {
            return Ok(());
        };
        if let Some(other) = self.ranges.iter().find(|r| r.local_digits() != first.local_digits()) {
            return Err(Error::AmbiguousPrefix(format!(
                "{} uses {} local digits but {} uses {}",
                first,
                first.local_digits(),
                other,
                other.local_digits()
            )));
        }
        Ok(())
    }

    /// Load deduplicated input into the active queue. Returns the number of
    /// dropped duplicates.
    fn seed(&mut self) -> usize {
        let (kept, dropped) = dedup_ranges(self.ranges);
        self.active = kept.into_iter().enumerate().map(|(index, range)| Active { range, index }).collect();
        self.next_index = self.active.len();
        self.sort_active();
        dropped
    }

    fn sort_active(&mut self) {
        self.active.sort_by(|a, b| {
            let (a, b) = (a.range.range(), b.range.range());
            a.low_value().cmp(b.low_value()).then_with(|| a.high_value().cmp(b.high_value()))
        });
    }

    /// First overlapping pair `(i, j)` with `i < j` in scan order.
    fn first_overlap(&self) -> Option<(usize, usize)> {
        for (i, left) in self.active.iter().enumerate() {
            let left = left.range.range();
            for (j, right) in self.active.iter().enumerate().skip(i + 1) {
                let right = right.range.range();
                if right.low_value() > left.high_value() {
                    break;
                }
                if left.overlaps(right) {
                    return Some((i, j));
                }
            }
        }
        None
    }

    /// Remainders of `original` outside `shared`; each must be strictly smaller.
    fn remainders(original: &DigitRange, shared: &DigitRange, round: usize) -> Result<Vec<DigitRange>> {
        let rest = original.difference(shared);
        if rest.iter().any(|r| r.same_bounds(original)) {
            return Err(Error::NoProgress { round });
        }
        Ok(rest)
    }

    /// Split overlapping pairs until a full scan finds none.
    fn split_to_fixpoint(&mut self, max_rounds: usize) -> Result<Vec<RoundMetrics>> {
        let mut rounds = Vec::new();
        let mut round = 0;

        loop {
            let round_start = Instant::now();
            let Some((i, j)) = self.first_overlap() else {
                break;
            };
            round += 1;
            if round > max_rounds {
                return Err(Error::NoProgress { round });
            }

            // j > i, so removing j first leaves i in place.
            let right = self.active.remove(j);
            let left = self.active.remove(i);
            // Same numbers on both sides, each written in its owner's width.
            let left_shared =
                left.range.range().intersection(right.range.range()).ok_or(Error::NoProgress { round })?;
            let right_shared =
                right.range.range().intersection(left.range.range()).ok_or(Error::NoProgress { round })?;
            let left_rest = Self::remainders(left.range.range(), &left_shared, round)?;
            let right_rest = Self::remainders(right.range.range(), &right_shared, round)?;
            let shared = left_shared.to_string();

            let index = self.next_index;
            self.next_index += 1;
            self.resolved.push(Resolved { range: left.range.with_range(left_shared), index });
            self.resolved.push(Resolved { range: right.range.with_range(right_shared), index });

            let remainders = left_rest.len() + right_rest.len();
            for rest in left_rest {
                self.active.push(Active { range: left.range.with_range(rest), index: left.index });
            }
            for rest in right_rest {
                self.active.push(Active { range: right.range.with_range(rest), index: right.index });
            }
            self.sort_active();

            tracing::debug!(
                round,
                index,
                shared = %shared,
                kept = %left.range,
                exception = %right.range,
                remainders,
                "split overlapping ranges"
            );

            rounds.push(RoundMetrics {
                round,
                duration: round_start.elapsed(),
                index,
                shared,
                kept_owner: left.range.owner().to_string(),
                exception_owner: right.range.owner().to_string(),
                remainders,
            });
        }

        Ok(rounds)
    }

    /// Attach patterns to every fragment and build the final set.
    fn render(&mut self, options: &Options) -> Result<RangeSet> {
        let conflicts = std::mem::take(&mut self.resolved).into_iter().map(|r| (r.range, true, r.index));
        let owned = std::mem::take(&mut self.active).into_iter().map(|a| (a.range, false, a.index));

        let mut fragments = Vec::new();
        for (range, overlapped, index) in conflicts.chain(owned) {
            let pattern = range.range().pattern(options.flags)?;
            tracing::trace!(range = %range, overlapped, index, %pattern, "fragment pattern");
            fragments.push(Fragment { range, overlapped, index, pattern });
        }
        Ok(RangeSet::new(fragments))
    }

    /// Partition the ranges and return timing details.
    pub fn run_with_metrics(mut self, options: &Options) -> Result<PartitionRun> {
        let total_start = Instant::now();
        self.check_alignment()?;
        let duplicates = self.seed();

        tracing::debug!(input = self.ranges.len(), duplicates, "partitioning ranges");

        let split_start = Instant::now();
        let rounds = self.split_to_fixpoint(options.max_rounds)?;
        let splitting = split_start.elapsed();

        let pattern_start = Instant::now();
        let set = self.render(options)?;
        let patterns = pattern_start.elapsed();

        tracing::debug!(
            fragments = set.len(),
            conflicts = set.conflicts().count(),
            rounds = rounds.len(),
            "partition complete"
        );

        let metrics = PartitionMetrics {
            total: total_start.elapsed(),
            input: self.ranges.len(),
            duplicates,
            splitting,
            rounds,
            patterns,
        };
        Ok(PartitionRun { set, metrics })
    }

    /// Partition the ranges.
    ///
    /// Convenience wrapper that discards timing details. Use
    /// [`run_with_metrics`](Self::run_with_metrics) to inspect the splits.
    pub fn run(self, options: &Options) -> Result<RangeSet> {
        self.run_with_metrics(options).map(|run| run.set)
    }
}
