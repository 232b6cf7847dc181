//! Partition run metrics.
//!
//! Small structs used to observe a partition run:
//!
//! - `RangePartitioner::run` for normal operation.
//! - `RangePartitioner::run_with_metrics` for the CLI report and for
//!   debugging unexpected splits.
//!
//! A round record is kept for every split; inputs are small (tens of ranges),
//! so the records are always collected.

use super::range_set::RangeSet;
use std::time::Duration;

#[derive(Debug, Default, Clone)]
pub struct PartitionMetrics {
    /// Total elapsed time for [`super::RangePartitioner::run_with_metrics`].
    pub total: Duration,
    /// Ranges handed to the partitioner.
    pub input: usize,
    /// Exact duplicates dropped before splitting.
    pub duplicates: usize,
    /// Time spent in the split loop.
    pub splitting: Duration,
    /// One record per split, in order.
    pub rounds: Vec<RoundMetrics>,
    /// Time spent rendering fragment patterns.
    pub patterns: Duration,
}

/// A single split of two overlapping ranges.
#[derive(Debug, Default, Clone)]
pub struct RoundMetrics {
    /// 1-based round number.
    pub round: usize,
    /// Elapsed time for the round (scan + split).
    pub duration: Duration,
    /// Index given to the conflict pair.
    pub index: usize,
    /// The shared sub-range, as `low-high`.
    pub shared: String,
    /// Owner of the range that came first in scan order.
    pub kept_owner: String,
    /// Owner of the other range.
    pub exception_owner: String,
    /// Remainders pushed back onto the active queue.
    pub remainders: usize,
}

/// Partition output bundled with timing information.
#[derive(Debug, Clone)]
pub struct PartitionRun {
    pub set: RangeSet,
    pub metrics: PartitionMetrics,
}
