use crate::engine::{PartitionRun, RangePartitioner, RangeSet};
use crate::pattern::{PatternFlags, range_to_pattern_with};
use crate::{LabeledRange, Result};
use std::time::Duration;

/// Upper bound on split rounds used by [`Options::default`].
pub const DEFAULT_MAX_ROUNDS: usize = 10_000;

/// Options that affect pattern rendering and partitioning.
#[derive(Debug, Clone)]
pub struct Options {
    /// Rendering flags applied to every generated pattern.
    pub flags: PatternFlags,
    /// Maximum number of split rounds before the partitioner gives up with
    /// [`crate::Error::NoProgress`].
    pub max_rounds: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options { flags: PatternFlags::empty(), max_rounds: DEFAULT_MAX_ROUNDS }
    }
}

/// A compact record of one split, for verbose output.
#[derive(Debug, Clone)]
pub struct SplitSummary {
    pub round: usize,
    pub duration: Duration,
    pub index: usize,
    pub shared: String,
    pub kept_owner: String,
    pub exception_owner: String,
    pub remainders: usize,
}

/// Additional details returned by [`partition_verbose_with`].
///
/// Meant for debugging and the CLI report, not for programmatic decisions.
#[derive(Debug, Clone)]
pub struct PartitionDetails {
    /// Total elapsed time.
    pub total: Duration,
    /// Ranges passed in.
    pub input: usize,
    /// Exact duplicates dropped before splitting.
    pub duplicates: usize,
    /// Time spent in the split loop + per-split trace.
    pub splitting: Duration,
    pub splits: Vec<SplitSummary>,
    /// Time spent rendering patterns.
    pub patterns: Duration,
}

/// Result from [`partition_verbose_with`].
#[derive(Debug, Clone)]
pub struct PartitionResultVerbose {
    pub set: RangeSet,
    pub details: PartitionDetails,
}

/// Pattern for `[a, b]` rendered with `options.flags`.
pub fn pattern_with(a: &str, b: &str, options: &Options) -> Result<String> {
    range_to_pattern_with(a, b, options.flags)
}

/// Partition `ranges` with default [`Options`].
///
/// # Example
/// ```
/// use dialrange::{LabeledRange, partition};
///
/// let ranges = vec![
///     LabeledRange::new("A", "1000", "1999", 0).unwrap(),
///     LabeledRange::new("B", "1500", "2500", 0).unwrap(),
/// ];
/// let set = partition(&ranges).unwrap();
/// let pairs = set.conflict_pairs();
/// assert_eq!(pairs.len(), 1);
/// assert_eq!((pairs[0].kept.start(), pairs[0].kept.end()), ("1500", "1999"));
/// ```
pub fn partition(ranges: &[LabeledRange]) -> Result<RangeSet> {
    partition_with(ranges, &Options::default())
}

/// Partition `ranges` with the provided `options`.
pub fn partition_with(ranges: &[LabeledRange], options: &Options) -> Result<RangeSet> {
    RangePartitioner::new(ranges).run(options)
}

/// Partition `ranges` and return per-split details as well.
pub fn partition_verbose_with(ranges: &[LabeledRange], options: &Options) -> Result<PartitionResultVerbose> {
    let PartitionRun { set, metrics } = RangePartitioner::new(ranges).run_with_metrics(options)?;

    let splits = metrics
        .rounds
        .into_iter()
        .map(|r| SplitSummary {
            round: r.round,
            duration: r.duration,
            index: r.index,
            shared: r.shared,
            kept_owner: r.kept_owner,
            exception_owner: r.exception_owner,
            remainders: r.remainders,
        })
        .collect();

    let details = PartitionDetails {
        total: metrics.total,
        input: metrics.input,
        duplicates: metrics.duplicates,
        splitting: metrics.splitting,
        splits,
        patterns: metrics.patterns,
    };
    Ok(PartitionResultVerbose { set, details })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labeled(owner: &str, start: &str, end: &str) -> LabeledRange {
        LabeledRange::new(owner, start, end, 0).unwrap()
    }

    #[test]
    fn pattern_with_uses_option_flags() {
        let opts = Options { flags: PatternFlags::ANCHORED, ..Options::default() };
        assert_eq!(pattern_with("10", "99", &opts).unwrap(), "^[1-9][0-9]$");
    }

    #[test]
    fn partition_verbose_reports_splits() {
        let ranges = vec![labeled("A", "1000", "1999"), labeled("B", "1500", "2500"), labeled("A", "1000", "1999")];
        let res = partition_verbose_with(&ranges, &Options::default()).unwrap();

        assert_eq!(res.details.input, 3);
        assert_eq!(res.details.duplicates, 1);
        assert_eq!(res.details.splits.len(), 1);
        let split = &res.details.splits[0];
        assert_eq!(split.shared, "1500-1999");
        assert_eq!((split.kept_owner.as_str(), split.exception_owner.as_str()), ("A", "B"));
        assert_eq!(split.remainders, 2);
        assert!(res.details.splitting <= res.details.total);
        assert_eq!(res.set.len(), 4);
    }

    #[test]
    fn partition_with_renders_flags_into_fragments() {
        let opts = Options { flags: PatternFlags::ANCHORED | PatternFlags::NON_CAPTURING, ..Options::default() };
        let set = partition_with(&[labeled("A", "5", "25")], &opts).unwrap();
        assert_eq!(set.fragments()[0].pattern(), "^(?:[5-9]|1[0-9]|2[0-5])$");
    }
}
