//! Decimal range to regular expression generation and DID range
//! partitioning for dial-plan normalization rules.
//!
//! Two pieces:
//!
//! - [`range_to_pattern`]: a minimal regex matching exactly the integers in an
//!   inclusive range of digit strings.
//! - [`partition`]: resolve overlapping owner-labeled ranges into owned
//!   fragments and paired conflict fragments, each with its pattern.

#[macro_use]
mod macros;
mod api;
mod digits;
mod engine;
mod error;
mod pattern;
mod range;

pub use api::{
    DEFAULT_MAX_ROUNDS, Options, PartitionDetails, PartitionResultVerbose, SplitSummary, partition,
    partition_verbose_with, partition_with, pattern_with,
};
pub use digits::{Decimal, extract_digits};
pub use engine::{ConflictPair, Fragment, PartitionMetrics, PartitionRun, RangePartitioner, RangeSet, RoundMetrics};
pub use error::{Error, Result};
pub use pattern::{PatternFlags, PatternFragment, pattern_fragments, range_to_pattern, range_to_pattern_with};
pub use range::{DigitRange, LabeledRange};
