//! Error types for range pattern generation and partitioning.

use thiserror::Error;

/// Errors raised by [`crate::range_to_pattern`] and the partitioner.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Empty bound, non-digit character or otherwise malformed input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Bounds that cannot be compared at the same digit position.
    #[error("ambiguous prefix: {0}")]
    AmbiguousPrefix(String),

    /// The split loop stopped making progress.
    #[error("partition made no progress in round {round}")]
    NoProgress { round: usize },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_include_context() {
        let err = Error::InvalidArgument("bound '12a' contains a non-digit".into());
        assert_eq!(err.to_string(), "invalid argument: bound '12a' contains a non-digit");

        let err = Error::NoProgress { round: 7 };
        assert_eq!(err.to_string(), "partition made no progress in round 7");
    }
}
