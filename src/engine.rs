//! Range partitioning engine.
//!
//! This module is the entry point for resolving overlapping, owner-labeled
//! digit ranges into disjoint *owned* fragments and paired *conflict*
//! fragments. It is split into focused submodules under `src/engine/` while
//! keeping public paths stable (`crate::engine::RangePartitioner`,
//! `crate::engine::RangeSet`).
//!
//! ## How the parts work together
//!
//! ```text
//! ranges (all) ──┐
//!               │  check_alignment              (partitioner.rs)
//!               │  dedup_ranges                 (dedup.rs)
//!               └───────────────┬──────────────
//!                               │
//!                    sort by (start, end), assign indices
//!                               │
//!                               v
//!                RangePartitioner::split_to_fixpoint
//!                  - scan active pairs (i < j)
//!                  - first overlap -> conflict pair (fresh index)
//!                  - remainders back onto the active queue
//!                  - repeat until a scan finds nothing
//!                               │
//!                               v
//!                  render patterns (crate::pattern)
//!                               │
//!                               v
//!                     RangeSet + PartitionMetrics  (metrics.rs)
//! ```
//!
//! The engine is a **fixed point** loop: each round
//! either splits one overlapping pair or proves that none is left. Splitting
//! never mutates the list being scanned; resolved fragments move to a separate
//! arena and only the active queue is rescanned.
//!
//! ## Responsibilities by module
//!
//! - `partitioner.rs`: the split loop, progress guard and pattern rendering.
//! - `dedup.rs`: stable keys used to drop exact duplicate input rows.
//! - `metrics.rs`: per-round timing and split records for verbose output.
//! - `range_set.rs`: the result container and conflict pair views.
//!
//! ## Debugging
//!
//! Run the CLI with `DIALRANGE_LOG=dialrange=debug` to log every split.

#[path = "engine/dedup.rs"]
mod dedup;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/partitioner.rs"]
mod partitioner;
#[path = "engine/range_set.rs"]
mod range_set;

pub use metrics::{PartitionMetrics, PartitionRun, RoundMetrics};
pub use partitioner::RangePartitioner;
pub use range_set::{ConflictPair, Fragment, RangeSet};
