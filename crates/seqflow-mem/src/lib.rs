#![forbid(unsafe_code)]
//! seqflow-mem: shared segment pool and the growable buffer built on it.
//!
//! Every materialization of an unknown-length result goes through
//! `LargeBuffer`, which draws its larger segments from a `SegmentPool` and
//! returns them through RAII guards, so storage is released exactly once
//! whether the producing call finishes, bails out early, or unwinds.

pub mod buffer;
pub mod pool;
pub mod tracking;

pub use buffer::LargeBuffer;
pub use pool::{PooledSegment, SegmentPool};
pub use tracking::PoolStats;
