#![forbid(unsafe_code)]
//! seqflow: composable sequence operators that compile to a single concrete
//! type per pipeline, with pooled materialization and an async bridge.
//!
//! ```
//! use seqflow::prelude::*;
//!
//! let data = [1, 2, 3, 4, 5];
//! let squares = from_slice(&data)
//!     .filter(|x| **x % 2 == 0)
//!     .select(|x| x * x);
//! assert_eq!(squares.to_vec(), vec![4, 16]);
//! assert_eq!(squares.count(), 2);
//! ```

pub use seqflow_exec as exec;
pub use seqflow_mem as mem;
pub use seqflow_operators as operators;

pub use seqflow_core::{
    BufferConfig, Cursor, CursorIter, ElementResult, Error, Found, IndexedSequence, Result,
    ScopedCursor, Sequence,
};
pub use seqflow_exec::{as_async, to_array_async, to_vec_async, AsyncCursor, AsyncSequence};
pub use seqflow_mem::{LargeBuffer, PoolStats, PooledSegment, SegmentPool};
pub use seqflow_operators::{empty, from_slice, range, repeat, ReadOnlyView, SequenceExt};

pub mod prelude {
    pub use seqflow_core::prelude::*;
    pub use seqflow_exec::{as_async, to_array_async, to_vec_async, CancellationToken};
    pub use seqflow_mem::SegmentPool;
    pub use seqflow_operators::{empty, from_slice, range, repeat, ReadOnlyView, SequenceExt};
}
