#![forbid(unsafe_code)]
//! seqflow-core: capability contracts shared by every seqflow crate.
//!
//! - `Sequence` / `Cursor` / `IndexedSequence`: what a source must provide.
//! - `ScopedCursor` / `CursorIter`: deterministic release and `Iterator` interop.
//! - `ElementResult` / `Found`: non-failing lookup outcomes.
//! - `BufferConfig`: growth and pooling policy for materialization buffers.
//!
//! No pooling, async or operator logic lives here.

pub mod config;
pub mod error;
pub mod prelude;
pub mod result;
pub mod scoped;
pub mod sequence;

pub use config::BufferConfig;
pub use error::{Error, Result};
pub use result::{ElementResult, Found};
pub use scoped::{CursorIter, ScopedCursor};
pub use sequence::{Cursor, IndexedSequence, Sequence};
