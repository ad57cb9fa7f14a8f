//! Convenient re-exports for downstream crates.

pub use crate::config::BufferConfig;
pub use crate::error::{Error, Result};
pub use crate::result::{ElementResult, Found};
pub use crate::scoped::{CursorIter, ScopedCursor};
pub use crate::sequence::{Cursor, IndexedSequence, Sequence};
