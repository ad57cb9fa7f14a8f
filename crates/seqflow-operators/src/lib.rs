#![forbid(unsafe_code)]
//! seqflow-operators: value-type sequence operators.
//!
//! Layout:
//! - `source`: built-in sources (slices, repeat, range, empty).
//! - `filter`, `map`, `flatten`, `partition`: composing operators. Each is a
//!   plain struct generic over its source and callback, so a pipeline is one
//!   monomorphized type with no boxing.
//! - `quantifier`, `lookup`, `materialize`: terminal operations.
//! - `view`: read-only list view over indexable pipelines.
//! - `ext`: `SequenceExt`, the method-call surface over all of the above.

pub mod ext;
pub mod filter;
pub mod flatten;
pub mod lookup;
pub mod map;
pub mod materialize;
pub mod partition;
pub mod quantifier;
pub mod source;
pub mod view;

#[cfg(test)]
mod testing;

pub use ext::SequenceExt;
pub use filter::{Where, WhereAt, WhereAtCursor, WhereCursor};
pub use flatten::{SelectMany, SelectManyCursor};
pub use map::{Select, SelectAt, SelectAtCursor, SelectCursor};
pub use partition::{Skip, Take, TakeCursor};
pub use source::{
    empty, from_slice, range, repeat, Empty, EmptyCursor, Range, RangeCursor, Repeat,
    RepeatCursor, SliceCursor, SliceSeq,
};
pub use view::ReadOnlyView;
