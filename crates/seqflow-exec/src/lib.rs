#![forbid(unsafe_code)]
//! seqflow-exec: bridges synchronous pipelines into async code.
//!
//! - `adapter`: `as_async` / `AsyncCursor`, one cancellation check per step.
//! - `blocking`: `to_vec_async` / `to_array_async` run the full scan on a
//!   blocking worker so the async caller never stalls its executor.
//! - `metrics`: optional tracing hook (feature `tracing`).

pub mod adapter;
pub mod blocking;
pub mod metrics;

pub use adapter::{as_async, AsyncCursor, AsyncSequence};
pub use blocking::{to_array_async, to_vec_async};
pub use tokio_util::sync::CancellationToken;
