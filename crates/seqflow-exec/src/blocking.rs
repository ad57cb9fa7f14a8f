//! Whole-pipeline materialization on tokio's blocking pool.
//!
//! The token is checked once, before the worker starts. A scan that is
//! already running is not interrupted. A panic inside a callback is
//! resumed on the awaiting task with its original payload.

use std::panic;

use tokio_util::sync::CancellationToken;

use seqflow_core::prelude::*;
use seqflow_operators::materialize;

use crate::adapter::check;
use crate::metrics::emit_span;

pub async fn to_vec_async<S>(source: S, token: &CancellationToken) -> Result<Vec<S::Item>>
where
    S: Sequence + Send + 'static,
    S::Item: Send + 'static,
{
    check(token)?;
    let out = match tokio::task::spawn_blocking(move || materialize::to_vec(&source)).await {
        Ok(out) => out,
        Err(err) if err.is_panic() => panic::resume_unwind(err.into_panic()),
        // Only reachable when the runtime shuts down under the worker.
        Err(err) => return Err(Error::Worker(err.to_string())),
    };
    emit_span("to_vec_async", &[("len", out.len().to_string())]);
    Ok(out)
}

pub async fn to_array_async<S>(source: S, token: &CancellationToken) -> Result<Box<[S::Item]>>
where
    S: Sequence + Send + 'static,
    S::Item: Send + 'static,
{
    to_vec_async(source, token)
        .await
        .map(Vec::into_boxed_slice)
}
