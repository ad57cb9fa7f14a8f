//! Async view of a synchronous sequence.
//!
//! Every step checks the `CancellationToken` first and then performs one
//! synchronous `advance`. Cancellation is observed between steps, never in
//! the middle of one, and a canceled step does not touch the source.

use futures::stream::{self, Stream};
use tokio_util::sync::CancellationToken;

use seqflow_core::prelude::*;

use crate::metrics::emit_span;

/// Wrap `source` for consumption from async code.
pub fn as_async<S: Sequence>(source: S) -> AsyncSequence<S> {
    AsyncSequence { source }
}

#[derive(Clone)]
pub struct AsyncSequence<S> {
    source: S,
}

impl<S: Sequence> AsyncSequence<S> {
    /// Fails with `OperationCanceled` if `token` is already canceled.
    pub fn cursor(&self, token: &CancellationToken) -> Result<AsyncCursor<S::Cursor>> {
        check(token)?;
        Ok(AsyncCursor {
            inner: ScopedCursor::new(self.source.cursor()),
            token: token.clone(),
        })
    }

    pub fn len_hint(&self) -> Option<usize> {
        self.source.len_hint()
    }

    pub fn inner(&self) -> &S {
        &self.source
    }

    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S> AsyncSequence<S>
where
    S: Sequence + Send + 'static,
    S::Item: Send + 'static,
{
    /// See [`crate::to_vec_async`].
    pub async fn to_vec(self, token: &CancellationToken) -> Result<Vec<S::Item>> {
        crate::blocking::to_vec_async(self.source, token).await
    }

    /// See [`crate::to_array_async`].
    pub async fn to_array(self, token: &CancellationToken) -> Result<Box<[S::Item]>> {
        crate::blocking::to_array_async(self.source, token).await
    }
}

pub struct AsyncCursor<C: Cursor> {
    inner: ScopedCursor<C>,
    token: CancellationToken,
}

impl<C: Cursor> AsyncCursor<C> {
    /// Returns `Ok(false)` at the end of the source and after `close`.
    pub async fn advance(&mut self) -> Result<bool> {
        check(&self.token)?;
        Ok(self.inner.advance())
    }

    pub fn current(&self) -> C::Item {
        self.inner.current()
    }

    /// Release the underlying cursor. Idempotent; dropping does the same.
    pub fn close(&mut self) {
        self.inner.dispose();
    }

    pub fn is_closed(&self) -> bool {
        self.inner.is_released()
    }

    /// Yields `Err(OperationCanceled)` once and then ends if the token fires.
    pub fn into_stream(self) -> impl Stream<Item = Result<C::Item>> {
        stream::unfold(Some(self), |state| async move {
            let Some(mut cursor) = state else {
                return None;
            };
            match cursor.advance().await {
                Ok(true) => {
                    let item = cursor.current();
                    Some((Ok(item), Some(cursor)))
                }
                Ok(false) => {
                    cursor.close();
                    None
                }
                Err(err) => {
                    cursor.close();
                    Some((Err(err), None))
                }
            }
        })
    }
}

pub(crate) fn check(token: &CancellationToken) -> Result<()> {
    if token.is_cancelled() {
        emit_span("canceled", &[]);
        return Err(Error::OperationCanceled);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Counting {
        advanced: Rc<Cell<usize>>,
        released: Rc<Cell<usize>>,
        len: usize,
    }

    struct CountingCursor {
        advanced: Rc<Cell<usize>>,
        released: Rc<Cell<usize>>,
        pos: usize,
        len: usize,
    }

    impl Sequence for Counting {
        type Item = usize;
        type Cursor = CountingCursor;

        fn cursor(&self) -> CountingCursor {
            CountingCursor {
                advanced: self.advanced.clone(),
                released: self.released.clone(),
                pos: 0,
                len: self.len,
            }
        }
    }

    impl Cursor for CountingCursor {
        type Item = usize;

        fn advance(&mut self) -> bool {
            self.advanced.set(self.advanced.get() + 1);
            if self.pos < self.len {
                self.pos += 1;
                true
            } else {
                false
            }
        }

        fn current(&self) -> usize {
            self.pos - 1
        }

        fn release(&mut self) {
            self.released.set(self.released.get() + 1);
        }
    }

    fn counting(len: usize) -> (Counting, Rc<Cell<usize>>, Rc<Cell<usize>>) {
        let advanced = Rc::new(Cell::new(0));
        let released = Rc::new(Cell::new(0));
        let seq = Counting {
            advanced: advanced.clone(),
            released: released.clone(),
            len,
        };
        (seq, advanced, released)
    }

    #[tokio::test]
    async fn cancel_between_steps_does_not_advance_source() {
        let (seq, advanced, released) = counting(5);
        let token = CancellationToken::new();
        let seq = as_async(seq);
        let mut cursor = seq.cursor(&token).unwrap();

        assert_eq!(cursor.advance().await, Ok(true));
        assert_eq!(cursor.current(), 0);
        token.cancel();
        assert_eq!(cursor.advance().await, Err(Error::OperationCanceled));
        assert_eq!(advanced.get(), 1);

        drop(cursor);
        assert_eq!(released.get(), 1);
    }

    #[tokio::test]
    async fn close_releases_once() {
        let (seq, _, released) = counting(3);
        let token = CancellationToken::new();
        let mut cursor = as_async(seq).cursor(&token).unwrap();
        cursor.close();
        cursor.close();
        assert!(cursor.is_closed());
        assert_eq!(cursor.advance().await, Ok(false));
        drop(cursor);
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn canceled_token_rejects_cursor() {
        let (seq, advanced, _) = counting(3);
        let token = CancellationToken::new();
        token.cancel();
        assert!(matches!(
            as_async(seq).cursor(&token),
            Err(Error::OperationCanceled)
        ));
        assert_eq!(advanced.get(), 0);
    }
}
