//! Select / SelectAt: per-element projection.
//!
//! The selector runs when `current()` (or `get`) is read, not when the
//! operator is composed, and its result is not cached: reading the same
//! position twice runs the selector twice. Over an indexable source the
//! projection stays indexable.

use seqflow_core::prelude::*;

#[derive(Clone)]
pub struct Select<S, F> {
    source: S,
    selector: F,
}

impl<S, F> Select<S, F> {
    pub fn new(source: S, selector: F) -> Self {
        Self { source, selector }
    }
}

impl<S, F, R> Sequence for Select<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> R + Clone,
{
    type Item = R;
    type Cursor = SelectCursor<S::Cursor, F>;

    fn cursor(&self) -> Self::Cursor {
        SelectCursor {
            source: self.source.cursor(),
            selector: self.selector.clone(),
        }
    }

    fn len_hint(&self) -> Option<usize> {
        self.source.len_hint()
    }
}

impl<S, F, R> IndexedSequence for Select<S, F>
where
    S: IndexedSequence,
    F: Fn(S::Item) -> R + Clone,
{
    fn len(&self) -> usize {
        self.source.len()
    }

    fn get(&self, index: usize) -> Option<R> {
        self.source.get(index).map(&self.selector)
    }
}

pub struct SelectCursor<C, F> {
    source: C,
    selector: F,
}

impl<C, F, R> Cursor for SelectCursor<C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> R,
{
    type Item = R;

    fn advance(&mut self) -> bool {
        self.source.advance()
    }

    fn current(&self) -> R {
        (self.selector)(self.source.current())
    }

    // Skipped elements are never projected.
    fn advance_by(&mut self, n: usize) -> usize {
        self.source.advance_by(n)
    }

    fn release(&mut self) {
        self.source.release();
    }
}

/// Select with a selector that also receives the element's position.
#[derive(Clone)]
pub struct SelectAt<S, F> {
    source: S,
    selector: F,
}

impl<S, F> SelectAt<S, F> {
    pub fn new(source: S, selector: F) -> Self {
        Self { source, selector }
    }
}

impl<S, F, R> Sequence for SelectAt<S, F>
where
    S: Sequence,
    F: Fn(S::Item, usize) -> R + Clone,
{
    type Item = R;
    type Cursor = SelectAtCursor<S::Cursor, F>;

    fn cursor(&self) -> Self::Cursor {
        SelectAtCursor {
            source: self.source.cursor(),
            selector: self.selector.clone(),
            position: 0,
        }
    }

    fn len_hint(&self) -> Option<usize> {
        self.source.len_hint()
    }
}

impl<S, F, R> IndexedSequence for SelectAt<S, F>
where
    S: IndexedSequence,
    F: Fn(S::Item, usize) -> R + Clone,
{
    fn len(&self) -> usize {
        self.source.len()
    }

    fn get(&self, index: usize) -> Option<R> {
        self.source
            .get(index)
            .map(|item| (self.selector)(item, index))
    }
}

pub struct SelectAtCursor<C, F> {
    source: C,
    selector: F,
    /// Elements moved past so far; the current one sits at `position - 1`.
    position: usize,
}

impl<C, F, R> Cursor for SelectAtCursor<C, F>
where
    C: Cursor,
    F: Fn(C::Item, usize) -> R,
{
    type Item = R;

    fn advance(&mut self) -> bool {
        if self.source.advance() {
            self.position += 1;
            true
        } else {
            false
        }
    }

    fn current(&self) -> R {
        (self.selector)(self.source.current(), self.position.wrapping_sub(1))
    }

    fn advance_by(&mut self, n: usize) -> usize {
        let skipped = self.source.advance_by(n);
        self.position += skipped;
        skipped
    }

    fn release(&mut self) {
        self.source.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::from_slice;
    use std::cell::Cell;

    #[test]
    fn selector_runs_on_every_read() {
        let calls = Cell::new(0);
        let data = [3];
        let sel = Select::new(from_slice(&data), |x: &i32| {
            calls.set(calls.get() + 1);
            x * 2
        });
        assert_eq!(calls.get(), 0);

        let mut c = sel.cursor();
        assert!(c.advance());
        assert_eq!(calls.get(), 0);
        assert_eq!(c.current(), 6);
        assert_eq!(c.current(), 6);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn indexed_projection() {
        let data = ["a", "bb", "ccc"];
        let sel = SelectAt::new(from_slice(&data), |s: &&str, i: usize| s.len() * 10 + i);
        assert_eq!(sel.len(), 3);
        assert_eq!(sel.get(2), Some(32));
        assert_eq!(sel.get(3), None);

        let mut c = sel.cursor();
        assert_eq!(c.advance_by(1), 1);
        assert!(c.advance());
        assert_eq!(c.current(), 21);
    }
}
