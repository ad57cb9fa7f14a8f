//! Skip / Take.
//!
//! Over an indexable source both stay indexable and act as an O(1) window:
//! `skip` jumps with `Cursor::advance_by`, which indexable cursors implement
//! in constant time. Over a forward-only source `skip` discards its elements
//! eagerly when the cursor is created, and `take` stops advancing the source
//! once the bound is reached.

use seqflow_core::prelude::*;

#[derive(Clone)]
pub struct Skip<S> {
    source: S,
    count: usize,
}

impl<S> Skip<S> {
    pub fn new(source: S, count: usize) -> Self {
        Self { source, count }
    }
}

impl<S: Sequence> Sequence for Skip<S> {
    type Item = S::Item;
    type Cursor = S::Cursor;

    fn cursor(&self) -> S::Cursor {
        let mut cursor = self.source.cursor();
        cursor.advance_by(self.count);
        cursor
    }

    fn len_hint(&self) -> Option<usize> {
        self.source
            .len_hint()
            .map(|len| len.saturating_sub(self.count))
    }
}

impl<S: IndexedSequence> IndexedSequence for Skip<S> {
    fn len(&self) -> usize {
        self.source.len().saturating_sub(self.count)
    }

    fn get(&self, index: usize) -> Option<S::Item> {
        if index < self.len() {
            self.source.get(index + self.count)
        } else {
            None
        }
    }
}

#[derive(Clone)]
pub struct Take<S> {
    source: S,
    count: usize,
}

impl<S> Take<S> {
    pub fn new(source: S, count: usize) -> Self {
        Self { source, count }
    }
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;
    type Cursor = TakeCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        TakeCursor {
            source: self.source.cursor(),
            remaining: self.count,
        }
    }

    fn len_hint(&self) -> Option<usize> {
        self.source.len_hint().map(|len| len.min(self.count))
    }
}

impl<S: IndexedSequence> IndexedSequence for Take<S> {
    fn len(&self) -> usize {
        self.source.len().min(self.count)
    }

    fn get(&self, index: usize) -> Option<S::Item> {
        if index < self.count {
            self.source.get(index)
        } else {
            None
        }
    }
}

pub struct TakeCursor<C> {
    source: C,
    remaining: usize,
}

impl<C: Cursor> Cursor for TakeCursor<C> {
    type Item = C::Item;

    fn advance(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        if self.source.advance() {
            self.remaining -= 1;
            true
        } else {
            self.remaining = 0;
            false
        }
    }

    fn current(&self) -> C::Item {
        self.source.current()
    }

    fn advance_by(&mut self, n: usize) -> usize {
        let want = n.min(self.remaining);
        let skipped = self.source.advance_by(want);
        self.remaining -= skipped;
        if skipped < want {
            self.remaining = 0;
        }
        skipped
    }

    fn release(&mut self) {
        self.source.release();
    }
}
