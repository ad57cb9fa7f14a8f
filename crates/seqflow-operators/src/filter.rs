//! Where / WhereAt: keep only the elements a predicate accepts.
//!
//! The cursor's `advance` loops over the source, discarding rejected elements,
//! and stops on the first accepted one. Predicate panics are not intercepted.

use seqflow_core::prelude::*;

#[derive(Clone)]
pub struct Where<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> Where<S, P> {
    pub fn new(source: S, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<S, P> Sequence for Where<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool + Clone,
{
    type Item = S::Item;
    type Cursor = WhereCursor<S::Cursor, P>;

    fn cursor(&self) -> Self::Cursor {
        WhereCursor {
            source: self.source.cursor(),
            predicate: self.predicate.clone(),
        }
    }
}

pub struct WhereCursor<C, P> {
    source: C,
    predicate: P,
}

impl<C, P> Cursor for WhereCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn advance(&mut self) -> bool {
        while self.source.advance() {
            if (self.predicate)(&self.source.current()) {
                return true;
            }
        }
        false
    }

    fn current(&self) -> C::Item {
        self.source.current()
    }

    fn release(&mut self) {
        self.source.release();
    }
}

/// Where with a predicate that also receives the element's source index.
#[derive(Clone)]
pub struct WhereAt<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> WhereAt<S, P> {
    pub fn new(source: S, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<S, P> Sequence for WhereAt<S, P>
where
    S: Sequence,
    P: Fn(&S::Item, usize) -> bool + Clone,
{
    type Item = S::Item;
    type Cursor = WhereAtCursor<S::Cursor, P>;

    fn cursor(&self) -> Self::Cursor {
        WhereAtCursor {
            source: self.source.cursor(),
            predicate: self.predicate.clone(),
            next_index: 0,
        }
    }
}

pub struct WhereAtCursor<C, P> {
    source: C,
    predicate: P,
    next_index: usize,
}

impl<C, P> Cursor for WhereAtCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item, usize) -> bool,
{
    type Item = C::Item;

    fn advance(&mut self) -> bool {
        while self.source.advance() {
            let index = self.next_index;
            self.next_index += 1;
            if (self.predicate)(&self.source.current(), index) {
                return true;
            }
        }
        false
    }

    fn current(&self) -> C::Item {
        self.source.current()
    }

    fn release(&mut self) {
        self.source.release();
    }
}
