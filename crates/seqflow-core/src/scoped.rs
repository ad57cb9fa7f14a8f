//! Disposing cursor wrapper and `Iterator` interop.
//!
//! `ScopedCursor` is the RAII form of [`Cursor::release`]: the release step runs
//! exactly once, either through `dispose()` or on drop (including unwinding).

use crate::sequence::Cursor;

pub struct ScopedCursor<C: Cursor> {
    cursor: C,
    released: bool,
}

impl<C: Cursor> ScopedCursor<C> {
    pub fn new(cursor: C) -> Self {
        Self {
            cursor,
            released: false,
        }
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Release now instead of at drop. Further calls are no-ops.
    pub fn dispose(&mut self) {
        if !self.released {
            self.released = true;
            self.cursor.release();
        }
    }
}

impl<C: Cursor> Cursor for ScopedCursor<C> {
    type Item = C::Item;

    fn advance(&mut self) -> bool {
        // A released cursor behaves as exhausted.
        !self.released && self.cursor.advance()
    }

    fn current(&self) -> C::Item {
        self.cursor.current()
    }

    fn advance_by(&mut self, n: usize) -> usize {
        if self.released {
            return 0;
        }
        self.cursor.advance_by(n)
    }

    fn release(&mut self) {
        self.dispose();
    }
}

impl<C: Cursor> Drop for ScopedCursor<C> {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Adapts a cursor to `std::iter::Iterator` so pipelines work with `for`
/// loops and std adapters. The cursor is released as soon as it is exhausted.
pub struct CursorIter<C: Cursor> {
    inner: ScopedCursor<C>,
}

impl<C: Cursor> CursorIter<C> {
    pub fn new(cursor: C) -> Self {
        Self {
            inner: ScopedCursor::new(cursor),
        }
    }
}

impl<C: Cursor> Iterator for CursorIter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        if self.inner.advance() {
            Some(self.inner.current())
        } else {
            self.inner.dispose();
            None
        }
    }
}
