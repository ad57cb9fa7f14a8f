//! Capability contracts every source and operator implements.
//!
//! A `Sequence` is a reusable description of data; a `Cursor` is one
//! forward-only pass over it. Both are plain values: composing operators
//! moves them, it never boxes them, so a whole pipeline is one concrete type.

/// Single-pass, forward-only iteration handle.
///
/// Contract:
/// - `current()` is only meaningful right after an `advance()` that returned
///   `true`. Calling it before the first advance or after exhaustion is a
///   caller bug; implementations may panic but never misbehave otherwise.
/// - Once `advance()` returns `false`, every later call returns `false`.
/// - A cursor must not be advanced from two places at once. Cursors are not
///   `Clone`: copying a half-consumed pass is not a supported operation.
pub trait Cursor {
    type Item;

    /// Move to the next element. Returns `false` once the pass is exhausted.
    fn advance(&mut self) -> bool;

    /// The element under the cursor. Computed on every call; operators that
    /// transform elements do not cache the result.
    fn current(&self) -> Self::Item;

    /// Skip up to `n` elements without producing them and return how many
    /// were skipped. A result below `n` means the cursor is exhausted.
    ///
    /// The default walks one element at a time; indexable cursors override it
    /// with an O(1) jump.
    fn advance_by(&mut self, n: usize) -> usize {
        let mut skipped = 0;
        while skipped < n && self.advance() {
            skipped += 1;
        }
        skipped
    }

    /// Release whatever the cursor holds. Operators forward this to their
    /// sources. Use [`crate::ScopedCursor`] to have it run exactly once.
    fn release(&mut self) {}
}

/// Reusable source of cursors. Each `cursor()` call starts from the beginning.
pub trait Sequence {
    type Item;
    type Cursor: Cursor<Item = Self::Item>;

    fn cursor(&self) -> Self::Cursor;

    /// Exact number of elements, when it is known without iterating.
    fn len_hint(&self) -> Option<usize> {
        None
    }
}

/// Sequence with O(1) length and random access.
pub trait IndexedSequence: Sequence {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `index`, or `None` outside `[0, len)`.
    fn get(&self, index: usize) -> Option<Self::Item>;

    /// Count matching elements with a plain indexed loop (no cursor).
    fn count_matching<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut counter = 0;
        for index in 0..self.len() {
            if let Some(item) = self.get(index) {
                if predicate(&item) {
                    counter += 1;
                }
            }
        }
        counter
    }
}
