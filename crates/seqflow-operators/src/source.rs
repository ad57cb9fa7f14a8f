//! Built-in sources: borrowed slices, repeated values, integer ranges, empty.
//!
//! All of them are indexable, so `skip`/`take`/`element_at` over them are O(1).

use std::marker::PhantomData;

use seqflow_core::prelude::*;

/// Sequence over a borrowed slice. Yields `&T`.
#[derive(Debug)]
pub struct SliceSeq<'a, T> {
    slice: &'a [T],
}

impl<T> Clone for SliceSeq<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceSeq<'_, T> {}

pub fn from_slice<T>(slice: &[T]) -> SliceSeq<'_, T> {
    SliceSeq { slice }
}

impl<'a, T> Sequence for SliceSeq<'a, T> {
    type Item = &'a T;
    type Cursor = SliceCursor<'a, T>;

    fn cursor(&self) -> Self::Cursor {
        SliceCursor {
            slice: self.slice,
            next: 0,
        }
    }

    fn len_hint(&self) -> Option<usize> {
        Some(self.slice.len())
    }
}

impl<'a, T> IndexedSequence for SliceSeq<'a, T> {
    fn len(&self) -> usize {
        self.slice.len()
    }

    fn get(&self, index: usize) -> Option<&'a T> {
        self.slice.get(index)
    }
}

pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    /// Index of the element the next `advance` moves onto.
    next: usize,
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = &'a T;

    fn advance(&mut self) -> bool {
        if self.next < self.slice.len() {
            self.next += 1;
            true
        } else {
            false
        }
    }

    fn current(&self) -> &'a T {
        &self.slice[self.next.wrapping_sub(1)]
    }

    fn advance_by(&mut self, n: usize) -> usize {
        let skipped = n.min(self.slice.len() - self.next);
        self.next += skipped;
        skipped
    }
}

/// `value` repeated `count` times.
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    value: T,
    count: usize,
}

pub fn repeat<T: Clone>(value: T, count: usize) -> Repeat<T> {
    Repeat { value, count }
}

// Shortcuts that never need a cursor.
impl<T: Clone> Repeat<T> {
    pub fn skip(self, count: usize) -> Repeat<T> {
        repeat(self.value, self.count.saturating_sub(count))
    }

    pub fn take(self, count: usize) -> Repeat<T> {
        repeat(self.value, self.count.min(count))
    }

    pub fn contains(&self, value: T) -> bool
    where
        T: PartialEq,
    {
        self.count != 0 && self.value == value
    }

    pub fn all<P: FnMut(&T) -> bool>(&self, mut predicate: P) -> bool {
        self.count == 0 || predicate(&self.value)
    }

    pub fn any(&self) -> bool {
        self.count != 0
    }
}

impl<T: Clone> Sequence for Repeat<T> {
    type Item = T;
    type Cursor = RepeatCursor<T>;

    fn cursor(&self) -> Self::Cursor {
        RepeatCursor {
            value: self.value.clone(),
            remaining: self.count,
        }
    }

    fn len_hint(&self) -> Option<usize> {
        Some(self.count)
    }
}

impl<T: Clone> IndexedSequence for Repeat<T> {
    fn len(&self) -> usize {
        self.count
    }

    fn get(&self, index: usize) -> Option<T> {
        (index < self.count).then(|| self.value.clone())
    }
}

pub struct RepeatCursor<T> {
    value: T,
    remaining: usize,
}

impl<T: Clone> Cursor for RepeatCursor<T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        if self.remaining > 0 {
            self.remaining -= 1;
            true
        } else {
            false
        }
    }

    fn current(&self) -> T {
        self.value.clone()
    }

    fn advance_by(&mut self, n: usize) -> usize {
        let skipped = n.min(self.remaining);
        self.remaining -= skipped;
        skipped
    }
}

/// `count` consecutive integers starting at `start`.
#[derive(Debug, Clone, Copy)]
pub struct Range {
    start: i32,
    count: usize,
}

/// Fails with `ArgumentOutOfRange` when the last value would overflow `i32`.
pub fn range(start: i32, count: usize) -> Result<Range> {
    if count > 0 {
        let last = i64::from(start) + (count as i64 - 1);
        if count > u32::MAX as usize || last > i64::from(i32::MAX) {
            return Err(Error::ArgumentOutOfRange {
                name: "count",
                reason: format!("range starting at {start} with {count} elements overflows i32"),
            });
        }
    }
    Ok(Range { start, count })
}

impl Range {
    fn value_at(&self, index: usize) -> i32 {
        (i64::from(self.start) + index as i64) as i32
    }
}

impl Sequence for Range {
    type Item = i32;
    type Cursor = RangeCursor;

    fn cursor(&self) -> Self::Cursor {
        RangeCursor {
            range: *self,
            next: 0,
        }
    }

    fn len_hint(&self) -> Option<usize> {
        Some(self.count)
    }
}

impl IndexedSequence for Range {
    fn len(&self) -> usize {
        self.count
    }

    fn get(&self, index: usize) -> Option<i32> {
        (index < self.count).then(|| self.value_at(index))
    }
}

pub struct RangeCursor {
    range: Range,
    next: usize,
}

impl Cursor for RangeCursor {
    type Item = i32;

    fn advance(&mut self) -> bool {
        if self.next < self.range.count {
            self.next += 1;
            true
        } else {
            false
        }
    }

    fn current(&self) -> i32 {
        self.range.value_at(self.next.wrapping_sub(1))
    }

    fn advance_by(&mut self, n: usize) -> usize {
        let skipped = n.min(self.range.count - self.next);
        self.next += skipped;
        skipped
    }
}

/// Sequence with no elements.
pub struct Empty<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        empty()
    }
}

pub fn empty<T>() -> Empty<T> {
    Empty {
        _marker: PhantomData,
    }
}

impl<T> Sequence for Empty<T> {
    type Item = T;
    type Cursor = EmptyCursor<T>;

    fn cursor(&self) -> Self::Cursor {
        EmptyCursor {
            _marker: PhantomData,
        }
    }

    fn len_hint(&self) -> Option<usize> {
        Some(0)
    }
}

impl<T> IndexedSequence for Empty<T> {
    fn len(&self) -> usize {
        0
    }

    fn get(&self, _index: usize) -> Option<T> {
        None
    }
}

pub struct EmptyCursor<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Cursor for EmptyCursor<T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        false
    }

    fn current(&self) -> T {
        panic!("current() called on an empty sequence")
    }

    fn advance_by(&mut self, _n: usize) -> usize {
        0
    }
}
