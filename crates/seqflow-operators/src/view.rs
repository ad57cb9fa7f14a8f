//! Read-only list view over an indexable sequence.
//!
//! The view exposes lookups and copies only; there are no mutators to reject.

use seqflow_core::prelude::*;

#[derive(Clone)]
pub struct ReadOnlyView<S> {
    source: S,
}

impl<S: IndexedSequence> ReadOnlyView<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<S::Item> {
        self.source.get(index)
    }

    /// Like `get` but fails with `IndexOutOfRange`.
    pub fn at(&self, index: usize) -> Result<S::Item> {
        self.source
            .get(index)
            .ok_or(Error::IndexOutOfRange { index })
    }

    pub fn contains(&self, value: &S::Item) -> bool
    where
        S::Item: PartialEq,
    {
        self.index_of(value).is_some()
    }

    pub fn index_of(&self, value: &S::Item) -> Option<usize>
    where
        S::Item: PartialEq,
    {
        (0..self.len()).find(|&i| self.source.get(i).as_ref() == Some(value))
    }

    /// Copy every element into `dest` starting at `offset`.
    pub fn copy_to(&self, dest: &mut [S::Item], offset: usize) -> Result<()> {
        let len = self.len();
        if offset > dest.len() || dest.len() - offset < len {
            return Err(Error::ArgumentOutOfRange {
                name: "offset",
                reason: format!(
                    "{len} elements do not fit at offset {offset} of a {}-slot destination",
                    dest.len()
                ),
            });
        }
        for (index, slot) in dest[offset..offset + len].iter_mut().enumerate() {
            if let Some(item) = self.source.get(index) {
                *slot = item;
            }
        }
        Ok(())
    }

    pub fn iter(&self) -> CursorIter<S::Cursor> {
        CursorIter::new(self.source.cursor())
    }

    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: IndexedSequence> Sequence for ReadOnlyView<S> {
    type Item = S::Item;
    type Cursor = S::Cursor;

    fn cursor(&self) -> S::Cursor {
        self.source.cursor()
    }

    fn len_hint(&self) -> Option<usize> {
        Some(self.source.len())
    }
}

impl<S: IndexedSequence> IndexedSequence for ReadOnlyView<S> {
    fn len(&self) -> usize {
        self.source.len()
    }

    fn get(&self, index: usize) -> Option<S::Item> {
        self.source.get(index)
    }
}
