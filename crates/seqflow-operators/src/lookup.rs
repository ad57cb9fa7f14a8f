//! Element lookup: the First/Single family, ElementAt and IndexOf.
//!
//! The `try_*` functions are the primitives and never fail; the failing
//! variants are thin conversions through `ElementResult`.

use seqflow_core::prelude::*;

pub fn try_first<S: Sequence>(source: &S) -> ElementResult<S::Item> {
    let mut cursor = ScopedCursor::new(source.cursor());
    if cursor.advance() {
        ElementResult::Success(cursor.current())
    } else {
        ElementResult::Empty
    }
}

pub fn try_first_where<S, P>(source: &S, mut predicate: P) -> ElementResult<S::Item>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    match try_first_at(source, |item, _| predicate(item)) {
        Some(found) => ElementResult::Success(found.value),
        None => ElementResult::Empty,
    }
}

/// First element accepted by an index-aware predicate, with its source index.
pub fn try_first_at<S, P>(source: &S, mut predicate: P) -> Option<Found<S::Item>>
where
    S: Sequence,
    P: FnMut(&S::Item, usize) -> bool,
{
    let mut cursor = ScopedCursor::new(source.cursor());
    let mut index = 0;
    while cursor.advance() {
        let item = cursor.current();
        if predicate(&item, index) {
            return Some(Found { index, value: item });
        }
        index += 1;
    }
    None
}

pub fn try_single<S: Sequence>(source: &S) -> ElementResult<S::Item> {
    let mut cursor = ScopedCursor::new(source.cursor());
    if !cursor.advance() {
        return ElementResult::Empty;
    }
    let value = cursor.current();
    if cursor.advance() {
        ElementResult::NotSingle
    } else {
        ElementResult::Success(value)
    }
}

pub fn try_single_where<S, P>(source: &S, mut predicate: P) -> ElementResult<S::Item>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    try_single_at(source, |item, _| predicate(item)).map(|found| found.value)
}

/// Keeps scanning after the first match to prove it is the only one.
pub fn try_single_at<S, P>(source: &S, mut predicate: P) -> ElementResult<Found<S::Item>>
where
    S: Sequence,
    P: FnMut(&S::Item, usize) -> bool,
{
    let mut cursor = ScopedCursor::new(source.cursor());
    let mut index = 0;
    let mut found = None;
    while cursor.advance() {
        let item = cursor.current();
        if predicate(&item, index) {
            if found.is_some() {
                return ElementResult::NotSingle;
            }
            found = Some(Found { index, value: item });
        }
        index += 1;
    }
    match found {
        Some(found) => ElementResult::Success(found),
        None => ElementResult::Empty,
    }
}

pub fn first<S: Sequence>(source: &S) -> Result<S::Item> {
    try_first(source).into_result()
}

pub fn first_where<S, P>(source: &S, predicate: P) -> Result<S::Item>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    try_first_where(source, predicate).into_result()
}

pub fn first_or_default<S>(source: &S) -> S::Item
where
    S: Sequence,
    S::Item: Default,
{
    try_first(source).ok().unwrap_or_default()
}

pub fn first_or_default_where<S, P>(source: &S, predicate: P) -> S::Item
where
    S: Sequence,
    S::Item: Default,
    P: FnMut(&S::Item) -> bool,
{
    try_first_where(source, predicate).ok().unwrap_or_default()
}

pub fn single<S: Sequence>(source: &S) -> Result<S::Item> {
    try_single(source).into_result()
}

pub fn single_where<S, P>(source: &S, predicate: P) -> Result<S::Item>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    try_single_where(source, predicate).into_result()
}

/// Empty yields the default; more than one element still fails.
pub fn single_or_default<S>(source: &S) -> Result<S::Item>
where
    S: Sequence,
    S::Item: Default,
{
    try_single(source).or_default()
}

pub fn single_or_default_where<S, P>(source: &S, predicate: P) -> Result<S::Item>
where
    S: Sequence,
    S::Item: Default,
    P: FnMut(&S::Item) -> bool,
{
    try_single_where(source, predicate).or_default()
}

/// O(1) positioning on indexable sources through `Cursor::advance_by`.
pub fn try_element_at<S: Sequence>(source: &S, index: usize) -> Option<S::Item> {
    if let Some(len) = source.len_hint() {
        if index >= len {
            return None;
        }
    }
    let mut cursor = ScopedCursor::new(source.cursor());
    if cursor.advance_by(index) == index && cursor.advance() {
        Some(cursor.current())
    } else {
        None
    }
}

pub fn element_at<S: Sequence>(source: &S, index: usize) -> Result<S::Item> {
    try_element_at(source, index).ok_or(Error::IndexOutOfRange { index })
}

pub fn index_of<S>(source: &S, value: &S::Item) -> Option<usize>
where
    S: Sequence,
    S::Item: PartialEq,
{
    try_first_at(source, |item, _| item == value).map(|found| found.index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Where;
    use crate::map::Select;
    use crate::partition::Take;
    use crate::source::{empty, from_slice, range};
    use crate::testing::Tracked;

    #[test]
    fn single_keeps_scanning_after_first_match() {
        let data = [1, 2, 3, 4];
        let src = from_slice(&data);
        assert_eq!(
            try_single_where(&src, |x| **x == 3),
            ElementResult::Success(&3)
        );
        assert_eq!(
            try_single_where(&src, |x| **x > 2),
            ElementResult::NotSingle
        );
        assert_eq!(try_single_where(&src, |x| **x > 9), ElementResult::Empty);
    }

    #[test]
    fn found_carries_source_index() {
        let src = range(100, 5).unwrap();
        assert_eq!(
            try_first_at(&src, |v, _| *v >= 102),
            Some(Found {
                index: 2,
                value: 102
            })
        );
        assert_eq!(
            try_single_at(&src, |_, i| i == 4),
            ElementResult::Success(Found {
                index: 4,
                value: 104
            })
        );
    }

    #[test]
    fn or_default_variants() {
        assert_eq!(first_or_default(&empty::<u32>()), 0);
        assert_eq!(single_or_default(&empty::<u32>()), Ok(0));
        assert_eq!(
            single_or_default(&range(1, 2).unwrap()),
            Err(Error::MultipleElements)
        );
        assert_eq!(first_or_default_where(&range(1, 5).unwrap(), |v| *v > 3), 4);
        assert_eq!(
            single_or_default_where(&range(1, 5).unwrap(), |v| *v > 9),
            Ok(0)
        );
    }

    #[test]
    fn element_at_bounds() {
        let src = range(0, 3).unwrap();
        assert_eq!(element_at(&src, 2), Ok(2));
        assert_eq!(element_at(&src, 3), Err(Error::IndexOutOfRange { index: 3 }));

        // No length hint: the scan discovers the end.
        let data = [1, 2, 3];
        let odd = Where::new(from_slice(&data), |x: &&i32| **x % 2 == 1);
        assert_eq!(element_at(&odd, 1), Ok(&3));
        assert_eq!(try_element_at(&odd, 2), None);
    }

    #[test]
    fn index_of_first_occurrence() {
        let data = [5, 7, 5];
        let src = from_slice(&data);
        assert_eq!(index_of(&src, &&5), Some(0));
        assert_eq!(index_of(&src, &&7), Some(1));
        assert_eq!(index_of(&src, &&9), None);
    }

    #[test]
    fn release_reaches_source_through_where_and_select() {
        let src = Tracked::new(10);
        let chain = Select::new(Where::new(src.clone(), |v: &i32| *v > 2), |v: i32| v * 10);

        assert_eq!(first(&chain), Ok(30));
        assert_eq!(src.released(), 1);

        // Early exit, exhausted scan and failed lookup each release once.
        assert_eq!(single(&chain), Err(Error::MultipleElements));
        assert_eq!(src.released(), 2);
        assert_eq!(first_where(&chain, |v| *v > 1000), Err(Error::EmptySequence));
        assert_eq!(src.released(), 3);
        assert_eq!(element_at(&chain, 50), Err(Error::IndexOutOfRange { index: 50 }));
        assert_eq!(src.released(), 4);
    }

    #[test]
    fn take_forwards_release_after_its_limit() {
        let src = Tracked::new(10);
        let limited = Take::new(Where::new(src.clone(), |v: &i32| v % 2 == 0), 2);
        assert_eq!(try_single(&limited), ElementResult::NotSingle);
        assert_eq!(try_element_at(&limited, 2), None);
        assert_eq!(src.released(), 2);
    }
}
