//! Quantifiers and counting: terminal reductions to `bool` / `usize`.
//!
//! Every scan runs through a `ScopedCursor`, so the source is released on
//! every exit path, including a panicking predicate.

use seqflow_core::prelude::*;

pub fn contains<S>(source: &S, value: &S::Item) -> bool
where
    S: Sequence,
    S::Item: PartialEq,
{
    contains_by(source, value, |a, b| a == b)
}

/// `contains` with a caller-supplied equality.
pub fn contains_by<S, E>(source: &S, value: &S::Item, mut eq: E) -> bool
where
    S: Sequence,
    E: FnMut(&S::Item, &S::Item) -> bool,
{
    let mut cursor = ScopedCursor::new(source.cursor());
    while cursor.advance() {
        if eq(&cursor.current(), value) {
            return true;
        }
    }
    false
}

/// True on an empty source.
pub fn all<S, P>(source: &S, mut predicate: P) -> bool
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    all_at(source, |item, _| predicate(item))
}

pub fn all_at<S, P>(source: &S, mut predicate: P) -> bool
where
    S: Sequence,
    P: FnMut(&S::Item, usize) -> bool,
{
    let mut cursor = ScopedCursor::new(source.cursor());
    let mut index = 0;
    while cursor.advance() {
        if !predicate(&cursor.current(), index) {
            return false;
        }
        index += 1;
    }
    true
}

/// O(1) when the length is known, otherwise one `advance`.
pub fn any<S: Sequence>(source: &S) -> bool {
    match source.len_hint() {
        Some(len) => len != 0,
        None => ScopedCursor::new(source.cursor()).advance(),
    }
}

pub fn any_where<S, P>(source: &S, mut predicate: P) -> bool
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    any_at(source, |item, _| predicate(item))
}

pub fn any_at<S, P>(source: &S, mut predicate: P) -> bool
where
    S: Sequence,
    P: FnMut(&S::Item, usize) -> bool,
{
    !all_at(source, |item, index| !predicate(item, index))
}

pub fn count<S: Sequence>(source: &S) -> usize {
    if let Some(len) = source.len_hint() {
        return len;
    }
    let mut cursor = ScopedCursor::new(source.cursor());
    let mut counter = 0;
    while cursor.advance() {
        counter += 1;
    }
    counter
}

pub fn count_where<S, P>(source: &S, mut predicate: P) -> usize
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    let mut cursor = ScopedCursor::new(source.cursor());
    let mut counter = 0;
    while cursor.advance() {
        if predicate(&cursor.current()) {
            counter += 1;
        }
    }
    counter
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Where;
    use crate::source::{empty, from_slice, range};

    #[test]
    fn vacuous_truth_on_empty() {
        assert!(all(&empty::<i32>(), |_| false));
        assert!(!any(&empty::<i32>()));
        assert!(!any_where(&empty::<i32>(), |_| true));
        assert!(!contains(&empty::<i32>(), &1));
    }

    #[test]
    fn any_without_len_hint_advances_once() {
        let data = [1, 3, 4];
        let evens = Where::new(from_slice(&data), |x: &&i32| **x % 2 == 0);
        assert!(any(&evens));
        assert_eq!(count(&evens), 1);
    }

    #[test]
    fn contains_by_custom_equality() {
        let words = ["Alpha", "beta"];
        let src = from_slice(&words);
        assert!(!contains(&src, &&"BETA"));
        assert!(contains_by(&src, &&"BETA", |a, b| a.eq_ignore_ascii_case(b)));
    }

    #[test]
    fn indexed_predicates_see_positions() {
        let src = range(5, 4).unwrap();
        assert!(all_at(&src, |v, i| *v == 5 + i as i32));
        assert!(any_at(&src, |_, i| i == 3));
        assert!(!any_at(&src, |_, i| i == 4));
    }

    #[test]
    fn count_where_matches_indexed_loop() {
        let src = range(0, 100).unwrap();
        let by_cursor = count_where(&src, |v| v % 7 == 0);
        let by_index = src.count_matching(|v| v % 7 == 0);
        assert_eq!(by_cursor, 15);
        assert_eq!(by_cursor, by_index);
    }
}
