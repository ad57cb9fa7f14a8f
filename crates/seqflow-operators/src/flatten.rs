//! SelectMany: map each outer element to an inner sequence and flatten.

use std::marker::PhantomData;

use seqflow_core::prelude::*;

#[derive(Clone)]
pub struct SelectMany<S, F> {
    source: S,
    selector: F,
}

impl<S, F> SelectMany<S, F> {
    pub fn new(source: S, selector: F) -> Self {
        Self { source, selector }
    }
}

impl<S, F, I> Sequence for SelectMany<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> I + Clone,
    I: Sequence,
{
    type Item = I::Item;
    type Cursor = SelectManyCursor<S::Cursor, F, I>;

    fn cursor(&self) -> Self::Cursor {
        SelectManyCursor {
            outer: self.source.cursor(),
            selector: self.selector.clone(),
            inner: None,
            _inner_seq: PhantomData,
        }
    }
}

pub struct SelectManyCursor<C, F, I: Sequence> {
    outer: C,
    selector: F,
    /// Inner pass in progress, if any.
    inner: Option<I::Cursor>,
    _inner_seq: PhantomData<fn() -> I>,
}

impl<C, F, I> Cursor for SelectManyCursor<C, F, I>
where
    C: Cursor,
    F: Fn(C::Item) -> I,
    I: Sequence,
{
    type Item = I::Item;

    fn advance(&mut self) -> bool {
        loop {
            if let Some(inner) = self.inner.as_mut() {
                if inner.advance() {
                    return true;
                }
                inner.release();
                self.inner = None;
            }
            if !self.outer.advance() {
                return false;
            }
            self.inner = Some((self.selector)(self.outer.current()).cursor());
        }
    }

    fn current(&self) -> I::Item {
        match &self.inner {
            Some(inner) => inner.current(),
            None => panic!("current() called without a successful advance()"),
        }
    }

    fn release(&mut self) {
        if let Some(mut inner) = self.inner.take() {
            inner.release();
        }
        self.outer.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{from_slice, range, repeat};
    use crate::testing::Tracked;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn flattens_and_skips_empty_inners() {
        let outer = [2usize, 0, 1, 0];
        let many = SelectMany::new(from_slice(&outer), |n: &usize| repeat(*n, *n));
        let mut c = many.cursor();
        let mut out = Vec::new();
        while c.advance() {
            out.push(c.current());
        }
        assert_eq!(out, vec![2, 2, 1]);
        assert!(!c.advance());
    }

    #[test]
    fn empty_outer_is_terminal() {
        let many = SelectMany::new(range(0, 0).unwrap(), |i: i32| range(i, 3).unwrap());
        assert!(!many.cursor().advance());
    }

    #[test]
    fn each_inner_is_released_as_it_runs_out() {
        let outer = Tracked::new(3);
        let inner_releases = Rc::new(Cell::new(0));
        let shared = Rc::clone(&inner_releases);
        // Inner lengths 0, 1, 2.
        let many = SelectMany::new(outer.clone(), move |n: i32| Tracked::sharing(n, &shared));

        let mut c = many.cursor();
        assert!(c.advance());
        assert_eq!(c.current(), 0);
        // The empty first inner is already gone; the second is live.
        assert_eq!(inner_releases.get(), 1);

        assert!(c.advance());
        assert_eq!(inner_releases.get(), 2);
        assert!(c.advance());
        assert_eq!(c.current(), 1);
        assert!(!c.advance());
        assert_eq!(inner_releases.get(), 3);
        assert_eq!(outer.released(), 0);

        c.release();
        assert_eq!(inner_releases.get(), 3);
        assert_eq!(outer.released(), 1);
    }

    #[test]
    fn dropping_mid_inner_releases_live_inner_and_outer_once() {
        let outer = Tracked::new(4);
        let inner_releases = Rc::new(Cell::new(0));
        let shared = Rc::clone(&inner_releases);
        let many = SelectMany::new(outer.clone(), move |_: i32| Tracked::sharing(5, &shared));

        {
            let mut c = ScopedCursor::new(many.cursor());
            assert_eq!(c.advance_by(3), 3);
            assert_eq!(inner_releases.get(), 0);
        }
        assert_eq!(inner_releases.get(), 1);
        assert_eq!(outer.released(), 1);
    }
}
