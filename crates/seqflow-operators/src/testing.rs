//! Test-only source that counts `release` calls.

use std::cell::Cell;
use std::rc::Rc;

use seqflow_core::prelude::*;

/// Yields `0..len`; every cursor bumps the shared counter on release.
#[derive(Clone)]
pub(crate) struct Tracked {
    pub len: i32,
    pub releases: Rc<Cell<usize>>,
}

impl Tracked {
    pub fn new(len: i32) -> Self {
        Self {
            len,
            releases: Rc::new(Cell::new(0)),
        }
    }

    pub fn sharing(len: i32, releases: &Rc<Cell<usize>>) -> Self {
        Self {
            len,
            releases: Rc::clone(releases),
        }
    }

    pub fn released(&self) -> usize {
        self.releases.get()
    }
}

impl Sequence for Tracked {
    type Item = i32;
    type Cursor = TrackedCursor;

    fn cursor(&self) -> TrackedCursor {
        TrackedCursor {
            at: 0,
            len: self.len,
            releases: Rc::clone(&self.releases),
        }
    }
}

pub(crate) struct TrackedCursor {
    at: i32,
    len: i32,
    releases: Rc<Cell<usize>>,
}

impl Cursor for TrackedCursor {
    type Item = i32;

    fn advance(&mut self) -> bool {
        if self.at < self.len {
            self.at += 1;
            true
        } else {
            false
        }
    }

    fn current(&self) -> i32 {
        self.at - 1
    }

    fn release(&mut self) {
        self.releases.set(self.releases.get() + 1);
    }
}
