//! Growable segmented buffer for results of unknown length.
//!
//! Elements go into a chain of fixed-capacity segments. The first segment is
//! small; each following one doubles, up to `max_segment_len`. Segments at or
//! above `pool_threshold` are rented from a `SegmentPool`. `finish` copies
//! everything once into an exactly-sized `Vec`; the segments go back to the
//! pool when the buffer is dropped, whether it finished or was abandoned.

use seqflow_core::config::BufferConfig;

use crate::pool::{PooledSegment, SegmentPool};

pub struct LargeBuffer<'p, T> {
    pool: &'p SegmentPool<T>,
    full: Vec<PooledSegment<T>>,
    current: PooledSegment<T>,
    /// Fixed capacity of `current`; the pool may hand out more.
    segment_len: usize,
    count: usize,
}

impl<'p, T> LargeBuffer<'p, T> {
    pub fn new(pool: &'p SegmentPool<T>) -> Self {
        Self {
            pool,
            full: Vec::new(),
            current: PooledSegment::detached(Vec::new()),
            segment_len: 0,
            count: 0,
        }
    }

    fn config(&self) -> &BufferConfig {
        self.pool.config()
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of segments allocated so far.
    pub fn segment_count(&self) -> usize {
        self.full.len() + usize::from(self.segment_len > 0)
    }

    pub fn add(&mut self, item: T) {
        if self.current.len() == self.segment_len {
            self.grow();
        }
        self.current.push(item);
        self.count += 1;
    }

    fn grow(&mut self) {
        let next_len = if self.segment_len == 0 {
            self.config().initial_capacity
        } else {
            self.config().next_segment_len(self.segment_len)
        };
        let next = if next_len >= self.config().pool_threshold {
            self.pool.rent(next_len)
        } else {
            PooledSegment::detached(Vec::with_capacity(next_len))
        };
        let filled = std::mem::replace(&mut self.current, next);
        if self.segment_len > 0 {
            self.full.push(filled);
        }
        self.segment_len = next_len;
    }

    /// Move all elements, in insertion order, into one exactly-sized `Vec`.
    pub fn finish(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.count);
        for segment in self.full.iter_mut() {
            out.append(segment);
        }
        out.append(&mut self.current);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            len = out.len(),
            segments = self.segment_count(),
            "large buffer finished"
        );
        out
    }

    pub fn finish_boxed(self) -> Box<[T]> {
        self.finish().into_boxed_slice()
    }
}

impl<T> Extend<T> for LargeBuffer<'_, T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}
