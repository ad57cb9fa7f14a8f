//! Shared pool of segment storage.
//!
//! Segments are `Vec<T>` bucketed by power-of-two capacity class. A rented
//! segment is wrapped in `PooledSegment`, which hands its storage back on
//! drop (panic-safe), so release happens exactly once on every exit path.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::ops::{Deref, DerefMut};
use std::sync::{Arc, Mutex, MutexGuard};

use once_cell::sync::Lazy;
use seqflow_core::config::BufferConfig;

use crate::tracking::PoolStats;

struct PoolInner<T> {
    /// Index = floor(log2(capacity)); grown on first return into a class.
    classes: Mutex<Vec<Vec<Vec<T>>>>,
    config: BufferConfig,
    stats: PoolStats,
}

impl<T> PoolInner<T> {
    fn lock(&self) -> MutexGuard<'_, Vec<Vec<Vec<T>>>> {
        // Idle segments are always empty, so a poisoned lock holds nothing
        // half-written.
        self.classes.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Cheaply cloneable handle to a segment pool.
pub struct SegmentPool<T> {
    inner: Arc<PoolInner<T>>,
}

impl<T> Clone for SegmentPool<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for SegmentPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SegmentPool<T> {
    pub fn new() -> Self {
        Self::with_config(BufferConfig::default())
    }

    pub fn with_config(config: BufferConfig) -> Self {
        Self {
            inner: Arc::new(PoolInner {
                classes: Mutex::new(Vec::new()),
                config,
                stats: PoolStats::new(),
            }),
        }
    }

    /// A pool that never keeps returned storage; every rent allocates.
    pub fn unpooled() -> Self {
        Self::with_config(BufferConfig {
            max_retained_per_class: 0,
            ..BufferConfig::default()
        })
    }

    pub fn config(&self) -> &BufferConfig {
        &self.inner.config
    }

    /// Rent an empty segment with room for at least `min_len` elements.
    pub fn rent(&self, min_len: usize) -> PooledSegment<T> {
        let capacity = min_len.max(1).next_power_of_two();
        let class = capacity.trailing_zeros() as usize;

        let reused = {
            let mut classes = self.inner.lock();
            // Accept one class up so near-misses still reuse storage.
            match classes.get_mut(class..) {
                Some(buckets) => buckets.iter_mut().take(2).find_map(Vec::pop),
                None => None,
            }
        };
        let buf = reused.unwrap_or_else(|| Vec::with_capacity(capacity));

        self.inner.stats.record_rent();
        #[cfg(feature = "tracing")]
        tracing::trace!(
            requested = min_len,
            capacity = buf.capacity(),
            outstanding = self.inner.stats.outstanding(),
            "segment rent"
        );

        PooledSegment {
            buf,
            pool: Some(self.clone()),
        }
    }

    fn give_back(&self, mut buf: Vec<T>) {
        self.inner.stats.record_return();
        // Drop elements outside the lock.
        buf.clear();

        let capacity = buf.capacity();
        if capacity == 0 || self.inner.config.max_retained_per_class == 0 {
            return;
        }
        let class = (usize::BITS - 1 - capacity.leading_zeros()) as usize;
        let mut classes = self.inner.lock();
        if classes.len() <= class {
            classes.resize_with(class + 1, Vec::new);
        }
        let bucket = &mut classes[class];
        if bucket.len() < self.inner.config.max_retained_per_class {
            bucket.push(buf);
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(
            capacity,
            outstanding = self.inner.stats.outstanding(),
            "segment return"
        );
    }

    /// Segments rented and not yet returned.
    pub fn outstanding(&self) -> usize {
        self.inner.stats.outstanding()
    }

    pub fn peak_outstanding(&self) -> usize {
        self.inner.stats.peak()
    }

    pub fn rented_total(&self) -> usize {
        self.inner.stats.rented_total()
    }

    /// Idle segments currently held for reuse.
    pub fn retained(&self) -> usize {
        self.inner.lock().iter().map(Vec::len).sum()
    }
}

type Registry = Mutex<HashMap<TypeId, Box<dyn Any + Send + Sync>>>;

static SHARED: Lazy<Registry> = Lazy::new(|| Mutex::new(HashMap::new()));

impl<T: Send + 'static> SegmentPool<T> {
    /// Process-wide pool for element type `T`, configured from the
    /// environment (`BufferConfig::from_env`) on first use.
    pub fn shared() -> Self {
        let mut registry = SHARED.lock().unwrap_or_else(|e| e.into_inner());
        let entry = registry.entry(TypeId::of::<T>()).or_insert_with(|| {
            Box::new(SegmentPool::<T>::with_config(usable_config(
                BufferConfig::from_env(),
            )))
        });
        match entry.downcast_ref::<SegmentPool<T>>() {
            Some(pool) => pool.clone(),
            // Keyed by TypeId, so the downcast cannot miss.
            None => SegmentPool::new(),
        }
    }
}

/// Environment config for shared pools; an inconsistent one is replaced by
/// the defaults, with a warning under the `tracing` feature.
fn usable_config(config: BufferConfig) -> BufferConfig {
    match config.validate() {
        Ok(()) => config,
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                error = %_err,
                "invalid SEQFLOW_* buffer config, shared pool uses defaults"
            );
            BufferConfig::default()
        }
    }
}

/// Owned segment that returns its storage to the pool on drop.
pub struct PooledSegment<T> {
    buf: Vec<T>,
    pool: Option<SegmentPool<T>>,
}

impl<T> PooledSegment<T> {
    /// Wrap storage that did not come from a pool; dropping it just frees it.
    pub fn detached(buf: Vec<T>) -> Self {
        Self { buf, pool: None }
    }

    pub fn is_pooled(&self) -> bool {
        self.pool.is_some()
    }
}

impl<T> Deref for PooledSegment<T> {
    type Target = Vec<T>;
    fn deref(&self) -> &Self::Target {
        &self.buf
    }
}

impl<T> DerefMut for PooledSegment<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.buf
    }
}

impl<T> Drop for PooledSegment<T> {
    fn drop(&mut self) {
        if let Some(pool) = self.pool.take() {
            pool.give_back(std::mem::take(&mut self.buf));
        }
    }
}
