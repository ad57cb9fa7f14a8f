//! Outstanding/peak segment tracking for a pool.
//!
//! Keep this cheap: plain atomics, no locks.

use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
pub struct PoolStats {
    outstanding: AtomicUsize,
    peak: AtomicUsize,
    rented_total: AtomicUsize,
}

impl PoolStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a segment leaving the pool; updates peak if higher.
    pub fn record_rent(&self) {
        self.rented_total.fetch_add(1, Ordering::Relaxed);
        let now = self.outstanding.fetch_add(1, Ordering::AcqRel) + 1;
        let mut cur = self.peak.load(Ordering::Relaxed);
        while now > cur {
            match self
                .peak
                .compare_exchange(cur, now, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => break,
                Err(observed) => cur = observed,
            }
        }
    }

    pub fn record_return(&self) {
        self.outstanding.fetch_sub(1, Ordering::AcqRel);
    }

    /// Segments currently rented and not yet returned.
    pub fn outstanding(&self) -> usize {
        self.outstanding.load(Ordering::Relaxed)
    }

    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::Relaxed)
    }

    pub fn rented_total(&self) -> usize {
        self.rented_total.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peak_survives_returns() {
        let stats = PoolStats::new();
        stats.record_rent();
        stats.record_rent();
        stats.record_return();
        stats.record_rent();
        stats.record_return();
        stats.record_return();
        assert_eq!(stats.outstanding(), 0);
        assert_eq!(stats.peak(), 2);
        assert_eq!(stats.rented_total(), 3);
    }
}
