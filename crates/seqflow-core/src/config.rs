//! Growable-buffer and segment-pool configuration that downstream crates can
//! serialize/deserialize.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BufferConfig {
    /// Capacity of the first segment. Small so tiny results waste little.
    pub initial_capacity: usize,

    /// Segments with at least this many slots are rented from the shared pool;
    /// smaller ones are plain allocations.
    pub pool_threshold: usize,

    /// Upper bound on a single segment's capacity. Growth doubles until here.
    pub max_segment_len: usize,

    /// How many idle segments the pool keeps per capacity class.
    pub max_retained_per_class: usize,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 4,
            pool_threshold: 64,
            max_segment_len: 1 << 20,
            max_retained_per_class: 8,
        }
    }
}

impl BufferConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `SEQFLOW_BUFFER_INITIAL_CAPACITY`: first segment capacity
    /// - `SEQFLOW_BUFFER_POOL_THRESHOLD`: minimum pooled segment capacity
    /// - `SEQFLOW_BUFFER_MAX_SEGMENT_LEN`: segment capacity cap
    /// - `SEQFLOW_POOL_MAX_RETAINED`: idle segments kept per capacity class
    ///
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("SEQFLOW_BUFFER_INITIAL_CAPACITY") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.initial_capacity = v;
            }
        }

        if let Ok(s) = std::env::var("SEQFLOW_BUFFER_POOL_THRESHOLD") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.pool_threshold = v;
            }
        }

        if let Ok(s) = std::env::var("SEQFLOW_BUFFER_MAX_SEGMENT_LEN") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.max_segment_len = v;
            }
        }

        if let Ok(s) = std::env::var("SEQFLOW_POOL_MAX_RETAINED") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.max_retained_per_class = v;
            }
        }

        cfg
    }

    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(Error::Config("initial_capacity must be > 0".into()));
        }
        if self.pool_threshold == 0 {
            return Err(Error::Config("pool_threshold must be > 0".into()));
        }
        if self.max_segment_len < self.initial_capacity {
            return Err(Error::Config(format!(
                "max_segment_len {} is smaller than initial_capacity {}",
                self.max_segment_len, self.initial_capacity
            )));
        }
        Ok(())
    }

    /// Capacity of the segment that follows one of capacity `prev`.
    pub fn next_segment_len(&self, prev: usize) -> usize {
        prev.saturating_mul(2).min(self.max_segment_len).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        BufferConfig::default().validate().unwrap();
    }

    #[test]
    fn growth_doubles_then_caps() {
        let cfg = BufferConfig {
            max_segment_len: 16,
            ..BufferConfig::default()
        };
        assert_eq!(cfg.next_segment_len(4), 8);
        assert_eq!(cfg.next_segment_len(8), 16);
        assert_eq!(cfg.next_segment_len(16), 16);
    }

    #[test]
    fn rejects_inconsistent_bounds() {
        let cfg = BufferConfig {
            initial_capacity: 32,
            max_segment_len: 8,
            ..BufferConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn json_fills_missing_fields() {
        let cfg = BufferConfig::from_json(r#"{"pool_threshold": 128}"#).unwrap();
        assert_eq!(cfg.pool_threshold, 128);
        assert_eq!(cfg.initial_capacity, 4);
    }
}
