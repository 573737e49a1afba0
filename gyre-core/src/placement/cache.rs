//! Memoized card transforms.
//!
//! Scroll offsets are quantized to a fixed granularity before lookup, so
//! the cache key space stays small while slow drifts still hit. Entries
//! are computed at the quantized offset, which makes a cached result
//! bit-identical to recomputing at that offset. The cache holds derived
//! data only; clearing it is always correct, so eviction is a full clear.

use std::collections::HashMap;

use gyre_config::CacheSettings;
use gyre_model::{CardTransform, PlacementMode};

use crate::math::safe_f32;
use crate::placement::calculator::card_transform;

#[derive(Debug, Clone)]
pub struct PositionCache {
    entries: HashMap<(usize, i64), CardTransform>,
    capacity: usize,
    quantum: f32,
    hits: u64,
    misses: u64,
}

impl Default for PositionCache {
    fn default() -> Self {
        Self::with_settings(&CacheSettings::default())
    }
}

impl PositionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: &CacheSettings) -> Self {
        let quantum = safe_f32(settings.quantum_turns).abs();
        Self {
            entries: HashMap::new(),
            capacity: settings.capacity.max(1),
            quantum: if quantum > 0.0 {
                quantum
            } else {
                gyre_config::constants::cache::QUANTUM_TURNS
            },
            hits: 0,
            misses: 0,
        }
    }

    /// Transform for one card at the quantized scroll offset, computed on
    /// miss and memoized.
    pub fn transform(
        &mut self,
        index: usize,
        total: usize,
        scroll_offset: f32,
        mode: &PlacementMode,
    ) -> CardTransform {
        let bucket = self.bucket(scroll_offset);
        if let Some(cached) = self.entries.get(&(index, bucket)) {
            self.hits += 1;
            return *cached;
        }
        self.misses += 1;

        let computed =
            card_transform(index, total, self.bucket_offset(bucket), mode);

        if self.entries.len() >= self.capacity {
            log::debug!(
                "position cache full ({} entries), clearing",
                self.entries.len()
            );
            self.entries.clear();
        }
        self.entries.insert((index, bucket), computed);
        computed
    }

    /// The offset actually used for computation after quantization.
    pub fn quantized_offset(&self, scroll_offset: f32) -> f32 {
        self.bucket_offset(self.bucket(scroll_offset))
    }

    /// Drop all entries. Called whenever mode, card count, or config
    /// change; cached transforms are derived data, so this is always safe.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (hits, misses) since creation; for diagnostics.
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }

    fn bucket(&self, scroll_offset: f32) -> i64 {
        (safe_f32(scroll_offset) / self.quantum).round() as i64
    }

    fn bucket_offset(&self, bucket: i64) -> f32 {
        bucket as f32 * self.quantum
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gyre_model::HelixParams;

    fn helix() -> PlacementMode {
        PlacementMode::Helix(HelixParams::default())
    }

    #[test]
    fn cached_equals_direct_computation() {
        let mode = helix();
        let mut cache = PositionCache::new();
        for index in 0..16 {
            for offset in [0.0, 0.25, -1.3, 7.77] {
                let cached = cache.transform(index, 16, offset, &mode);
                let direct = card_transform(
                    index,
                    16,
                    cache.quantized_offset(offset),
                    &mode,
                );
                assert_eq!(cached, direct, "index {index} offset {offset}");
            }
        }
    }

    #[test]
    fn nearby_offsets_share_a_bucket() {
        let mode = helix();
        let mut cache = PositionCache::new();
        let a = cache.transform(3, 16, 0.1000, &mode);
        let b = cache.transform(3, 16, 0.1004, &mode);
        assert_eq!(a, b);
        let (hits, misses) = cache.stats();
        assert_eq!((hits, misses), (1, 1));
    }

    #[test]
    fn clear_empties_the_cache() {
        let mode = helix();
        let mut cache = PositionCache::new();
        cache.transform(0, 8, 0.0, &mode);
        assert!(!cache.is_empty());
        cache.clear();
        assert!(cache.is_empty());
        // Results are unchanged after a clear, only recomputed.
        let again = cache.transform(0, 8, 0.0, &mode);
        assert_eq!(again, card_transform(0, 8, 0.0, &mode));
    }

    #[test]
    fn capacity_overflow_clears_instead_of_growing() {
        let settings = CacheSettings {
            capacity: 8,
            ..CacheSettings::default()
        };
        let mode = helix();
        let mut cache = PositionCache::with_settings(&settings);
        for i in 0..64 {
            cache.transform(i, 64, i as f32, &mode);
        }
        assert!(cache.len() <= 8);
    }

    #[test]
    fn non_finite_offset_lands_in_the_zero_bucket() {
        let mode = helix();
        let mut cache = PositionCache::new();
        let nan = cache.transform(2, 16, f32::NAN, &mode);
        let zero = cache.transform(2, 16, 0.0, &mode);
        assert_eq!(nan, zero);
    }
}
