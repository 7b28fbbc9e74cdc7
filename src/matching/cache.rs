//! Per-epoch memoization of grid probability reads.

/// Cache capability consumed by [`OccupancyField`](super::OccupancyField).
///
/// Keys are row-major flat cell indices. Entries are only valid within the
/// current epoch: `reset` invalidates everything and is driven by the
/// caller between independent optimization contexts (map change, new scan,
/// changed search origin). A missed reset silently serves stale values;
/// there is no automatic invalidation.
pub trait CacheStrategy {
    /// Look up a cached value for a flat cell index.
    fn try_get(&self, index: usize) -> Option<f32>;

    /// Store a value for a flat cell index.
    fn put(&mut self, index: usize, value: f32);

    /// Invalidate all entries.
    fn reset(&mut self);
}

#[derive(Clone, Copy, Debug, Default)]
struct CacheSlot {
    value: f32,
    epoch: u32,
}

/// Flat-array cache with O(1) epoch-stamped invalidation.
///
/// One slot per map cell, preallocated at binding time. Adjacent scan
/// points share most of their 2x2 interpolation footprints, so this
/// collapses the 4 reads per point to roughly one read per distinct cell
/// touched. `reset` bumps the epoch counter instead of clearing slots.
#[derive(Clone, Debug)]
pub struct EpochCache {
    slots: Vec<CacheSlot>,
    epoch: u32,
}

impl EpochCache {
    /// Create a cache sized to a map's cell count.
    pub fn new(cell_count: usize) -> Self {
        Self {
            slots: vec![CacheSlot::default(); cell_count],
            // Slots start stamped 0, so the live epoch starts at 1
            epoch: 1,
        }
    }

    /// Number of slots (equals the bound map's cell count).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the cache has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl CacheStrategy for EpochCache {
    fn try_get(&self, index: usize) -> Option<f32> {
        let slot = self.slots.get(index)?;
        if slot.epoch == self.epoch {
            Some(slot.value)
        } else {
            None
        }
    }

    fn put(&mut self, index: usize, value: f32) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.value = value;
            slot.epoch = self.epoch;
        }
    }

    fn reset(&mut self) {
        if self.epoch == u32::MAX {
            // Epoch wrap: re-stamp every slot so none can alias the new epoch
            for slot in &mut self.slots {
                slot.epoch = 0;
            }
            self.epoch = 1;
        } else {
            self.epoch += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_miss_then_hit() {
        let mut cache = EpochCache::new(16);
        assert_eq!(cache.try_get(5), None);

        cache.put(5, 0.75);
        assert_eq!(cache.try_get(5), Some(0.75));
        assert_eq!(cache.try_get(6), None);
    }

    #[test]
    fn test_reset_invalidates() {
        let mut cache = EpochCache::new(16);
        cache.put(3, 0.4);
        assert_eq!(cache.try_get(3), Some(0.4));

        cache.reset();
        assert_eq!(cache.try_get(3), None);

        cache.put(3, 0.9);
        assert_eq!(cache.try_get(3), Some(0.9));
    }

    #[test]
    fn test_out_of_range_index_ignored() {
        let mut cache = EpochCache::new(4);
        cache.put(100, 0.5);
        assert_eq!(cache.try_get(100), None);
    }

    #[test]
    fn test_epoch_wrap_clears_slots() {
        let mut cache = EpochCache::new(8);
        cache.put(2, 0.6);
        cache.epoch = u32::MAX;

        // Slot stamped with an old epoch must not leak through the wrap
        cache.put(7, 0.3);
        cache.reset();
        assert_eq!(cache.epoch, 1);
        assert_eq!(cache.try_get(2), None);
        assert_eq!(cache.try_get(7), None);
    }
}
