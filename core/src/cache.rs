use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::{Seed, Simplex2D, TerrainError};

// Explicit memo of constructed noise fields keyed by seed.
//
// Permutation-table setup is the only non-trivial cost of a
// generation call, so interactive callers that regenerate the grid on
// every parameter tweak keep one of these around and only pay that
// cost when the seed itself changes. The mutex serializes cache-miss
// construction when the cache is shared across threads.
#[derive(Default)]
pub struct NoiseCache {
    fields: Mutex<HashMap<Seed, Arc<Simplex2D>>>,
}

impl NoiseCache {
    pub fn new() -> Self {
        Self::default()
    }

    // Return the field for `seed`, constructing and memoizing it on
    // first use. An invalid seed is reported without polluting the map.
    pub fn get_or_build(&self, seed: &Seed) -> Result<Arc<Simplex2D>, TerrainError> {
        let mut fields = self.fields.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(field) = fields.get(seed) {
            return Ok(Arc::clone(field));
        }
        tracing::debug!(%seed, "noise cache miss, building field");
        let field = Arc::new(Simplex2D::new(seed.clone())?);
        fields.insert(seed.clone(), Arc::clone(&field));
        Ok(field)
    }

    pub fn len(&self) -> usize {
        self.fields.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.fields
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

#[cfg(test)]
mod tests {
    use super::NoiseCache;
    use crate::{Seed, TerrainError};
    use std::sync::Arc;

    #[test]
    fn cache_reuses_field_for_equal_seed() {
        let cache = NoiseCache::new();
        let a = cache.get_or_build(&Seed::from(42u64)).unwrap();
        let b = cache.get_or_build(&Seed::from(42u64)).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn cache_builds_distinct_fields_per_seed() {
        let cache = NoiseCache::new();
        let a = cache.get_or_build(&Seed::from(1u64)).unwrap();
        let b = cache.get_or_build(&Seed::from("ridge")).unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn cache_rejects_invalid_seed_without_insert() {
        let cache = NoiseCache::new();
        match cache.get_or_build(&Seed::from("")) {
            Err(TerrainError::InvalidSeed(_)) => {}
            _ => panic!("expected InvalidSeed"),
        }
        assert!(cache.is_empty());
    }

    #[test]
    fn cache_clear_empties_map() {
        let cache = NoiseCache::new();
        cache.get_or_build(&Seed::from(7u64)).unwrap();
        cache.clear();
        assert!(cache.is_empty());
    }
}
