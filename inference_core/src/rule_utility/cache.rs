//! Memoisation of rule utilities.

use dashmap::DashMap;

use state_model::{Assignment, UtilityTable};

/// Utilities already computed, per rule input and then per action.
///
/// The cache is shared by concurrent readers; rules with external
/// parameters use the `Disabled` variant since their utilities may change.
#[derive(Debug)]
pub enum UtilityCache {
    Disabled,
    Enabled(DashMap<Assignment, UtilityTable>),
}

impl UtilityCache {
    pub fn enabled() -> Self {
        UtilityCache::Enabled(DashMap::new())
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, UtilityCache::Enabled(_))
    }

    pub fn get(&self, input: &Assignment, actions: &Assignment) -> Option<f64> {
        match self {
            UtilityCache::Enabled(tables) => tables.get(input).and_then(|table| table.get(actions)),
            UtilityCache::Disabled => None,
        }
    }

    pub fn store(&self, input: Assignment, actions: Assignment, util: f64) {
        if let UtilityCache::Enabled(tables) = self {
            tables.entry(input).or_default().set_util(actions, util);
        }
    }

    pub fn clear(&self) {
        if let UtilityCache::Enabled(tables) = self {
            tables.clear();
        }
    }

    /// Number of cached utilities.
    pub fn len(&self) -> usize {
        match self {
            UtilityCache::Enabled(tables) => tables.iter().map(|entry| entry.value().len()).sum(),
            UtilityCache::Disabled => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// An empty cache of the same kind.
    pub fn fresh(&self) -> Self {
        match self {
            UtilityCache::Enabled(_) => UtilityCache::enabled(),
            UtilityCache::Disabled => UtilityCache::Disabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_and_get() {
        let cache = UtilityCache::enabled();
        let input = Assignment::single("a_u", "Yes");
        let action = Assignment::single("a_m'", "Confirm");

        assert_eq!(cache.get(&input, &action), None);
        cache.store(input.clone(), action.clone(), 1.5);
        assert_eq!(cache.get(&input, &action), Some(1.5));
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_disabled_cache_stores_nothing() {
        let cache = UtilityCache::Disabled;
        cache.store(Assignment::new(), Assignment::new(), 1.0);
        assert_eq!(cache.get(&Assignment::new(), &Assignment::new()), None);
        assert!(!cache.is_enabled());
    }

    #[test]
    fn test_fresh_keeps_kind() {
        let cache = UtilityCache::enabled();
        cache.store(Assignment::new(), Assignment::new(), 1.0);

        let fresh = cache.fresh();
        assert!(fresh.is_enabled());
        assert!(fresh.is_empty());
        assert!(!UtilityCache::Disabled.fresh().is_enabled());
    }
}
