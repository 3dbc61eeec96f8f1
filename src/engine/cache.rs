//! Memoized deck statistics.
//!
//! The editor recomputes statistics on every change, and undo/redo often
//! returns to a selection it has already seen. `StatisticsCache` keeps
//! results keyed by `(format, selection)` for one `DeckEngine`. A cached
//! result is the value a fresh computation would produce.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::deck::DeckSelection;
use crate::formats::FormatId;
use crate::stats::DeckStatistics;

use super::compute::DeckEngine;

/// Bounded memo table for `DeckEngine::statistics`.
///
/// A cache must only be used with the engine it was filled from.
/// When full, the table is cleared before the next insert.
#[derive(Clone, Debug)]
pub struct StatisticsCache {
    entries: FxHashMap<(FormatId, DeckSelection), Arc<DeckStatistics>>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl Default for StatisticsCache {
    fn default() -> Self {
        Self::new(256)
    }
}

impl StatisticsCache {
    /// Create a cache holding at most `capacity` results.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: FxHashMap::default(),
            capacity: capacity.max(1),
            hits: 0,
            misses: 0,
        }
    }

    /// Return the cached statistics, computing them on a miss.
    pub fn get_or_compute(
        &mut self,
        engine: &DeckEngine,
        cards: &DeckSelection,
        format_id: &FormatId,
    ) -> Arc<DeckStatistics> {
        let key = (format_id.clone(), cards.clone());
        if let Some(stats) = self.entries.get(&key) {
            self.hits += 1;
            return Arc::clone(stats);
        }

        self.misses += 1;
        if self.entries.len() >= self.capacity {
            self.entries.clear();
        }
        let stats = Arc::new(engine.statistics(cards, format_id));
        self.entries.insert(key, Arc::clone(&stats));
        stats
    }

    /// Drop every cached result.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    #[must_use]
    pub fn misses(&self) -> u64 {
        self.misses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardRegistry, CardType, Side};
    use crate::formats::Format;

    fn engine() -> DeckEngine {
        let catalog: CardRegistry = [
            Card::new("ronin", "Ronin", Side::Dynasty, CardType::Character, "neutral"),
            Card::new("banzai", "Banzai!", Side::Conflict, CardType::Event, "neutral"),
        ]
        .into_iter()
        .collect();
        DeckEngine::new(catalog, vec![Format::new("skirmish", "Skirmish")])
    }

    #[test]
    fn test_hit_matches_fresh_computation() {
        let engine = engine();
        let mut cache = StatisticsCache::default();
        let format = FormatId::new("skirmish");
        let deck = DeckSelection::new().with("ronin", 3);

        let first = cache.get_or_compute(&engine, &deck, &format);
        let second = cache.get_or_compute(&engine, &deck.clone(), &format);

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(*second, engine.statistics(&deck, &format));
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 1);
    }

    #[test]
    fn test_key_includes_format() {
        let engine = engine();
        let mut cache = StatisticsCache::default();
        let deck = DeckSelection::new().with("ronin", 3);

        let skirmish = cache.get_or_compute(&engine, &deck, &FormatId::new("skirmish"));
        let emerald = cache.get_or_compute(&engine, &deck, &FormatId::new("emerald"));

        assert_ne!(skirmish.bounds, emerald.bounds);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_capacity_clears() {
        let engine = engine();
        let mut cache = StatisticsCache::new(2);
        let format = FormatId::new("skirmish");

        for n in 1..=3 {
            let deck = DeckSelection::new().with("ronin", n);
            cache.get_or_compute(&engine, &deck, &format);
        }

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.misses(), 3);

        cache.clear();
        assert!(cache.is_empty());
    }
}
