use std::collections::HashMap;

use log::trace;

use crate::error::SearchError;
use crate::game_repr::{GameState, Side};

/// Kind of value held by a transposition table entry
///
/// - Exact: the value of the position
/// - Lower: the value is at least this (search failed high)
/// - Upper: the value is at most this (search failed low)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Exact,
    Lower,
    Upper,
}

impl Bound {
    /// Classify a windowed search result against the window it was searched
    /// with
    #[inline]
    pub fn classify(value: i32, alpha: i32, beta: i32) -> Self {
        if value <= alpha {
            Bound::Upper
        } else if value >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        }
    }
}

/// Value stored for a position, relative to the side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachedValue {
    pub value: i32,
    pub bound: Bound,
}

impl Default for CachedValue {
    /// What an absent entry reads as
    fn default() -> Self {
        Self {
            value: -100,
            bound: Bound::Lower,
        }
    }
}

/// Transposition table for positions seen earlier in the same search
///
/// One map per side to move, since the same stones have different values
/// depending on who plays next. Keys are the position hash; the stored
/// position is compared on probe so hash collisions never alias.
pub struct TranspositionTable<S: GameState> {
    tables: [HashMap<u64, (S, CachedValue)>; 2],
    /// Maximum number of entries allowed per side
    max_size: usize,
    /// Minimum remaining plies (exclusive) for a position to be stored
    store_threshold: u32,
    /// Statistics: number of successful probes
    pub hits: u64,
    /// Statistics: number of failed probes
    pub misses: u64,
    /// Statistics: number of entries written
    pub stores: u64,
}

impl<S: GameState> TranspositionTable<S> {
    /// Create a new transposition table
    ///
    /// # Arguments
    /// * `max_size` - Maximum number of entries per side
    /// * `store_threshold` - Positions with this many plies left or fewer are not stored
    pub fn with_capacity(max_size: usize, store_threshold: u32) -> Self {
        Self {
            tables: [HashMap::new(), HashMap::new()],
            max_size,
            store_threshold,
            hits: 0,
            misses: 0,
            stores: 0,
        }
    }

    /// Probe the table for `state` with `side` to move
    ///
    /// Returns the entry if found, None otherwise.
    /// Updates hit/miss statistics.
    pub fn probe(&mut self, side: Side, state: &S) -> Option<CachedValue> {
        match self.tables[side.index()].get(&state.hash_key()) {
            Some((stored, info)) if stored == state => {
                self.hits += 1;
                Some(*info)
            }
            _ => {
                self.misses += 1;
                None
            }
        }
    }

    /// Entry for `state`, or the default entry when absent
    pub fn lookup(&self, side: Side, state: &S) -> CachedValue {
        match self.tables[side.index()].get(&state.hash_key()) {
            Some((stored, info)) if stored == state => *info,
            _ => CachedValue::default(),
        }
    }

    /// Whether a position is deep enough to be worth caching
    #[inline]
    pub fn worth_storing(&self, state: &S) -> bool {
        state.remaining_plies() > self.store_threshold
    }

    /// Store the value of `state` with `side` to move
    ///
    /// Shallow positions are silently skipped. Fails with
    /// [`SearchError::CacheExhausted`] when a new entry would exceed the
    /// capacity or the map cannot grow.
    pub fn store(
        &mut self,
        side: Side,
        state: &S,
        value: i32,
        bound: Bound,
    ) -> Result<(), SearchError> {
        if !self.worth_storing(state) {
            return Ok(());
        }

        let key = state.hash_key();
        let max_size = self.max_size;
        let table = &mut self.tables[side.index()];

        if !table.contains_key(&key) {
            if table.len() >= max_size {
                return Err(SearchError::CacheExhausted {
                    entries: table.len(),
                });
            }
            table.try_reserve(1).map_err(|_| SearchError::CacheExhausted {
                entries: table.len(),
            })?;
        }

        trace!("tt store {:?} value={} bound={:?}", side, value, bound);
        table.insert(key, (state.clone(), CachedValue { value, bound }));
        self.stores += 1;
        Ok(())
    }

    /// Clear both tables and the statistics
    pub fn clear(&mut self) {
        for table in &mut self.tables {
            table.clear();
        }
        self.hits = 0;
        self.misses = 0;
        self.stores = 0;
    }

    /// Release memory held by empty buckets
    pub fn shrink_to_fit(&mut self) {
        for table in &mut self.tables {
            table.shrink_to_fit();
        }
    }

    /// Total entries across both sides
    pub fn len(&self) -> usize {
        self.tables.iter().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entries for one side to move
    pub fn len_for(&self, side: Side) -> usize {
        self.tables[side.index()].len()
    }

    /// Get hit rate (0.0 to 1.0)
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Get memory usage estimate in bytes
    pub fn memory_usage(&self) -> usize {
        // key + position + value + bound, plus HashMap control bytes
        let per_entry = std::mem::size_of::<u64>() + std::mem::size_of::<(S, CachedValue)>() + 1;
        self.len() * per_entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::Board;

    fn table(max_size: usize, threshold: u32) -> TranspositionTable<Board> {
        TranspositionTable::with_capacity(max_size, threshold)
    }

    #[test]
    fn test_classify() {
        assert_eq!(Bound::classify(-5, -5, 5), Bound::Upper);
        assert_eq!(Bound::classify(5, -5, 5), Bound::Lower);
        assert_eq!(Bound::classify(0, -5, 5), Bound::Exact);
    }

    #[test]
    fn test_default_entry() {
        let t = table(100, 0);
        let info = t.lookup(Side::Black, &Board::new());
        assert_eq!(info.value, -100);
        assert_eq!(info.bound, Bound::Lower);
    }

    #[test]
    fn test_store_and_probe() {
        let mut t = table(100, 0);
        let b = Board::new();

        t.store(Side::Black, &b, 4, Bound::Exact).unwrap();

        let probed = t.probe(Side::Black, &b).unwrap();
        assert_eq!(probed.value, 4);
        assert_eq!(probed.bound, Bound::Exact);
        assert_eq!(t.lookup(Side::Black, &b), probed);
        assert_eq!(t.hits, 1);
    }

    #[test]
    fn test_sides_are_separate() {
        let mut t = table(100, 0);
        let b = Board::new();

        t.store(Side::Black, &b, 4, Bound::Exact).unwrap();

        assert!(t.probe(Side::White, &b).is_none());
        assert_eq!(t.len_for(Side::Black), 1);
        assert_eq!(t.len_for(Side::White), 0);
        assert_eq!(t.misses, 1);
    }

    #[test]
    fn test_overwrite_existing_entry() {
        let mut t = table(1, 0);
        let b = Board::new();

        t.store(Side::Black, &b, 1, Bound::Lower).unwrap();
        // Same key does not count against the capacity
        t.store(Side::Black, &b, 2, Bound::Exact).unwrap();

        assert_eq!(t.len(), 1);
        assert_eq!(t.probe(Side::Black, &b).unwrap().value, 2);
    }

    #[test]
    fn test_shallow_positions_skipped() {
        // Starting board has 32 empties
        let mut t = table(100, 32);
        t.store(Side::Black, &Board::new(), 0, Bound::Exact).unwrap();
        assert!(t.is_empty());

        let mut t = table(100, 31);
        t.store(Side::Black, &Board::new(), 0, Bound::Exact).unwrap();
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn test_capacity_exhausted() {
        let mut t = table(1, 0);
        let a = Board::new();
        let b = a.make_move(Side::Black, 12);

        t.store(Side::White, &a, 0, Bound::Exact).unwrap();
        let err = t.store(Side::White, &b, 0, Bound::Exact).unwrap_err();
        assert_eq!(err, SearchError::CacheExhausted { entries: 1 });

        // The other side still has room
        t.store(Side::Black, &b, 0, Bound::Exact).unwrap();
    }

    #[test]
    fn test_clear() {
        let mut t = table(100, 0);
        let b = Board::new();
        t.store(Side::Black, &b, 1, Bound::Exact).unwrap();
        t.probe(Side::Black, &b);

        t.clear();

        assert!(t.is_empty());
        assert_eq!(t.hits, 0);
        assert_eq!(t.misses, 0);
        assert_eq!(t.stores, 0);
    }

    #[test]
    fn test_hit_rate() {
        let mut t = table(100, 0);
        let b = Board::new();
        t.store(Side::Black, &b, 1, Bound::Exact).unwrap();

        // One hit
        t.probe(Side::Black, &b);
        // One miss
        t.probe(Side::Black, &b.make_move(Side::Black, 12));

        assert_eq!(t.hit_rate(), 0.5);
        assert!(t.memory_usage() > 0);
    }
}
