//! Per-search state: configuration, node counters and the transposition table.
//!
//! A [`SearchContext`] is created by the caller and passed down every
//! recursive call, so nothing is global and two searches never share
//! counters or cache entries.

use std::time::Duration;

use super::transposition_table::TranspositionTable;
use crate::game_repr::GameState;

/// Default remaining-plies threshold below which results are not cached
pub const DEFAULT_STORE_THRESHOLD: u32 = 3;

/// Default maximum number of cache entries per side
pub const DEFAULT_MAX_ENTRIES: usize = 4_000_000;

/// Comparison used by the Scout test procedure at terminal positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TestCondition {
    /// `value > bound`
    #[default]
    Strict,
    /// `value >= bound`
    Inclusive,
}

impl TestCondition {
    #[inline]
    pub fn holds(self, value: i32, bound: i32) -> bool {
        match self {
            TestCondition::Strict => value > bound,
            TestCondition::Inclusive => value >= bound,
        }
    }
}

/// Search configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Consult and fill the transposition table
    pub use_tt: bool,
    /// Only positions with more than this many plies left are cached
    pub store_threshold: u32,
    /// Entries per side before the table reports exhaustion
    pub max_entries: usize,
    /// Comparison used by the Scout test procedure
    pub test_condition: TestCondition,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            use_tt: false,
            store_threshold: DEFAULT_STORE_THRESHOLD,
            max_entries: DEFAULT_MAX_ENTRIES,
            test_condition: TestCondition::Strict,
        }
    }
}

impl SearchConfig {
    pub fn with_tt(mut self, use_tt: bool) -> Self {
        self.use_tt = use_tt;
        self
    }

    pub fn with_store_threshold(mut self, threshold: u32) -> Self {
        self.store_threshold = threshold;
        self
    }

    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }

    pub fn with_test_condition(mut self, condition: TestCondition) -> Self {
        self.test_condition = condition;
        self
    }
}

/// Node counters, reported only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Internal nodes visited
    pub expanded: u64,
    /// Child positions produced, passes included
    pub generated: u64,
}

impl SearchStats {
    pub fn nodes_per_second(&self, elapsed: Duration) -> f64 {
        let secs = elapsed.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.generated as f64 / secs
        }
    }
}

/// Everything a search mutates
pub struct SearchContext<S: GameState> {
    pub config: SearchConfig,
    pub stats: SearchStats,
    pub tt: TranspositionTable<S>,
}

impl<S: GameState> SearchContext<S> {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            tt: TranspositionTable::with_capacity(config.max_entries, config.store_threshold),
            config,
            stats: SearchStats::default(),
        }
    }

    /// Clear counters and cache before a new top-level search
    pub fn reset(&mut self) {
        self.stats = SearchStats::default();
        self.tt.clear();
    }

    /// Turn the cache off and release its memory
    pub fn disable_cache(&mut self) {
        self.config.use_tt = false;
        self.tt.clear();
        self.tt.shrink_to_fit();
    }

    #[inline]
    pub fn use_tt(&self) -> bool {
        self.config.use_tt
    }
}

impl<S: GameState> Default for SearchContext<S> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
