// Endgame Search
//
// Four exact solvers that play every line to the end of the game:
// - plain negamax (no pruning)
// - negamax with alpha-beta pruning
// - Scout, built on a boolean test procedure
// - Negascout (null-window probes with re-search)
//
// All of them share a per-search context holding node counters and an
// optional transposition table.

mod algorithm;
mod context;
mod driver;
mod negamax;
mod negascout;
mod scout;
mod transposition_table;

#[cfg(test)]
mod tests;

pub use algorithm::{Algorithm, UnknownAlgorithm, ROOT_ALPHA, ROOT_BETA};
pub use context::{
    SearchConfig, SearchContext, SearchStats, TestCondition, DEFAULT_MAX_ENTRIES,
    DEFAULT_STORE_THRESHOLD,
};
pub use driver::{evaluate, run_along_pv, Evaluation, SearchResult};
pub use negamax::{negamax, negamax_alpha_beta, INFINITY};
pub use negascout::negascout;
pub use scout::{scout, test};
pub use transposition_table::{Bound, CachedValue, TranspositionTable};
