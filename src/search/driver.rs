// Search Driver
//
// Runs one algorithm on a position with a fresh context, timing it and
// recovering from cache exhaustion, and walks a principal variation from the
// end of the game back to its start.

use std::fmt;
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use super::algorithm::Algorithm;
use super::context::{SearchConfig, SearchContext, SearchStats};
use crate::error::{SearchError, SolverResult};
use crate::game_repr::{Board, GameState, PrincipalVariation, Side};

/// Outcome of one top-level search
#[derive(Debug, Clone, Copy)]
pub struct Evaluation {
    /// Value relative to the side to move
    pub value: i32,
    pub stats: SearchStats,
    pub elapsed: Duration,
    /// Cache was on for the search that produced `value`
    pub cache_enabled: bool,
    /// Entries left in the cache when the search finished
    pub cache_entries: usize,
    /// A cached attempt ran out of room and was redone without the cache
    pub cache_exhausted: bool,
}

/// Search `state` with `color` to move
///
/// Counters and cache are reset first. If the cache runs out of room the
/// attempt is abandoned, the cache is disabled on `ctx` and the search is
/// redone from scratch without it.
pub fn evaluate<S: GameState>(
    algorithm: Algorithm,
    ctx: &mut SearchContext<S>,
    state: &S,
    color: i32,
) -> SolverResult<Evaluation> {
    let start_time = Instant::now();
    let mut cache_exhausted = false;

    loop {
        ctx.reset();

        match algorithm.solve(ctx, state, color) {
            Ok(value) => {
                let evaluation = Evaluation {
                    value,
                    stats: ctx.stats,
                    elapsed: start_time.elapsed(),
                    cache_enabled: ctx.use_tt(),
                    cache_entries: ctx.tt.len(),
                    cache_exhausted,
                };
                if ctx.use_tt() {
                    debug!(
                        "tt: white={} black={} hits={} misses={} hit_rate={:.3} ~{}KB",
                        ctx.tt.len_for(Side::White),
                        ctx.tt.len_for(Side::Black),
                        ctx.tt.hits,
                        ctx.tt.misses,
                        ctx.tt.hit_rate(),
                        ctx.tt.memory_usage() / 1024,
                    );
                }
                return Ok(evaluation);
            }
            Err(SearchError::CacheExhausted { entries }) if ctx.use_tt() => {
                warn!(
                    "transposition table exhausted (white={}, black={}, limit {} per side); \
                     disabling it and searching again",
                    ctx.tt.len_for(Side::White),
                    ctx.tt.len_for(Side::Black),
                    entries
                );
                ctx.disable_cache();
                cache_exhausted = true;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Report for one position of a principal variation
#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    /// Plays left in the variation, counting this one
    pub remaining: usize,
    /// Side to move
    pub side: Side,
    /// Black-relative value
    pub value: i32,
    pub expanded: u64,
    pub generated: u64,
    pub elapsed: Duration,
    pub cache_enabled: bool,
}

impl SearchResult {
    pub fn nodes_per_second(&self) -> f64 {
        SearchStats {
            expanded: self.expanded,
            generated: self.generated,
        }
        .nodes_per_second(self.elapsed)
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} moves: value={}, #expanded={}, #generated={}, seconds={:.6}, #generated/second={:.0}",
            self.remaining,
            self.side.name(),
            self.value,
            self.expanded,
            self.generated,
            self.elapsed.as_secs_f64(),
            self.nodes_per_second(),
        )
    }
}

/// Search every position of `pv` from the end of the game backwards
///
/// # Arguments
/// * `algorithm` - Algorithm to run
/// * `config` - Initial configuration; the cache stays off for the rest of the
///   run once it has been exhausted
/// * `pv` - Principal variation to walk
/// * `limit` - Only search this many positions, starting from the last one
/// * `on_result` - Called as soon as each position is solved
pub fn run_along_pv<F>(
    algorithm: Algorithm,
    config: SearchConfig,
    pv: &PrincipalVariation,
    limit: Option<usize>,
    mut on_result: F,
) -> SolverResult<Vec<SearchResult>>
where
    F: FnMut(&SearchResult),
{
    let positions = pv.positions();
    let count = limit.map_or(positions.len(), |n| n.min(positions.len()));
    let mut ctx: SearchContext<Board> = SearchContext::new(config);
    let mut results = Vec::with_capacity(count);

    info!(
        "{} on {} of {} positions (tt={})",
        algorithm,
        count,
        positions.len(),
        config.use_tt
    );

    for (index, board) in positions.iter().take(count).enumerate() {
        let side = pv.side_to_move(index);
        let color = side.sign();

        let evaluation = evaluate(algorithm, &mut ctx, board, color)?;

        let result = SearchResult {
            remaining: pv.len() + 1 - index,
            side,
            value: color * evaluation.value,
            expanded: evaluation.stats.expanded,
            generated: evaluation.stats.generated,
            elapsed: evaluation.elapsed,
            cache_enabled: evaluation.cache_enabled,
        };

        debug!(
            "position {} ({} empties, {} legal moves): value={} cache_entries={}",
            index,
            board.empties(),
            board.legal_moves(side).len(),
            result.value,
            evaluation.cache_entries
        );

        on_result(&result);
        results.push(result);
    }

    Ok(results)
}
