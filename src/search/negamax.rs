// Negamax Search, full-width and with Alpha-Beta Pruning
//
// Negamax is a variant of the minimax algorithm that simplifies implementation
// by taking advantage of the zero-sum property of the game: max(a, b) = -min(-a, -b).
// Instead of separate maximizing and minimizing functions, we use one function
// that negates the score at each level.
//
// `color` is +1 when Black is to move and -1 when White is, and every value
// returned is relative to that side. Both variants search to the end of the
// game: `depth` only mirrors the signature and is never a cutoff.
//
// A side without a legal move passes: the same position is searched again
// with the other color, counted as one generated node.

use super::context::SearchContext;
use super::transposition_table::Bound;
use crate::error::SearchError;
use crate::game_repr::{GameState, Side};

/// Larger than any reachable score
pub const INFINITY: i32 = i32::MAX;

/// Full-width negamax, no pruning
///
/// # Arguments
///
/// * `ctx` - Search context (counters and transposition table)
/// * `state` - Position to search
/// * `depth` - Ply counter, decremented on each recursive call
/// * `color` - +1 for Black to move, -1 for White
///
/// # Returns
///
/// Value of the position from the perspective of `color`
pub fn negamax<S: GameState>(
    ctx: &mut SearchContext<S>,
    state: &S,
    depth: i32,
    color: i32,
) -> Result<i32, SearchError> {
    let side = Side::from_color(color);

    if state.is_terminal() {
        return Ok(color * state.terminal_score());
    }

    if ctx.use_tt() {
        if let Some(entry) = ctx.tt.probe(side, state) {
            if entry.bound == Bound::Exact {
                return Ok(entry.value);
            }
        }
    }

    ctx.stats.expanded += 1;

    let mut alpha = -INFINITY;
    let mut moved = false;

    for cell in 0..S::CELLS {
        if state.outflanks(side, cell) {
            moved = true;
            ctx.stats.generated += 1;
            let child = state.apply(side, cell);
            alpha = alpha.max(-negamax(ctx, &child, depth - 1, -color)?);
        }
    }

    if !moved {
        ctx.stats.generated += 1;
        alpha = alpha.max(-negamax(ctx, state, depth - 1, -color)?);
    }

    if ctx.use_tt() {
        ctx.tt.store(side, state, alpha, Bound::Exact)?;
    }

    Ok(alpha)
}

/// Negamax search with alpha-beta pruning
///
/// Enumeration of the remaining children stops as soon as `alpha >= beta`.
/// The returned value is the best child score found (`score`), which can lie
/// outside the window after a cutoff; `alpha` only narrows the children's
/// window.
///
/// # Arguments
///
/// * `ctx` - Search context (counters and transposition table)
/// * `state` - Position to search
/// * `depth` - Ply counter, decremented on each recursive call
/// * `alpha` - Lower bound (best score the side to move can guarantee)
/// * `beta` - Upper bound (best score opponent will allow), `alpha < beta`
/// * `color` - +1 for Black to move, -1 for White
///
/// # Returns
///
/// Value of the position from the perspective of `color`
pub fn negamax_alpha_beta<S: GameState>(
    ctx: &mut SearchContext<S>,
    state: &S,
    depth: i32,
    mut alpha: i32,
    beta: i32,
    color: i32,
) -> Result<i32, SearchError> {
    debug_assert!(alpha < beta, "empty window ({alpha}, {beta})");
    let side = Side::from_color(color);

    if state.is_terminal() {
        return Ok(color * state.terminal_score());
    }

    if ctx.use_tt() {
        if let Some(entry) = ctx.tt.probe(side, state) {
            match entry.bound {
                Bound::Exact => return Ok(entry.value),
                Bound::Lower if entry.value >= beta => return Ok(entry.value),
                Bound::Upper if entry.value <= alpha => return Ok(entry.value),
                _ => {}
            }
        }
    }

    ctx.stats.expanded += 1;

    let alpha_orig = alpha;
    let mut score = -INFINITY;
    let mut moved = false;

    for cell in 0..S::CELLS {
        if state.outflanks(side, cell) {
            moved = true;
            ctx.stats.generated += 1;
            let child = state.apply(side, cell);
            let val = -negamax_alpha_beta(ctx, &child, depth - 1, -beta, -alpha, -color)?;
            score = score.max(val);
            alpha = alpha.max(val);
            if alpha >= beta {
                break;
            }
        }
    }

    if !moved {
        ctx.stats.generated += 1;
        let val = -negamax_alpha_beta(ctx, state, depth - 1, -beta, -alpha, -color)?;
        score = score.max(val);
    }

    if ctx.use_tt() {
        ctx.tt
            .store(side, state, score, Bound::classify(score, alpha_orig, beta))?;
    }

    Ok(score)
}
