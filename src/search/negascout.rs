// Negascout: alpha-beta negamax with null-window probes
//
// The first child is searched with the full window. Every later child is
// first probed with the null window (alpha, alpha + 1); only when the probe
// lands strictly inside (alpha, beta) is it re-searched with (score, beta).
//
// The returned value is `alpha`, the accumulated lower bound, so a position
// whose value is below the window reports the window's lower edge. The ply
// counter grows (`depth + 1`) on each call; it is never used as a cutoff.

use super::context::SearchContext;
use super::transposition_table::Bound;
use crate::error::SearchError;
use crate::game_repr::{GameState, Side};

/// Negascout search
///
/// # Arguments
///
/// * `ctx` - Search context (counters and transposition table)
/// * `state` - Position to search
/// * `depth` - Ply counter, incremented on each recursive call
/// * `alpha` - Lower bound, `alpha < beta`
/// * `beta` - Upper bound
/// * `color` - +1 for Black to move, -1 for White
///
/// # Returns
///
/// `alpha` after all children, from the perspective of `color`
pub fn negascout<S: GameState>(
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
                Bound::Exact => return Ok(alpha.max(entry.value)),
                Bound::Lower if entry.value >= beta => return Ok(entry.value),
                Bound::Upper if entry.value <= alpha => return Ok(alpha),
                _ => {}
            }
        }
    }

    ctx.stats.expanded += 1;

    let alpha_orig = alpha;
    let mut moved = false;
    let mut is_first_child = true;

    for cell in 0..S::CELLS {
        if state.outflanks(side, cell) {
            moved = true;
            ctx.stats.generated += 1;
            let child = state.apply(side, cell);

            let score = if is_first_child {
                is_first_child = false;
                -negascout(ctx, &child, depth + 1, -beta, -alpha, -color)?
            } else {
                let probe = -negascout(ctx, &child, depth + 1, -alpha - 1, -alpha, -color)?;
                if alpha < probe && probe < beta {
                    -negascout(ctx, &child, depth + 1, -beta, -probe, -color)?
                } else {
                    probe
                }
            };

            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }
    }

    if !moved {
        let score = -negascout(ctx, state, depth + 1, -beta, -alpha, -color)?;
        alpha = alpha.max(score);
        ctx.stats.generated += 1;
    }

    if ctx.use_tt() {
        ctx.tt
            .store(side, state, alpha, Bound::classify(alpha, alpha_orig, beta))?;
    }

    Ok(alpha)
}
