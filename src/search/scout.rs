// Scout: full-width search driven by a boolean test procedure
//
// `test` answers whether the value of a subtree beats a bound without
// computing the value. Scout searches the first child exactly and only
// re-searches a later child when the test says it would change the current
// score; children that fail the test are discarded.
//
// Unlike the negamax family, both functions work with raw Black-relative
// values: Black (`color == 1`) maximizes and White minimizes. A root caller
// wanting a color-relative value multiplies by `color` itself.

use super::context::{SearchContext, TestCondition};
use super::transposition_table::Bound;
use crate::error::SearchError;
use crate::game_repr::{GameState, Side};

/// Test whether the value of `state` beats `score`
///
/// At terminal positions the raw score is compared with `condition`
/// (strict or inclusive). At Black nodes the first child passing the test
/// answers `true`; at White nodes the first child failing it answers `false`.
/// When no child decides, White nodes pass and Black nodes fail.
pub fn test<S: GameState>(
    ctx: &mut SearchContext<S>,
    state: &S,
    depth: i32,
    score: i32,
    color: i32,
    condition: TestCondition,
) -> bool {
    let side = Side::from_color(color);

    if state.is_terminal() {
        return condition.holds(state.terminal_score(), score);
    }

    if ctx.use_tt() {
        if let Some(entry) = ctx.tt.probe(side, state) {
            if entry.bound == Bound::Exact {
                return condition.holds(color * entry.value, score);
            }
        }
    }

    ctx.stats.expanded += 1;

    let mut moved = false;

    for cell in 0..S::CELLS {
        if state.outflanks(side, cell) {
            moved = true;
            ctx.stats.generated += 1;
            let child = state.apply(side, cell);

            // Max
            if color == 1 && test(ctx, &child, depth - 1, score, -color, condition) {
                return true;
            }

            // Min
            if color == -1 && !test(ctx, &child, depth - 1, score, -color, condition) {
                return false;
            }
        }
    }

    if !moved {
        if color == 1 && test(ctx, state, depth - 1, score, -color, condition) {
            return true;
        }
        if color == -1 && !test(ctx, state, depth - 1, score, -color, condition) {
            return false;
        }
        ctx.stats.generated += 1;
    }

    color != 1
}

/// Scout search
///
/// # Arguments
///
/// * `ctx` - Search context; `ctx.config.test_condition` selects the
///   comparison used by [`test`]
/// * `state` - Position to search
/// * `depth` - Ply counter, decremented on each recursive call
/// * `color` - +1 for Black to move, -1 for White
///
/// # Returns
///
/// Black-relative value of the position (not multiplied by `color`)
pub fn scout<S: GameState>(
    ctx: &mut SearchContext<S>,
    state: &S,
    depth: i32,
    color: i32,
) -> Result<i32, SearchError> {
    let side = Side::from_color(color);

    if state.is_terminal() {
        return Ok(state.terminal_score());
    }

    if ctx.use_tt() {
        if let Some(entry) = ctx.tt.probe(side, state) {
            if entry.bound == Bound::Exact {
                return Ok(color * entry.value);
            }
        }
    }

    ctx.stats.expanded += 1;

    let condition = ctx.config.test_condition;
    let mut moved = false;
    let mut score = 0;
    let mut is_first_child = true;

    for cell in 0..S::CELLS {
        if state.outflanks(side, cell) {
            moved = true;
            ctx.stats.generated += 1;
            let child = state.apply(side, cell);

            if is_first_child {
                is_first_child = false;
                score = scout(ctx, &child, depth - 1, -color)?;
            } else {
                // Max
                if color == 1 && test(ctx, &child, depth - 1, score, -color, condition) {
                    score = scout(ctx, &child, depth - 1, -color)?;
                }

                // Min
                if color == -1 && !test(ctx, &child, depth - 1, score, -color, condition) {
                    score = scout(ctx, &child, depth - 1, -color)?;
                }
            }
        }
    }

    if !moved {
        score = scout(ctx, state, depth - 1, -color)?;
        ctx.stats.generated += 1;
    }

    if ctx.use_tt() {
        ctx.tt.store(side, state, color * score, Bound::Exact)?;
    }

    Ok(score)
}
