use super::*;
use crate::game_repr::{Board, PrincipalVariation};


// ==================== HELPER FUNCTIONS ====================

/// Position `index` of the reference variation and the color to move there
pub fn pv_position(index: usize) -> (Board, i32) {
    let pv = PrincipalVariation::reference().expect("reference variation is legal");
    (pv.positions()[index], pv.side_to_move(index).sign())
}

/// Solve with a fresh context, returning the Black-relative value and counters
pub fn solve_fresh(algorithm: Algorithm, config: SearchConfig, index: usize) -> (i32, SearchStats) {
    let (board, color) = pv_position(index);
    let mut ctx = SearchContext::new(config);
    let value = algorithm
        .solve(&mut ctx, &board, color)
        .expect("search should not fail");
    (color * value, ctx.stats)
}
