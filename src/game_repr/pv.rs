//! Principal variation of a reference 6x6 game.
//!
//! The recorded plays are replayed from the starting position and the
//! intermediate positions are kept so a search can be run on each of them,
//! from the end of the game backwards.

use log::debug;

use super::board::{Board, PASS};
use super::Side;
use crate::error::SearchError;

/// Plays of the reference game, black first, `PASS` (36) marks a pass
pub const REFERENCE_PV: [usize; 33] = [
    12, 21, 26, 13, 22, 18, 7, 6, 5, 27, 33, 23, 17, 11, 19, 15, 14, 31, 20, 32, 30, 10, 25, 24,
    34, 28, 16, 4, 29, 35, 36, 8, 9,
];

/// Positions along a principal variation.
///
/// `positions()[0]` is the position after the last play and
/// `positions()[len()]` the starting position.
#[derive(Debug, Clone)]
pub struct PrincipalVariation {
    moves: Vec<usize>,
    positions: Vec<Board>,
}

impl PrincipalVariation {
    /// Replay `moves` from the starting position
    pub fn extract(moves: &[usize]) -> Result<Self, SearchError> {
        let n = moves.len();
        let mut positions = vec![Board::new(); n + 1];
        let mut board = Board::new();

        for (ply, &cell) in moves.iter().enumerate() {
            let side = Self::side_for_ply(ply);
            if cell != PASS && !board.outflank(side, cell) {
                return Err(SearchError::IllegalMove { ply, cell, side });
            }
            positions[n - ply] = board;
            board = board.make_move(side, cell);
        }
        positions[0] = board;

        debug!("extracted {} positions, final value {}", n + 1, board.value());

        Ok(Self {
            moves: moves.to_vec(),
            positions,
        })
    }

    /// The reference game shipped with the solver
    pub fn reference() -> Result<Self, SearchError> {
        Self::extract(&REFERENCE_PV)
    }

    /// Black plays the even plies
    #[inline]
    fn side_for_ply(ply: usize) -> Side {
        if ply % 2 == 0 {
            Side::Black
        } else {
            Side::White
        }
    }

    /// Number of plays
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    /// Positions from the end of the game back to the start
    pub fn positions(&self) -> &[Board] {
        &self.positions
    }

    /// Side to move at `positions()[index]`
    ///
    /// The position after the last play is assigned the side that would move
    /// next.
    pub fn side_to_move(&self, index: usize) -> Side {
        Self::side_for_ply(self.len() - index)
    }
}
