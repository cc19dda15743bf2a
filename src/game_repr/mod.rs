mod board;
mod pv;
mod zobrist;

#[cfg(test)]
mod tests;

pub use board::*;
pub use pv::*;

/*
 * MODULE IS RESPONSIBLE FOR
 * GAME REPRESENTATION AND LOGIC
 */

/// Side whose stones are placed and flipped by a move.
///
/// The search threads a signed `color` multiplier instead of a side; the two
/// are always converted with [`Side::from_color`] so they cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// `color < 0` is White (player 0), anything else is Black (player 1)
    #[inline]
    pub fn from_color(color: i32) -> Self {
        if color < 0 {
            Side::White
        } else {
            Side::Black
        }
    }

    /// Table index: White = 0, Black = 1
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }

    /// Color multiplier of this side: Black = +1, White = -1
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::White => "White",
            Side::Black => "Black",
        }
    }
}

/// Position abstraction consumed by the search algorithms.
///
/// Positions are immutable values: `apply` returns a new position. Whose turn
/// it is is not part of the position; callers pass the side explicitly.
pub trait GameState: Clone + Eq {
    /// Number of cells the search enumerates as candidate moves (0..CELLS)
    const CELLS: usize;

    /// Game is over for both sides
    fn is_terminal(&self) -> bool;

    /// Final score from Black's point of view
    fn terminal_score(&self) -> i32;

    /// Playing `cell` for `side` captures at least one opponent run
    fn outflanks(&self, side: Side, cell: usize) -> bool;

    /// Successor position after `side` plays `cell`
    fn apply(&self, side: Side, cell: usize) -> Self;

    /// Content hash used to key the transposition table
    fn hash_key(&self) -> u64;

    /// Plies left until the game must end, used to decide whether a subtree
    /// is worth caching
    fn remaining_plies(&self) -> u32;
}
