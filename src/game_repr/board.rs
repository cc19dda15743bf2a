use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use super::zobrist::hash_stones;
use super::{GameState, Side};
use crate::error::BoardParseError;

/// Number of cells on the board
pub const DIM: usize = 36;

/// Pseudo-cell meaning "pass"
pub const PASS: usize = DIM;

/// Board side length
pub const SIDE_LEN: usize = 6;

/// Cell numbers laid out on the 6x6 grid.
///
/// The four centre cells, occupied from the start, are numbered 0..3 so that
/// the 32 playable cells are 4..35.
pub const LAYOUT: [[usize; SIDE_LEN]; SIDE_LEN] = [
    [4, 5, 6, 7, 8, 9],
    [10, 11, 12, 13, 14, 15],
    [16, 17, 0, 1, 18, 19],
    [20, 21, 2, 3, 22, 23],
    [24, 25, 26, 27, 28, 29],
    [30, 31, 32, 33, 34, 35],
];

/// (row, col) of every cell number, inverse of [`LAYOUT`]
const COORDS: [(usize, usize); DIM] = build_coords();

const fn build_coords() -> [(usize, usize); DIM] {
    let mut coords = [(0, 0); DIM];
    let mut row = 0;
    while row < SIDE_LEN {
        let mut col = 0;
        while col < SIDE_LEN {
            coords[LAYOUT[row][col]] = (row, col);
            col += 1;
        }
        row += 1;
    }
    coords
}

const FULL_MASK: u64 = (1u64 << DIM) - 1;

const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[inline]
fn bit(cell: usize) -> u64 {
    1u64 << cell
}

/// 6x6 Othello position.
///
/// One bit per cell number for each color. Copying a board is cheap, and
/// moves always produce a new board.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    black: u64,
    white: u64,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Starting position: cells 1 and 2 black, 0 and 3 white
    pub fn new() -> Self {
        Self {
            black: bit(1) | bit(2),
            white: bit(0) | bit(3),
        }
    }

    #[inline]
    pub fn is_black(&self, cell: usize) -> bool {
        self.black & bit(cell) != 0
    }

    #[inline]
    pub fn is_white(&self, cell: usize) -> bool {
        self.white & bit(cell) != 0
    }

    #[inline]
    pub fn is_free(&self, cell: usize) -> bool {
        (self.black | self.white) & bit(cell) == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        (self.black | self.white) == FULL_MASK
    }

    /// Number of empty cells
    #[inline]
    pub fn empties(&self) -> u32 {
        DIM as u32 - (self.black | self.white).count_ones()
    }

    /// (own, opponent) stones for `side`
    #[inline]
    fn stones(&self, side: Side) -> (u64, u64) {
        match side {
            Side::Black => (self.black, self.white),
            Side::White => (self.white, self.black),
        }
    }

    /// Opponent stones flipped along one direction, or 0 if the run is not
    /// closed by an own stone
    fn flank_run(own: u64, opp: u64, cell: usize, dr: isize, dc: isize) -> u64 {
        let (row, col) = COORDS[cell];
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        let mut run = 0u64;

        while (0..SIDE_LEN as isize).contains(&r) && (0..SIDE_LEN as isize).contains(&c) {
            let next = bit(LAYOUT[r as usize][c as usize]);
            if opp & next != 0 {
                run |= next;
            } else if own & next != 0 {
                return run;
            } else {
                return 0;
            }
            r += dr;
            c += dc;
        }

        0
    }

    /// Whether `side` playing `cell` captures at least one opponent run
    pub fn outflank(&self, side: Side, cell: usize) -> bool {
        if cell >= DIM || !self.is_free(cell) {
            return false;
        }
        let (own, opp) = self.stones(side);
        DIRECTIONS
            .iter()
            .any(|&(dr, dc)| Self::flank_run(own, opp, cell, dr, dc) != 0)
    }

    /// Board after `side` plays `cell`; [`PASS`] returns the board unchanged
    pub fn make_move(&self, side: Side, cell: usize) -> Board {
        if cell == PASS {
            return *self;
        }
        debug_assert!(self.is_free(cell), "cell {cell} is occupied");

        let (own, opp) = self.stones(side);
        let flips = DIRECTIONS
            .iter()
            .fold(0u64, |acc, &(dr, dc)| acc | Self::flank_run(own, opp, cell, dr, dc));

        let own = own | flips | bit(cell);
        let opp = opp & !flips;
        match side {
            Side::Black => Board { black: own, white: opp },
            Side::White => Board { black: opp, white: own },
        }
    }

    /// Legal cells for `side`, in increasing cell order
    pub fn legal_moves(&self, side: Side) -> SmallVec<[usize; 16]> {
        (0..DIM).filter(|&cell| self.outflank(side, cell)).collect()
    }

    pub fn has_move(&self, side: Side) -> bool {
        (0..DIM).any(|cell| self.outflank(side, cell))
    }

    /// Full board, or neither side can move
    pub fn is_terminal(&self) -> bool {
        self.is_full() || (!self.has_move(Side::Black) && !self.has_move(Side::White))
    }

    /// Disc difference, black minus white
    pub fn value(&self) -> i32 {
        self.black.count_ones() as i32 - self.white.count_ones() as i32
    }

    pub fn hash(&self) -> u64 {
        hash_stones(self.black, self.white)
    }
}

impl GameState for Board {
    const CELLS: usize = DIM;

    #[inline]
    fn is_terminal(&self) -> bool {
        Board::is_terminal(self)
    }

    #[inline]
    fn terminal_score(&self) -> i32 {
        self.value()
    }

    #[inline]
    fn outflanks(&self, side: Side, cell: usize) -> bool {
        self.outflank(side, cell)
    }

    #[inline]
    fn apply(&self, side: Side, cell: usize) -> Self {
        self.make_move(side, cell)
    }

    #[inline]
    fn hash_key(&self) -> u64 {
        self.hash()
    }

    #[inline]
    fn remaining_plies(&self) -> u32 {
        self.empties()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in LAYOUT.iter() {
            for &cell in row {
                let symbol = if self.is_black(cell) {
                    'B'
                } else if self.is_white(cell) {
                    'W'
                } else {
                    '.'
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("black", &format_args!("{:#011x}", self.black))
            .field("white", &format_args!("{:#011x}", self.white))
            .finish()
    }
}

/// Parses 36 symbols (`B`, `W`, `.`) in row-major grid order; whitespace is
/// ignored.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != DIM {
            return Err(BoardParseError::WrongLength {
                expected: DIM,
                actual: symbols.len(),
            });
        }

        let mut board = Board { black: 0, white: 0 };
        for (idx, symbol) in symbols.into_iter().enumerate() {
            let cell = LAYOUT[idx / SIDE_LEN][idx % SIDE_LEN];
            match symbol {
                'B' | 'b' => board.black |= bit(cell),
                'W' | 'w' => board.white |= bit(cell),
                '.' | '-' => {}
                other => return Err(BoardParseError::UnknownSymbol(other)),
            }
        }
        Ok(board)
    }
}
