use std::sync::LazyLock;

use super::board::DIM;

/// Zobrist hashing constants for 6x6 positions
///
/// One random 64-bit number per (stone color, cell). The side to move is not
/// hashed: each side has its own transposition table.
pub(crate) struct ZobristKeys {
    /// [color][cell] - White = 0, Black = 1
    pub stones: [[u64; DIM]; 2],
}

impl ZobristKeys {
    /// Generate keys from a fixed seed so hashes are reproducible between runs
    fn generate() -> Self {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(0x517cc1b727220a95);

        let mut stones = [[0u64; DIM]; 2];
        for color in &mut stones {
            for cell in color {
                *cell = rng.gen();
            }
        }

        Self { stones }
    }
}

/// Global Zobrist keys - initialized once using LazyLock
pub(crate) static ZOBRIST: LazyLock<ZobristKeys> = LazyLock::new(ZobristKeys::generate);

/// Hash the stones of both colors
pub(crate) fn hash_stones(black: u64, white: u64) -> u64 {
    let mut hash = 0u64;

    let mut bits = black;
    while bits != 0 {
        let cell = bits.trailing_zeros() as usize;
        hash ^= ZOBRIST.stones[1][cell];
        bits &= bits - 1;
    }

    let mut bits = white;
    while bits != 0 {
        let cell = bits.trailing_zeros() as usize;
        hash ^= ZOBRIST.stones[0][cell];
        bits &= bits - 1;
    }

    hash
}
