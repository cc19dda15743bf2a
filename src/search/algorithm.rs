//! Algorithm registry
//!
//! Enumerates the four search algorithms and applies each one's root-call
//! convention, so callers always get a value relative to the side to move.

use std::fmt;
use std::str::FromStr;

use super::context::SearchContext;
use super::negamax::{negamax, negamax_alpha_beta};
use super::negascout::negascout;
use super::scout::scout;
use crate::error::SearchError;
use crate::game_repr::GameState;

/// Root window used by the windowed searches; wider than any disc difference
pub const ROOT_ALPHA: i32 = -200;
pub const ROOT_BETA: i32 = 200;

/// Enumeration of available search algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Full-width negamax
    #[default]
    Negamax,
    /// Negamax with alpha-beta pruning
    AlphaBeta,
    /// Scout with the boolean test procedure
    Scout,
    /// Negascout (alpha-beta with null-window probes)
    Negascout,
}

impl Algorithm {
    /// Get all available algorithms, in command-line index order
    pub fn all() -> &'static [Algorithm] {
        &[
            Algorithm::Negamax,
            Algorithm::AlphaBeta,
            Algorithm::Scout,
            Algorithm::Negascout,
        ]
    }

    /// Algorithm for a 1-based command-line index
    pub fn from_index(index: usize) -> Option<Algorithm> {
        index
            .checked_sub(1)
            .and_then(|i| Self::all().get(i))
            .copied()
    }

    /// 1-based command-line index
    pub fn index(&self) -> usize {
        match self {
            Algorithm::Negamax => 1,
            Algorithm::AlphaBeta => 2,
            Algorithm::Scout => 3,
            Algorithm::Negascout => 4,
        }
    }

    /// Get the display name for this algorithm
    pub fn display_name(&self) -> &'static str {
        match self {
            Algorithm::Negamax => "Negamax (minmax version)",
            Algorithm::AlphaBeta => "Negamax (alpha-beta version)",
            Algorithm::Scout => "Scout",
            Algorithm::Negascout => "Negascout",
        }
    }

    /// Get a short description of this algorithm
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Negamax => "Exhaustive negamax without pruning",
            Algorithm::AlphaBeta => "Negamax with alpha-beta pruning",
            Algorithm::Scout => "Exact search of the first child, test-driven re-search of the rest",
            Algorithm::Negascout => "Alpha-beta with null-window probes and re-search",
        }
    }

    /// Search `state` to the end of the game
    ///
    /// Returns the value relative to `color`; multiply by `color` for the
    /// Black-relative value.
    pub fn solve<S: GameState>(
        &self,
        ctx: &mut SearchContext<S>,
        state: &S,
        color: i32,
    ) -> Result<i32, SearchError> {
        match self {
            Algorithm::Negamax => negamax(ctx, state, 0, color),
            Algorithm::AlphaBeta => negamax_alpha_beta(ctx, state, 0, ROOT_ALPHA, ROOT_BETA, color),
            Algorithm::Scout => Ok(color * scout(ctx, state, 0, color)?),
            Algorithm::Negascout => negascout(ctx, state, 0, ROOT_ALPHA, ROOT_BETA, color),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error for an unrecognized algorithm name or index
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown algorithm {0:?} (expected 1-4, negamax, alphabeta, scout or negascout)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(index) = s.parse::<usize>() {
            return Self::from_index(index).ok_or_else(|| UnknownAlgorithm(s.to_string()));
        }
        match s.to_ascii_lowercase().replace(&['-', '_'][..], "").as_str() {
            "negamax" | "minmax" => Ok(Algorithm::Negamax),
            "alphabeta" | "ab" => Ok(Algorithm::AlphaBeta),
            "scout" => Ok(Algorithm::Scout),
            "negascout" | "pvs" => Ok(Algorithm::Negascout),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}
