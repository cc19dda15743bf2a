//! Exact endgame solver for 6x6 Othello.
//!
//! Positions are walked backwards along a recorded principal variation and
//! each one is solved to the end of the game with one of four searches.

pub mod error;
pub mod game_repr;
pub mod search;

pub use error::{BoardParseError, SearchError, SolverResult};
pub use game_repr::{Board, GameState, PrincipalVariation, Side};
pub use search::{Algorithm, SearchConfig, SearchContext, SearchResult};
