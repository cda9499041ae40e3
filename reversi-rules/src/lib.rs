//! `reversi-rules` is the rule engine for Reversi/Othello on square boards.
//!
//! The crate is split along the three jobs of the engine:
//!
//!  - [`Board`] owns cell ownership and board geometry, with bounds-checked access.
//!  - [`rules`] decides which placements are legal and which chips they flip,
//!    by casting rays in the eight [`Direction`]s from the candidate cell.
//!  - [`Game`] advances turns, applies forced passes, detects the end of the
//!    game and scores it.
//!
//! Nothing here draws, reads input or performs I/O; front ends poll
//! [`Game::legal_moves`] and call [`Game::play`] (or `apply_move` followed by
//! `advance_turn`) with the cell the user picked.

pub mod rules;
pub mod test_utils;

mod board;
mod config;
mod error;
mod game;
mod location;
mod logging;
mod utils;

pub use board::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use location::*;
pub use logging::init_logging;

/// The edge length of a standard Othello board.
pub const DEFAULT_EDGE_LENGTH: usize = 8;

/// The smallest edge length that fits the centre opening with room to play.
pub const MIN_EDGE_LENGTH: usize = 4;

/// The largest edge length expressible in column-letter notation.
pub const MAX_EDGE_LENGTH: usize = 26;
