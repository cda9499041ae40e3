//! The error type shared by every fallible operation in this crate.

use derive_more::{Display, Error};

/// Everything that can go wrong while building a board or playing a game.
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
pub enum Error {
    /// The requested edge length is below the minimum, above the maximum, or odd.
    #[display(fmt = "invalid board size {}: must be even and between 4 and 26", edge_length)]
    InvalidSize { edge_length: usize },

    #[display(fmt = "location ({}, {}) is outside the board", x, y)]
    OutOfBounds { x: usize, y: usize },

    /// The location is occupied, or placing there captures nothing.
    #[display(fmt = "illegal move at ({}, {})", x, y)]
    IllegalMove { x: usize, y: usize },

    #[display(fmt = "the game is over")]
    GameOver,

    #[display(fmt = "invalid player id {}", id)]
    InvalidPlayer { id: u8 },

    #[display(fmt = "invalid player string")]
    ParsePlayer,

    #[display(fmt = "invalid location string")]
    ParseLocation,

    #[display(fmt = "invalid board string")]
    ParseBoard,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
