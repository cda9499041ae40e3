//! Game configuration: board size and who moves first.

use crate::error::{Error, Result};
use crate::game::Player;
use crate::{DEFAULT_EDGE_LENGTH, MAX_EDGE_LENGTH, MIN_EDGE_LENGTH};

/// Settings fixed for the lifetime of a [`Game`](crate::Game).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GameConfig {
    pub edge_length: usize,
    pub first_player: Player,
}

impl Default for GameConfig {
    /// The standard 8x8 game with Black moving first.
    fn default() -> Self {
        Self {
            edge_length: DEFAULT_EDGE_LENGTH,
            first_player: Player::default(),
        }
    }
}

impl GameConfig {
    pub fn with_edge_length(self, edge_length: usize) -> Self {
        Self {
            edge_length,
            ..self
        }
    }

    pub fn with_first_player(self, first_player: Player) -> Self {
        Self {
            first_player,
            ..self
        }
    }

    /// Check that the board described by this config can be seeded.
    pub fn validate(&self) -> Result<()> {
        check_edge_length(self.edge_length)
    }
}

/// The centre seeding needs an even edge of at least [`MIN_EDGE_LENGTH`];
/// column notation caps it at [`MAX_EDGE_LENGTH`].
pub(crate) fn check_edge_length(edge_length: usize) -> Result<()> {
    if edge_length < MIN_EDGE_LENGTH || edge_length > MAX_EDGE_LENGTH || edge_length % 2 != 0 {
        Err(Error::InvalidSize { edge_length })
    } else {
        Ok(())
    }
}
