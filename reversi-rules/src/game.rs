//! Implements game-level Reversi logic: players, turns, passes and scoring.
//!
//! [`Game`] is the session object a front end owns. It holds exactly one
//! [`Board`], tracks whose turn it is and whether the game is over, and is
//! the only place where turn order is decided. The raw capture rules it
//! relies on live in [`crate::rules`].

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::{Error, Result};
use crate::location::{Location, LocationList};
use crate::rules;
use log::{debug, info};
use std::fmt;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Player {
    /// Player 0; moves first by default.
    Black,
    /// Player 1.
    White,
}

impl Default for Player {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl Player {
    /// The numeric player id: 0 for Black, 1 for White.
    pub fn id(self) -> u8 {
        match self {
            Player::Black => 0,
            Player::White => 1,
        }
    }

    pub fn from_id(id: u8) -> Result<Self> {
        match id {
            0 => Ok(Player::Black),
            1 => Ok(Player::White),
            _ => Err(Error::InvalidPlayer { id }),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => f.write_str("Black"),
            Player::White => f.write_str("White"),
        }
    }
}

impl std::str::FromStr for Player {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" | "b" | "0" => Ok(Player::Black),
            "white" | "w" | "1" => Ok(Player::White),
            _ => Err(Error::ParsePlayer),
        }
    }
}

/// Whether moves are still being accepted.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Phase {
    InProgress,
    /// Neither player has a legal move.
    Over,
}

/// How a finished (or abandoned) game turned out.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{} wins", player),
            Outcome::Draw => f.write_str("Draw"),
        }
    }
}

/// Chip counts for both players.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

impl Score {
    /// Count the chips on a board.
    pub fn of(board: &Board) -> Self {
        Self {
            black: board.count(Player::Black),
            white: board.count(Player::White),
        }
    }

    pub fn for_player(self, player: Player) -> usize {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// Score as: # black chips - # white chips.
    pub fn difference(self) -> isize {
        self.black as isize - self.white as isize
    }

    /// The player with more chips wins; equal counts are a draw.
    pub fn winner(self) -> Outcome {
        if self.black > self.white {
            Outcome::Winner(Player::Black)
        } else if self.white > self.black {
            Outcome::Winner(Player::White)
        } else {
            Outcome::Draw
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.black, self.white)
    }
}

/// Everything a front end needs to render after [`Game::play`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MoveOutcome {
    pub player: Player,
    pub location: Location,
    pub flipped: LocationList,
    /// The opponent had no legal reply, so `player` moves again.
    pub opponent_passed: bool,
    pub phase: Phase,
}

/// The complete state of a game session.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Game {
    config: GameConfig,
    board: Board,
    current_player: Player,
    phase: Phase,
}

impl Default for Game {
    /// The standard 8x8 opening with Black to move.
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            board: Board::default(),
            current_player: Player::default(),
            phase: Phase::InProgress,
        }
    }
}

impl Game {
    /// Start a new game from the opening position described by `config`.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let board = Board::starting(config.edge_length)?;
        Ok(Self::from_parts(config, board, config.first_player))
    }

    pub fn with_edge_length(edge_length: usize) -> Result<Self> {
        Self::new(GameConfig::default().with_edge_length(edge_length))
    }

    /// Resume from an arbitrary position with `current_player` to move.
    /// The game is over right away if neither player can move.
    pub fn from_position(board: Board, current_player: Player) -> Self {
        let config = GameConfig::default()
            .with_edge_length(board.edge_length())
            .with_first_player(current_player);
        Self::from_parts(config, board, current_player)
    }

    fn from_parts(config: GameConfig, board: Board, current_player: Player) -> Self {
        let phase = if rules::has_legal_move(&board, current_player)
            || rules::has_legal_move(&board, !current_player)
        {
            Phase::InProgress
        } else {
            Phase::Over
        };

        Self {
            config,
            board,
            current_player,
            phase,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    #[inline]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }

    /// Cells the current player may place on; empty once the game is over.
    pub fn legal_moves(&self) -> LocationList {
        match self.phase {
            Phase::InProgress => rules::legal_moves(&self.board, self.current_player),
            Phase::Over => LocationList::default(),
        }
    }

    /// Place a chip for the current player and flip what it captures.
    /// Returns the flipped cells. Turn order is untouched until [`Game::advance_turn`].
    pub fn apply_move(&mut self, loc: Location) -> Result<LocationList> {
        if self.phase == Phase::Over {
            return Err(Error::GameOver);
        }
        rules::apply_move(&mut self.board, self.current_player, loc)
    }

    /// Hand the turn to the opponent if they can move; otherwise they pass and
    /// the current player keeps the turn; if neither can move the game is over.
    /// Never changes cell ownership.
    pub fn advance_turn(&mut self) -> Phase {
        if self.phase == Phase::Over {
            return self.phase;
        }

        let other = !self.current_player;
        if rules::has_legal_move(&self.board, other) {
            self.current_player = other;
            debug!("{} to move", other);
        } else if rules::has_legal_move(&self.board, self.current_player) {
            info!("{} has no legal move and passes", other);
        } else {
            self.phase = Phase::Over;
            let score = self.score();
            info!("game over: {} ({})", score.winner(), score);
        }

        self.phase
    }

    /// Apply a move for the current player, then advance the turn.
    pub fn play(&mut self, loc: Location) -> Result<MoveOutcome> {
        let player = self.current_player;
        let flipped = self.apply_move(loc)?;
        let phase = self.advance_turn();

        Ok(MoveOutcome {
            player,
            location: loc,
            flipped,
            opponent_passed: phase == Phase::InProgress && self.current_player == player,
            phase,
        })
    }

    /// Return to the opening position with the configured first player to move.
    pub fn reset(&mut self) {
        self.board.reset();
        self.current_player = self.config.first_player;
        self.phase = Phase::InProgress;
        info!("new {0}x{0} game", self.board.edge_length());
    }

    pub fn score(&self) -> Score {
        Score::of(&self.board)
    }

    /// The leader by chip count; meaningful once the game is over.
    pub fn winner(&self) -> Outcome {
        self.score().winner()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        match self.phase {
            Phase::InProgress => write!(f, "{} to move", self.current_player),
            Phase::Over => write!(f, "{} {}", self.winner(), self.score()),
        }
    }
}
