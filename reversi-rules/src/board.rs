//! The [`Board`]: an N×N grid of cell ownership.
//!
//! A board is a passive holder of state. It answers geometry and ownership
//! queries with bounds checks; the capture rules live in [`crate::rules`].
//! By convention `(0, 0)` is the upper-left cell and storage is row-major.

use crate::config::check_edge_length;
use crate::error::{Error, Result};
use crate::game::Player;
use crate::location::Location;
use crate::{utils, MAX_EDGE_LENGTH};
use log::debug;
use std::fmt;

/// Cell ownership for a square board of fixed edge length.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    edge_length: usize,
    cells: Vec<Option<Player>>,
}

impl Board {
    /// Allocate an empty board. Fails with [`Error::InvalidSize`] unless the
    /// edge length is even and at least [`MIN_EDGE_LENGTH`](crate::MIN_EDGE_LENGTH).
    pub fn new(edge_length: usize) -> Result<Self> {
        check_edge_length(edge_length)?;
        Ok(Self {
            edge_length,
            cells: vec![None; edge_length * edge_length],
        })
    }

    /// Allocate a board already seeded with the opening position.
    pub fn starting(edge_length: usize) -> Result<Self> {
        let mut board = Self::new(edge_length)?;
        board.reset();
        Ok(board)
    }

    /// Clear every cell, then seed the four centre cells in the standard cross:
    /// Black on the main diagonal, White on the anti-diagonal.
    pub fn reset(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = None;
        }

        let c0 = self.edge_length / 2 - 1;
        let c1 = self.edge_length / 2;
        for &(x, y, player) in &[
            (c0, c0, Player::Black),
            (c1, c1, Player::Black),
            (c1, c0, Player::White),
            (c0, c1, Player::White),
        ] {
            let index = Location::new(x, y).to_index(self.edge_length);
            self.cells[index] = Some(player);
        }

        debug!("seeded {0}x{0} board", self.edge_length);
    }

    #[inline]
    pub fn edge_length(&self) -> usize {
        self.edge_length
    }

    /// Pure boundary check on signed coordinates, as produced by ray casting.
    #[inline]
    pub fn is_in_range(&self, x: isize, y: isize) -> bool {
        let edge = self.edge_length as isize;
        x >= 0 && x < edge && y >= 0 && y < edge
    }

    /// Returns whether `loc` lies on this board.
    #[inline]
    pub fn contains(&self, loc: Location) -> bool {
        loc.x < self.edge_length && loc.y < self.edge_length
    }

    /// Get the owner of a cell, or `None` if it is empty.
    pub fn owner_at(&self, loc: Location) -> Result<Option<Player>> {
        self.check_bounds(loc)?;
        Ok(self.owner_unchecked(loc))
    }

    /// Get the owner of a cell without checking bounds.
    /// Panics if `loc` is not on the board.
    #[inline]
    pub(crate) fn owner_unchecked(&self, loc: Location) -> Option<Player> {
        self.cells[loc.to_index(self.edge_length)]
    }

    /// Give a cell to `player`. Only placement logic mutates ownership.
    pub(crate) fn set_owner(&mut self, loc: Location, player: Player) -> Result<()> {
        self.check_bounds(loc)?;
        self.cells[loc.to_index(self.edge_length)] = Some(player);
        Ok(())
    }

    /// Count the cells owned by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|&&cell| cell == Some(player)).count()
    }

    /// Count the empty cells.
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Every location on the board, in board-scan order.
    pub fn locations(&self) -> impl Iterator<Item = Location> {
        let edge_length = self.edge_length;
        (0..edge_length * edge_length).map(move |index| Location::from_index(index, edge_length))
    }

    #[inline]
    fn check_bounds(&self, loc: Location) -> Result<()> {
        if self.contains(loc) {
            Ok(())
        } else {
            Err(Error::OutOfBounds { x: loc.x, y: loc.y })
        }
    }
}

impl Default for Board {
    /// The standard 8x8 opening position.
    fn default() -> Self {
        let edge_length = crate::DEFAULT_EDGE_LENGTH;
        let mut board = Self {
            edge_length,
            cells: vec![None; edge_length * edge_length],
        };
        board.reset();
        board
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(
            self.cells.iter().map(|cell| match cell {
                None => '.',
                Some(Player::Black) => '#',
                Some(Player::White) => 'O',
            }),
            self.edge_length,
            f,
        )
    }
}

/// Parse a board from N² cell characters in row-major order; whitespace is ignored.
/// `.` or `-` is empty, `#`, `X` or `B` is Black, `O` or `W` is White.
impl std::str::FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c.to_ascii_uppercase() {
                '.' | '-' => Ok(None),
                '#' | 'X' | 'B' => Ok(Some(Player::Black)),
                'O' | 'W' => Ok(Some(Player::White)),
                _ => Err(Error::ParseBoard),
            })
            .collect::<Result<Vec<Option<Player>>>>()?;

        let edge_length = (1..=MAX_EDGE_LENGTH)
            .find(|edge| edge * edge == cells.len())
            .ok_or(Error::ParseBoard)?;
        check_edge_length(edge_length)?;

        Ok(Self { edge_length, cells })
    }
}
