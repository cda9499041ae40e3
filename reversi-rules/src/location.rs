//! Code for working with [`Location`]s and [`Direction`]s on the board.

use crate::error::{Error, Result};
use crate::MAX_EDGE_LENGTH;
use derive_more::{From, Into};
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter, Write};
use std::iter::FromIterator;

/// Column labels; their count bounds the largest supported board.
pub(crate) const COLUMN_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A cell on the board. `x` is the column and `y` the row, both counted
/// from zero at the upper-left corner.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Location {
    pub x: usize,
    pub y: usize,
}

/// One of the eight unit steps used to cast rays from a cell.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

/// An ordered list of distinct locations, in board-scan order when produced by this crate.
#[derive(Clone, Debug, Default, Eq, PartialEq, From, Into)]
pub struct LocationList(Vec<Location>);

impl Location {
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Convert from a row-major index on a board with the given edge length.
    #[inline]
    pub fn from_index(index: usize, edge_length: usize) -> Self {
        Self::new(index % edge_length, index / edge_length)
    }

    /// Convert into a row-major index on a board with the given edge length.
    #[inline]
    pub fn to_index(self, edge_length: usize) -> usize {
        self.y * edge_length + self.x
    }

    /// The coordinates as a `(x, y)` pair.
    #[inline]
    pub fn to_coords(self) -> (usize, usize) {
        (self.x, self.y)
    }
}

impl From<(usize, usize)> for Location {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

/// Locations sort in board-scan order: by row, then by column.
impl Ord for Location {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Convert this [`Location`] into string notation ("C4": column letter, then 1-based row).
impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let col_char = COLUMN_LETTERS.chars().nth(self.x).ok_or(fmt::Error)?;
        f.write_char(col_char)?;
        write!(f, "{}", self.y + 1)
    }
}

/// Build a [`Location`] from a 1-indexed string notation ("A4", "c12").
/// Bounds against a particular board are checked by the board, not here.
impl std::str::FromStr for Location {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.trim().chars();
        let col_char = chars.next().ok_or(Error::ParseLocation)?.to_ascii_uppercase();
        let x = COLUMN_LETTERS.find(col_char).ok_or(Error::ParseLocation)?;

        let row: usize = chars
            .as_str()
            .parse()
            .map_err(|_| Error::ParseLocation)?;
        if row == 0 || row > MAX_EDGE_LENGTH {
            return Err(Error::ParseLocation);
        }

        Ok(Self::new(x, row - 1))
    }
}

impl Direction {
    /// All eight directions, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The `(dx, dy)` step for this direction. Rows grow southward.
    #[inline]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }
}

impl LocationList {
    /// Returns whether `loc` is in this list.
    pub fn contains(&self, loc: Location) -> bool {
        self.0.contains(&loc)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Location> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Location] {
        &self.0
    }

    /// Append every location of `other` that is not already present.
    pub(crate) fn merge(&mut self, other: Vec<Location>) {
        for loc in other {
            if !self.0.contains(&loc) {
                self.0.push(loc);
            }
        }
    }

    /// Put the list into board-scan order.
    pub(crate) fn sort(&mut self) {
        self.0.sort_unstable();
    }
}

impl FromIterator<Location> for LocationList {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        let mut list = Self::default();
        list.merge(iter.into_iter().collect());
        list
    }
}

impl IntoIterator for LocationList {
    type Item = Location;
    type IntoIter = std::vec::IntoIter<Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a LocationList {
    type Item = &'a Location;
    type IntoIter = std::slice::Iter<'a, Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for LocationList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = self
            .iter()
            .map(|loc| loc.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}
