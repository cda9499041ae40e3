//! Miscellaneous project utilities.

use crate::location::COLUMN_LETTERS;
use std::fmt::{self, Formatter};
use std::iter::Iterator;

/// Format `edge_length²` characters into a lettered, numbered grid.
/// `piece_iter` must yield exactly that many items, in row-major order.
pub fn format_grid<T: Iterator<Item = char>>(
    mut piece_iter: T,
    edge_length: usize,
    f: &mut Formatter,
) -> fmt::Result {
    write!(f, "   ")?;
    for letter in COLUMN_LETTERS.chars().take(edge_length) {
        write!(f, " {}", letter)?;
    }

    for row in 0..edge_length {
        write!(f, "\n{:>3} ", row + 1)?;
        for _ in 0..edge_length {
            write!(f, "{} ", piece_iter.next().ok_or(fmt::Error)?)?;
        }
    }

    match piece_iter.next() {
        None => Ok(()),
        _ => Err(fmt::Error),
    }
}
