//! Move evaluation: legality and flips by directional capture scans.
//!
//! From an empty cell, a direction captures when the ray leaving the cell
//! crosses one or more opponent chips and then lands on one of the mover's
//! own chips. Every function here is a pure query except [`apply_move`].

use crate::board::Board;
use crate::error::{Error, Result};
use crate::game::Player;
use crate::location::{Direction, Location, LocationList};
use log::{debug, trace};

/// Walk from `origin` along `direction` and return the opponent chips that
/// `player` would capture on that ray. Empty when the ray is not a capture.
fn capture_run(
    board: &Board,
    player: Player,
    origin: Location,
    direction: Direction,
) -> Vec<Location> {
    let (dx, dy) = direction.offset();
    let mut x = origin.x as isize + dx;
    let mut y = origin.y as isize + dy;
    let mut run = Vec::new();

    while board.is_in_range(x, y) {
        let loc = Location::new(x as usize, y as usize);
        match board.owner_unchecked(loc) {
            None => return Vec::new(),
            Some(owner) if owner == player => return run,
            Some(_) => run.push(loc),
        }
        x += dx;
        y += dy;
    }

    Vec::new()
}

/// Whether `player` may place at `loc`: the cell is on the board, empty, and
/// at least one direction captures.
pub fn is_legal_move(board: &Board, player: Player, loc: Location) -> bool {
    if !board.contains(loc) || board.owner_unchecked(loc).is_some() {
        return false;
    }

    Direction::ALL
        .iter()
        .any(|&direction| !capture_run(board, player, loc, direction).is_empty())
}

/// All cells where `player` may place, in board-scan order.
pub fn legal_moves(board: &Board, player: Player) -> LocationList {
    let moves: Vec<Location> = board
        .locations()
        .filter(|&loc| is_legal_move(board, player, loc))
        .collect();
    trace!("{} has {} legal moves", player, moves.len());
    moves.into()
}

/// Whether `player` has any legal move. Stops at the first one found.
pub fn has_legal_move(board: &Board, player: Player) -> bool {
    board
        .locations()
        .any(|loc| is_legal_move(board, player, loc))
}

/// Every chip that flips if `player` places at `loc`, in board-scan order.
/// Empty exactly when the move is not legal.
pub fn compute_flips(board: &Board, player: Player, loc: Location) -> LocationList {
    let mut flips = LocationList::default();
    if !board.contains(loc) || board.owner_unchecked(loc).is_some() {
        return flips;
    }

    for &direction in Direction::ALL.iter() {
        flips.merge(capture_run(board, player, loc, direction));
    }
    flips.sort();
    flips
}

/// Place a chip for `player` at `loc` and flip every captured chip.
/// Returns the flipped locations; the board is untouched on error.
pub fn apply_move(board: &mut Board, player: Player, loc: Location) -> Result<LocationList> {
    if !board.contains(loc) {
        return Err(Error::OutOfBounds { x: loc.x, y: loc.y });
    }

    let flips = compute_flips(board, player, loc);
    if flips.is_empty() {
        return Err(Error::IllegalMove { x: loc.x, y: loc.y });
    }

    board.set_owner(loc, player)?;
    for &flipped in flips.iter() {
        board.set_owner(flipped, player)?;
    }

    debug!("{} plays {}, flipping {}", player, loc, flips);
    Ok(flips)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(x: usize, y: usize) -> Location {
        Location::new(x, y)
    }

    fn locs(coords: &[(usize, usize)]) -> LocationList {
        coords.iter().map(|&(x, y)| loc(x, y)).collect()
    }

    #[test]
    fn opening_moves_for_first_player() {
        let board = Board::default();
        let moves = legal_moves(&board, Player::Black);
        assert_eq!(moves, locs(&[(4, 2), (5, 3), (2, 4), (3, 5)]));

        for mv in moves {
            assert_eq!(compute_flips(&board, Player::Black, mv).len(), 1);
        }
        assert_eq!(compute_flips(&board, Player::Black, loc(5, 3)), locs(&[(4, 3)]));
        assert_eq!(compute_flips(&board, Player::Black, loc(4, 2)), locs(&[(4, 3)]));
        assert_eq!(compute_flips(&board, Player::Black, loc(2, 4)), locs(&[(3, 4)]));
        assert_eq!(compute_flips(&board, Player::Black, loc(3, 5)), locs(&[(3, 4)]));
    }

    #[test]
    fn opening_moves_for_second_player() {
        let board = Board::default();
        let moves = legal_moves(&board, Player::White);
        assert_eq!(moves, locs(&[(3, 2), (2, 3), (5, 4), (4, 5)]));
        assert_eq!(compute_flips(&board, Player::White, loc(2, 3)), locs(&[(3, 3)]));
        for mv in moves {
            assert_eq!(compute_flips(&board, Player::White, mv).len(), 1);
        }
    }

    #[test]
    fn captures_in_all_eight_directions() {
        let board: Board = "
            # . # . # .
            . O O O . .
            # O . O # .
            . O O O . .
            # . # . # .
            . . . . . .
        "
        .parse()
        .unwrap();

        assert!(is_legal_move(&board, Player::Black, loc(2, 2)));
        let flips = compute_flips(&board, Player::Black, loc(2, 2));
        assert_eq!(
            flips,
            locs(&[
                (1, 1),
                (2, 1),
                (3, 1),
                (1, 2),
                (3, 2),
                (1, 3),
                (2, 3),
                (3, 3)
            ])
        );
    }

    #[test]
    fn long_runs_flip_entirely() {
        let board: Board = "
            # O O O O O O .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
        "
        .parse()
        .unwrap();
        let flips = compute_flips(&board, Player::Black, loc(7, 0));
        assert_eq!(flips.len(), 6);
        assert_eq!(flips, (1..7).map(|x| loc(x, 0)).collect::<LocationList>());
    }

    #[test]
    fn board_edge_stops_capture() {
        let board: Board = "
            . O O O
            . . . .
            . . . .
            . . . .
        "
        .parse()
        .unwrap();
        assert!(!is_legal_move(&board, Player::Black, loc(0, 0)));
        assert!(compute_flips(&board, Player::Black, loc(0, 0)).is_empty());
        assert!(!has_legal_move(&board, Player::Black));
    }

    #[test]
    fn gap_or_friendly_neighbour_stops_capture() {
        let board: Board = "
            . O . #
            # . . .
            . . . .
            . . . .
        "
        .parse()
        .unwrap();
        // Empty cell between the run and the anchor.
        assert!(!is_legal_move(&board, Player::Black, loc(0, 0)));
        // Friendly chip right next door captures nothing.
        assert!(!is_legal_move(&board, Player::Black, loc(1, 1)));
    }

    #[test]
    fn occupied_and_out_of_range_cells_are_never_legal() {
        let board = Board::default();
        assert!(!is_legal_move(&board, Player::Black, loc(3, 3)));
        assert!(!is_legal_move(&board, Player::Black, loc(4, 3)));
        assert!(!is_legal_move(&board, Player::Black, loc(8, 8)));
        assert!(compute_flips(&board, Player::Black, loc(8, 8)).is_empty());
    }

    #[test]
    fn apply_move_flips_and_places() {
        let mut board = Board::default();
        let flips = apply_move(&mut board, Player::Black, loc(5, 3)).unwrap();
        assert_eq!(flips, locs(&[(4, 3)]));
        assert_eq!(board.owner_at(loc(5, 3)), Ok(Some(Player::Black)));
        assert_eq!(board.owner_at(loc(4, 3)), Ok(Some(Player::Black)));
        assert_eq!(board.count(Player::Black), 4);
        assert_eq!(board.count(Player::White), 1);
    }

    #[test]
    fn apply_move_rejects_without_mutating() {
        let mut board = Board::default();
        assert_eq!(
            apply_move(&mut board, Player::Black, loc(0, 0)),
            Err(Error::IllegalMove { x: 0, y: 0 })
        );
        assert_eq!(
            apply_move(&mut board, Player::White, loc(0, 9)),
            Err(Error::OutOfBounds { x: 0, y: 9 })
        );
        assert_eq!(board, Board::default());
    }

    #[test]
    fn legality_matches_flips_on_small_board() {
        let board = Board::starting(4).unwrap();
        for player in [Player::Black, Player::White].iter().copied() {
            for loc in board.locations() {
                assert_eq!(
                    is_legal_move(&board, player, loc),
                    !compute_flips(&board, player, loc).is_empty()
                );
            }
        }
    }
}
