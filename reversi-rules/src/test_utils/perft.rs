//! "Perft" performance test: count the number of leaves at a given depth.
//! Useful for checking the move generator against known values.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::{rules, Board, Player};

/// Count leaves below the standard 8x8 opening.
pub fn run_perft(depth: u64) -> u64 {
    perft(&Board::default(), Player::default(), depth)
}

/// Count leaves below an arbitrary position with `player` to move.
/// A forced pass counts as a ply; two passes in a row end the game.
pub fn perft(board: &Board, player: Player, depth: u64) -> u64 {
    leaves_below(board, player, depth, false)
}

fn leaves_below(board: &Board, player: Player, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = rules::legal_moves(board, player);
    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, !player, depth - 1, true);
    }

    all_moves
        .into_iter()
        .filter_map(|mv| {
            let mut next = board.clone();
            rules::apply_move(&mut next, player, mv).ok()?;
            Some(leaves_below(&next, !player, depth - 1, false))
        })
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), 244);
}

#[test]
fn perft_05() {
    assert_eq!(run_perft(5), 1396);
}

#[test]
fn perft_06() {
    assert_eq!(run_perft(6), 8200);
}

#[test]
fn perft_symmetric_for_second_player() {
    // The opening cross is symmetric, so either colour sees the same tree.
    let board = Board::default();
    assert_eq!(perft(&board, Player::White, 4), 244);
}
