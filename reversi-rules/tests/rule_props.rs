use proptest::prelude::*;
use proptest::sample::Index;
use reversi_rules::{rules, Board, Direction, Game, Location, Phase, Player};

/// Play up to `choices.len()` moves, picking among the legal moves by index.
fn random_game(edge_length: usize, choices: &[Index]) -> Game {
    let mut game = Game::with_edge_length(edge_length).unwrap();
    for choice in choices {
        let moves = game.legal_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves.as_slice()[choice.index(moves.len())];
        game.play(mv).unwrap();
    }
    game
}

fn ray(board: &Board, from: Location, direction: Direction) -> Vec<Location> {
    let (dx, dy) = direction.offset();
    let mut cells = Vec::new();
    let (mut x, mut y) = (from.x as isize + dx, from.y as isize + dy);
    while board.is_in_range(x, y) {
        cells.push(Location::new(x as usize, y as usize));
        x += dx;
        y += dy;
    }
    cells
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn legal_iff_flips(
        edge in prop::sample::select(vec![4usize, 6, 8]),
        choices in prop::collection::vec(any::<Index>(), 0..40),
    ) {
        let game = random_game(edge, &choices);
        let board = game.board();
        for &player in &[Player::Black, Player::White] {
            let moves = rules::legal_moves(board, player);
            for loc in board.locations() {
                let legal = rules::is_legal_move(board, player, loc);
                prop_assert_eq!(legal, !rules::compute_flips(board, player, loc).is_empty());
                prop_assert_eq!(legal, moves.contains(loc));
            }
            prop_assert_eq!(rules::has_legal_move(board, player), !moves.is_empty());
        }
    }

    #[test]
    fn non_capturing_neighbours_contribute_nothing(
        choices in prop::collection::vec(any::<Index>(), 0..40),
    ) {
        let game = random_game(8, &choices);
        let board = game.board();
        let player = game.current_player();
        for mv in game.legal_moves() {
            let flips = rules::compute_flips(board, player, mv);
            for &direction in Direction::ALL.iter() {
                let cells = ray(board, mv, direction);
                let opens_with_opponent = cells
                    .first()
                    .map_or(false, |&next| board.owner_at(next).unwrap() == Some(!player));
                if !opens_with_opponent {
                    prop_assert!(cells.iter().all(|&cell| !flips.contains(cell)));
                }
            }
            for flipped in flips.iter() {
                prop_assert_eq!(board.owner_at(*flipped).unwrap(), Some(!player));
            }
        }
    }

    #[test]
    fn moves_conserve_chips(
        choices in prop::collection::vec(any::<Index>(), 1..40),
    ) {
        let mut game = random_game(8, &choices[1..]);
        prop_assume!(!game.is_over());

        let player = game.current_player();
        let before = game.score();
        let moves = game.legal_moves();
        let mv = moves.as_slice()[choices[0].index(moves.len())];
        let outcome = game.play(mv).unwrap();
        let after = game.score();

        let flipped = outcome.flipped.len();
        prop_assert!(flipped >= 1);
        prop_assert_eq!(after.for_player(player), before.for_player(player) + flipped + 1);
        prop_assert_eq!(after.for_player(!player), before.for_player(!player) - flipped);
        prop_assert_eq!(game.board().owner_at(mv).unwrap(), Some(player));
    }

    #[test]
    fn playouts_end_with_nobody_able_to_move(
        edge in prop::sample::select(vec![4usize, 6]),
        choices in prop::collection::vec(any::<Index>(), 40),
    ) {
        let game = random_game(edge, &choices);
        prop_assert_eq!(game.phase(), Phase::Over);
        prop_assert!(!rules::has_legal_move(game.board(), Player::Black));
        prop_assert!(!rules::has_legal_move(game.board(), Player::White));

        let score = game.score();
        prop_assert_eq!(score.black + score.white + game.board().count_empty(), edge * edge);
    }
}
