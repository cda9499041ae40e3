use crate::{Error, Game, GameConfig, Location, Outcome};
use std::io::{self, BufRead, Write};

/// Play an interactive game on stdin/stdout, one location per line ("C4").
pub fn play_interactive(config: GameConfig) -> io::Result<()> {
    let mut game =
        Game::new(config).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !game.is_over() {
        println!("\n{}\n", game);
        println!("Legal moves: {}", game.legal_moves());

        print!("Enter a move: ");
        io::stdout().flush()?;
        let input_line = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };

        let mv: Location = match input_line.parse() {
            Ok(mv) => mv,
            Err(_) => {
                println!("Cannot parse move.");
                continue;
            }
        };

        match game.play(mv) {
            Ok(outcome) if outcome.opponent_passed => {
                println!("{} has no legal move and passes.", !outcome.player)
            }
            Ok(_) => {}
            Err(e @ Error::OutOfBounds { .. }) | Err(e @ Error::IllegalMove { .. }) => {
                println!("Invalid move: {}.", e)
            }
            Err(e) => return Err(io::Error::new(io::ErrorKind::Other, e)),
        }
    }

    println!("\n{}\n", game);
    match game.winner() {
        Outcome::Winner(winner) => println!("Winner: {}.", winner),
        Outcome::Draw => println!("Draw."),
    }
    Ok(())
}
