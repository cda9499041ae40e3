use clap::Parser;
use reversi_rules::{init_logging, test_utils::play_interactive, GameConfig, Player};
use std::process;

/// Play Reversi in the terminal, entering moves like "C4".
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of cells along each edge; must be even, from 4 to 26.
    #[arg(long, short = 's', default_value_t = reversi_rules::DEFAULT_EDGE_LENGTH)]
    size: usize,

    /// Who moves first: "black" or "white".
    #[arg(long, default_value = "black")]
    first: Player,
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let config = GameConfig::default()
        .with_edge_length(cli.size)
        .with_first_player(cli.first);
    if let Err(e) = config.validate() {
        eprintln!("{}", e);
        process::exit(2);
    }

    if let Err(e) = play_interactive(config) {
        eprintln!("{}", e);
        process::exit(1);
    }
}
