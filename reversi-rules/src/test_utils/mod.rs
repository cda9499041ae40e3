//! Utilities used for testing, benchmarking and playing by hand.

mod perft;
pub use perft::{perft, run_perft};

mod play;
pub use play::play_interactive;
