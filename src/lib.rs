// Library interface for termlink-hack
// This allows integration tests to access internal modules

pub mod cli;
pub mod config;
pub mod cursor;
pub mod engine;
pub mod error;
pub mod game_state;
pub mod grid;
pub mod logging;
pub mod screen;
pub mod selection;
pub mod selector;
pub mod transcript;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use config::PuzzleConfig;
pub use engine::{MAX_ATTEMPTS, PuzzleEngine, Snapshot};
pub use error::PuzzleError;
pub use game_state::{GameInterface, GameState, InputEvent, Outcome, UserAction, game_loop};
pub use grid::Grid;
pub use selector::{WordList, select_words};
pub use wordbank::{Dictionary, EMBEDDED_WORDBANK, load_wordbank_from_file, load_wordbank_from_str};
