use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::process::ExitCode;
use termlink_hack::cli::{CliInterface, parse_cli};
use termlink_hack::logging::{default_log_path, init_logging};
use termlink_hack::tui::TuiInterface;
use termlink_hack::{
    EMBEDDED_WORDBANK, GameState, PuzzleEngine, game_loop, info_log, load_wordbank_from_file,
    load_wordbank_from_str,
};

fn main() -> ExitCode {
    let cli = parse_cli();

    if let Some(path) = cli.log_file.clone().or_else(default_log_path)
        && let Err(e) = init_logging(&path)
    {
        eprintln!("Logging disabled, could not open '{}': {e}", path.display());
    }

    let dictionary = match &cli.wordbank_path {
        Some(path) => match load_wordbank_from_file(path) {
            Ok(dictionary) => dictionary,
            Err(e) => {
                eprintln!("Failed to load word bank from '{path}': {e}");
                return ExitCode::FAILURE;
            }
        },
        None => load_wordbank_from_str(EMBEDDED_WORDBANK),
    };
    info_log!("Loaded {} words", dictionary.len());

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut engine = match PuzzleEngine::new(&dictionary, cli.puzzle_config(), rng) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Could not build a puzzle: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = if cli.plain {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(&mut engine, &dictionary, &mut interface)
    } else {
        match TuiInterface::new() {
            Ok(mut interface) => game_loop(&mut engine, &dictionary, &mut interface),
            Err(e) => {
                eprintln!("Failed to start the terminal interface: {e}");
                return ExitCode::FAILURE;
            }
        }
    };

    match result {
        Ok(state) => {
            info_log!("Session ended in state {:?}", state);
            if state == GameState::LoggedIn {
                println!("Password accepted. Goodbye.");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Game error: {e}");
            ExitCode::FAILURE
        }
    }
}
