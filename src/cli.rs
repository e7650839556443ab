use crate::config::{DEFAULT_NUM_WORDS, DEFAULT_WORD_LENGTH, PuzzleConfig};
use crate::engine::Snapshot;
use crate::game_state::{GameInterface, InputEvent, Outcome, UserAction};
use crate::screen::screen_lines;
use crate::{debug_log, info_log};
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

/// RobCo terminal password puzzle
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,

    /// Number of candidate words hidden in the grid
    #[arg(short = 'n', long = "words", default_value_t = DEFAULT_NUM_WORDS)]
    pub num_words: usize,

    /// Letters per word (4-14)
    #[arg(short = 'l', long = "length", default_value_t = DEFAULT_WORD_LENGTH)]
    pub word_length: usize,

    /// Seed for a reproducible puzzle
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Play with line commands on stdin instead of the full-screen interface
    #[arg(long = "plain")]
    pub plain: bool,

    /// Where to write the log file
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    #[must_use]
    pub fn puzzle_config(&self) -> PuzzleConfig {
        PuzzleConfig::new(self.num_words, self.word_length)
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

const HELP_TEXT: &str =
    "Commands: w/up, s/down, a/left, d/right, e/enter (submit), n/new (new puzzle), q/quit";

/// Map one line of input to an action.
#[must_use]
pub fn parse_command(input: &str) -> Option<UserAction> {
    let event = match input.trim().to_lowercase().as_str() {
        "w" | "up" => InputEvent::MoveUp,
        "s" | "down" => InputEvent::MoveDown,
        "a" | "left" => InputEvent::MoveLeft,
        "d" | "right" => InputEvent::MoveRight,
        "e" | "enter" => InputEvent::Activate,
        "q" | "quit" | "exit" => InputEvent::Quit,
        "n" | "new" => return Some(UserAction::NewGame),
        _ => return None,
    };
    Some(UserAction::Input(event))
}

pub fn display_screen(view: &Snapshot<'_>) {
    println!();
    for line in screen_lines(view) {
        println!("{line}");
    }
}

pub fn display_outcome(outcome: Outcome) {
    match outcome {
        Outcome::NoOp => println!("[no effect]"),
        other => println!("[{other:?}] {}", other.message()),
    }
}

/// Line-driven implementation of `GameInterface` over any `BufRead`.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn render(&mut self, view: &Snapshot<'_>) {
        display_screen(view);
    }

    fn read_action(&mut self) -> Option<UserAction> {
        println!("\n{HELP_TEXT}");
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) => {
                info_log!("CliInterface::read_action() - end of input, quitting");
                return Some(UserAction::Input(InputEvent::Quit));
            }
            Ok(_) => {}
            Err(e) => {
                log::warn!("CliInterface::read_action() - read failed: {e}");
                return Some(UserAction::Input(InputEvent::Quit));
            }
        }
        let action = parse_command(&input);
        if action.is_none() {
            println!("Unknown command '{}'.", input.trim());
        }
        debug_log!("CliInterface::read_action() - {:?}", action);
        action
    }

    fn announce(&mut self, outcome: Outcome) {
        display_outcome(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_cli_defaults() {
        let cli = Cli::try_parse_from(["termlink-hack"]).unwrap();
        assert_eq!(cli.wordbank_path, None);
        assert_eq!(cli.num_words, 12);
        assert_eq!(cli.word_length, 5);
        assert_eq!(cli.seed, None);
        assert!(!cli.plain);
        assert_eq!(cli.puzzle_config(), PuzzleConfig::default());
    }

    #[test]
    fn test_parse_cli_with_options() {
        let cli = Cli::try_parse_from([
            "termlink-hack",
            "-i",
            "words.txt",
            "--words",
            "8",
            "-l",
            "7",
            "--seed",
            "99",
            "--plain",
            "--log-file",
            "/tmp/t.log",
        ])
        .unwrap();
        assert_eq!(cli.wordbank_path.as_deref(), Some("words.txt"));
        assert_eq!(cli.puzzle_config(), PuzzleConfig::new(8, 7));
        assert_eq!(cli.seed, Some(99));
        assert!(cli.plain);
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/t.log")));
    }

    #[test]
    fn test_parse_cli_rejects_bad_number() {
        assert!(Cli::try_parse_from(["termlink-hack", "--length", "five"]).is_err());
    }

    #[test]
    fn test_parse_command_moves() {
        assert_eq!(
            parse_command("w"),
            Some(UserAction::Input(InputEvent::MoveUp))
        );
        assert_eq!(
            parse_command("DOWN"),
            Some(UserAction::Input(InputEvent::MoveDown))
        );
        assert_eq!(
            parse_command("  a \n"),
            Some(UserAction::Input(InputEvent::MoveLeft))
        );
        assert_eq!(
            parse_command("right"),
            Some(UserAction::Input(InputEvent::MoveRight))
        );
    }

    #[test]
    fn test_parse_command_actions() {
        assert_eq!(
            parse_command("e"),
            Some(UserAction::Input(InputEvent::Activate))
        );
        assert_eq!(
            parse_command("quit"),
            Some(UserAction::Input(InputEvent::Quit))
        );
        assert_eq!(parse_command("n"), Some(UserAction::NewGame));
        assert_eq!(parse_command("jump"), None);
        assert_eq!(parse_command(""), None);
    }

    #[test]
    fn test_read_action_valid_line() {
        let mut interface = CliInterface::new(Cursor::new("d\n"));
        assert_eq!(
            interface.read_action(),
            Some(UserAction::Input(InputEvent::MoveRight))
        );
    }

    #[test]
    fn test_read_action_invalid_line() {
        let mut interface = CliInterface::new(Cursor::new("xyz\nq\n"));
        assert_eq!(interface.read_action(), None);
        assert_eq!(
            interface.read_action(),
            Some(UserAction::Input(InputEvent::Quit))
        );
    }

    #[test]
    fn test_read_action_end_of_input_quits() {
        let mut interface = CliInterface::new(Cursor::new(""));
        assert_eq!(
            interface.read_action(),
            Some(UserAction::Input(InputEvent::Quit))
        );
    }
}
