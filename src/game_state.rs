use crate::cursor::Direction;
use crate::engine::{PuzzleEngine, Snapshot};
use crate::error::PuzzleError;
use crate::wordbank::Dictionary;
use crate::{debug_log, info_log};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    LoggedIn,
    LockedOut,
}

impl GameState {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Result of one activation, for collaborators that map outcomes to effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Denied,
    Accepted,
    DudRemoved,
    AttemptsReset,
    LockedOut,
    NoOp,
}

impl Outcome {
    /// Status line shown after the outcome.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Denied => "Entry denied.",
            Self::Accepted => "Password Accepted.",
            Self::DudRemoved => "Dud Removed.",
            Self::AttemptsReset => "Tries Reset.",
            Self::LockedOut => "TERMINAL LOCKED",
            Self::NoOp => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Activate,
    Quit,
}

impl InputEvent {
    #[must_use]
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::MoveUp => Some(Direction::Up),
            Self::MoveDown => Some(Direction::Down),
            Self::MoveLeft => Some(Direction::Left),
            Self::MoveRight => Some(Direction::Right),
            Self::Activate | Self::Quit => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Input(InputEvent),
    /// Throw the current puzzle away and generate a fresh one.
    NewGame,
}

/// Front-end seam: draws engine state, supplies user actions, and receives
/// activation outcomes for feedback.
pub trait GameInterface {
    fn render(&mut self, view: &Snapshot<'_>);
    /// Next action, or `None` if nothing usable was entered.
    fn read_action(&mut self) -> Option<UserAction>;
    fn announce(&mut self, outcome: Outcome);
}

/// Drive `engine` from `interface` until the user quits.
///
/// Returns the game state at the moment of quitting.
pub fn game_loop<R: Rng, I: GameInterface + ?Sized>(
    engine: &mut PuzzleEngine<R>,
    dictionary: &Dictionary,
    interface: &mut I,
) -> Result<GameState, PuzzleError> {
    loop {
        interface.render(&engine.snapshot());

        let Some(action) = interface.read_action() else {
            continue;
        };
        debug_log!("game_loop() - action {:?}", action);

        match action {
            UserAction::Input(InputEvent::Quit) => {
                info_log!("game_loop() - quit in state {:?}", engine.state());
                return Ok(engine.state());
            }
            UserAction::NewGame => {
                let config = engine.config();
                engine.make_new_dataset(dictionary, config.num_words, config.word_length)?;
                info_log!("game_loop() - new puzzle generated");
            }
            UserAction::Input(event) => {
                if let Some(outcome) = engine.handle(event)? {
                    interface.announce(outcome);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::selector::WordList;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::VecDeque;

    /// Plays a fixed list of actions and records what it was told.
    struct ScriptedInterface {
        actions: VecDeque<Option<UserAction>>,
        outcomes: Vec<Outcome>,
        renders: usize,
    }

    impl ScriptedInterface {
        fn new(actions: Vec<Option<UserAction>>) -> Self {
            Self {
                actions: actions.into(),
                outcomes: Vec::new(),
                renders: 0,
            }
        }
    }

    impl GameInterface for ScriptedInterface {
        fn render(&mut self, _view: &Snapshot<'_>) {
            self.renders += 1;
        }

        fn read_action(&mut self) -> Option<UserAction> {
            self.actions
                .pop_front()
                .unwrap_or(Some(UserAction::Input(InputEvent::Quit)))
        }

        fn announce(&mut self, outcome: Outcome) {
            self.outcomes.push(outcome);
        }
    }

    fn input(event: InputEvent) -> Option<UserAction> {
        Some(UserAction::Input(event))
    }

    /// APPLE (password) at 0, GRAPE at 40, junk elsewhere.
    fn fixed_engine() -> PuzzleEngine<StdRng> {
        let mut grid = Grid::filled('#');
        grid.place_word(0, "APPLE").unwrap();
        grid.place_word(40, "GRAPE").unwrap();
        let words = WordList::new(&["APPLE", "GRAPE"], 0).unwrap();
        PuzzleEngine::from_parts(grid, words, [40], StdRng::seed_from_u64(9))
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(Outcome::Denied.message(), "Entry denied.");
        assert_eq!(Outcome::Accepted.message(), "Password Accepted.");
        assert_eq!(Outcome::DudRemoved.message(), "Dud Removed.");
        assert_eq!(Outcome::AttemptsReset.message(), "Tries Reset.");
        assert_eq!(Outcome::LockedOut.message(), "TERMINAL LOCKED");
        assert_eq!(Outcome::NoOp.message(), "");
    }

    #[test]
    fn test_input_directions() {
        assert_eq!(InputEvent::MoveUp.direction(), Some(Direction::Up));
        assert_eq!(InputEvent::MoveRight.direction(), Some(Direction::Right));
        assert_eq!(InputEvent::Activate.direction(), None);
        assert_eq!(InputEvent::Quit.direction(), None);
    }

    #[test]
    fn test_terminal_states() {
        assert!(!GameState::Playing.is_terminal());
        assert!(GameState::LoggedIn.is_terminal());
        assert!(GameState::LockedOut.is_terminal());
    }

    #[test]
    fn test_game_loop_immediate_quit() {
        let mut engine = fixed_engine();
        let mut interface = ScriptedInterface::new(vec![input(InputEvent::Quit)]);
        let state = game_loop(&mut engine, &Dictionary::default(), &mut interface).unwrap();
        assert_eq!(state, GameState::Playing);
        assert_eq!(interface.renders, 1);
        assert!(interface.outcomes.is_empty());
    }

    #[test]
    fn test_game_loop_skips_unusable_input() {
        let mut engine = fixed_engine();
        let mut interface =
            ScriptedInterface::new(vec![None, None, input(InputEvent::Quit)]);
        game_loop(&mut engine, &Dictionary::default(), &mut interface).unwrap();
        assert_eq!(interface.renders, 3);
    }

    #[test]
    fn test_game_loop_accepts_password_at_cursor_start() {
        let mut engine = fixed_engine();
        let mut interface = ScriptedInterface::new(vec![input(InputEvent::Activate)]);
        let state = game_loop(&mut engine, &Dictionary::default(), &mut interface).unwrap();
        assert_eq!(state, GameState::LoggedIn);
        assert_eq!(interface.outcomes, vec![Outcome::Accepted]);
    }

    #[test]
    fn test_game_loop_moves_do_not_announce() {
        let mut engine = fixed_engine();
        let mut interface = ScriptedInterface::new(vec![
            input(InputEvent::MoveRight),
            input(InputEvent::MoveDown),
            input(InputEvent::MoveLeft),
            input(InputEvent::MoveUp),
        ]);
        game_loop(&mut engine, &Dictionary::default(), &mut interface).unwrap();
        assert!(interface.outcomes.is_empty());
        assert_eq!(engine.cursor().index().unwrap(), 0);
    }

    #[test]
    fn test_game_loop_new_game_regenerates() {
        let dict = crate::wordbank::load_wordbank_from_str(crate::wordbank::EMBEDDED_WORDBANK);
        let mut engine = fixed_engine();
        let mut interface = ScriptedInterface::new(vec![Some(UserAction::NewGame)]);
        game_loop(&mut engine, &dict, &mut interface).unwrap();
        assert_eq!(engine.words().len(), 2);
        assert_eq!(engine.word_length(), 5);
        assert!(engine.grid().find(engine.password()).is_some());
        assert_eq!(engine.state(), GameState::Playing);
        assert!(engine.word_starts().len() == 1);
    }

    #[test]
    fn test_game_loop_new_game_error_propagates() {
        let mut engine = fixed_engine();
        let mut interface = ScriptedInterface::new(vec![Some(UserAction::NewGame)]);
        let result = game_loop(&mut engine, &Dictionary::default(), &mut interface);
        assert!(matches!(
            result,
            Err(PuzzleError::InsufficientWords { .. })
        ));
    }
}
