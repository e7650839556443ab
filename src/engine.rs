//! Puzzle engine: dataset generation, cursor handling and guess evaluation.
//!
//! # State Machine
//! `Playing` → `LoggedIn` when the password is submitted, `Playing` →
//! `LockedOut` when a denial arrives with one attempt left. Both end states
//! absorb further input until a new dataset is generated.

use crate::config::PuzzleConfig;
use crate::cursor::{Cursor, Direction};
use crate::error::PuzzleError;
use crate::game_state::{GameState, InputEvent, Outcome};
use crate::grid::{GRID_SIZE, Grid};
use crate::selection::{Selection, is_opening_bracket, select_at};
use crate::selector::{WordList, select_words};
use crate::transcript::Transcript;
use crate::wordbank::Dictionary;
use crate::{debug_log, info_log};
use rand::Rng;
use rand::rngs::StdRng;
use std::collections::BTreeSet;
use std::ops::RangeInclusive;

pub const MAX_ATTEMPTS: u8 = 4;
const ADDRESS_RANGE: RangeInclusive<u32> = 4096..=65500;
/// A bonus roll in `0..=100` above this removes a dud; otherwise attempts reset.
const DUD_ROLL_THRESHOLD: u32 = 20;

/// Everything a front end needs to draw the screen.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub grid: &'a Grid,
    pub cursor: Cursor,
    pub highlighted: &'a [usize],
    pub selection_text: &'a str,
    pub attempts: u8,
    pub status: &'a str,
    pub outcome: Option<Outcome>,
    pub transcript: &'a Transcript,
    pub state: GameState,
    pub address: u32,
}

struct Dataset {
    grid: Grid,
    words: WordList,
    word_starts: BTreeSet<usize>,
    address: u32,
}

pub struct PuzzleEngine<R = StdRng> {
    rng: R,
    config: PuzzleConfig,
    grid: Grid,
    words: WordList,
    /// Grid offsets of the words that are not the password.
    word_starts: BTreeSet<usize>,
    /// Opening brackets whose bonus has already been used.
    bonus_indices: BTreeSet<usize>,
    attempts: u8,
    state: GameState,
    cursor: Cursor,
    selection: Selection,
    transcript: Transcript,
    status: String,
    last_outcome: Option<Outcome>,
    likeness: usize,
    address: u32,
}

impl<R: Rng> PuzzleEngine<R> {
    /// Build an engine with a freshly generated dataset.
    pub fn new(
        dictionary: &Dictionary,
        config: PuzzleConfig,
        mut rng: R,
    ) -> Result<Self, PuzzleError> {
        let dataset = build_dataset(dictionary, config, &mut rng)?;
        Ok(Self::from_dataset(dataset, config, rng))
    }

    /// Build an engine around a hand-made layout.
    ///
    /// `word_starts` lists the offsets of the non-password words.
    pub fn from_parts(
        grid: Grid,
        words: WordList,
        word_starts: impl IntoIterator<Item = usize>,
        rng: R,
    ) -> Self {
        let config = PuzzleConfig::new(words.len(), words.word_length());
        let dataset = Dataset {
            grid,
            words,
            word_starts: word_starts.into_iter().collect(),
            address: *ADDRESS_RANGE.start(),
        };
        Self::from_dataset(dataset, config, rng)
    }

    fn from_dataset(dataset: Dataset, config: PuzzleConfig, rng: R) -> Self {
        let selection = select_at(&dataset.grid, 0, config.word_length);
        Self {
            rng,
            config,
            grid: dataset.grid,
            words: dataset.words,
            word_starts: dataset.word_starts,
            bonus_indices: BTreeSet::new(),
            attempts: MAX_ATTEMPTS,
            state: GameState::Playing,
            cursor: Cursor::default(),
            selection,
            transcript: Transcript::default(),
            status: String::new(),
            last_outcome: None,
            likeness: 0,
            address: dataset.address,
        }
    }

    /// Replace the puzzle with a new one and reset attempts and game state.
    ///
    /// On error the current puzzle is left untouched.
    pub fn make_new_dataset(
        &mut self,
        dictionary: &Dictionary,
        num_words: usize,
        word_length: usize,
    ) -> Result<(), PuzzleError> {
        let config = PuzzleConfig::new(num_words, word_length);
        let dataset = build_dataset(dictionary, config, &mut self.rng)?;
        self.config = config;
        self.grid = dataset.grid;
        self.words = dataset.words;
        self.word_starts = dataset.word_starts;
        self.address = dataset.address;
        self.bonus_indices.clear();
        self.attempts = MAX_ATTEMPTS;
        self.state = GameState::Playing;
        self.cursor = Cursor::default();
        self.transcript.clear();
        self.status.clear();
        self.last_outcome = None;
        self.likeness = 0;
        self.refresh_selection()?;
        info_log!(
            "make_new_dataset() - {} words of length {}",
            num_words,
            word_length
        );
        Ok(())
    }

    /// Apply one input event. Only `Activate` produces an outcome.
    pub fn handle(&mut self, event: InputEvent) -> Result<Option<Outcome>, PuzzleError> {
        match event {
            InputEvent::Quit => Ok(None),
            InputEvent::Activate => self.activate().map(Some),
            _ => {
                if let Some(direction) = event.direction() {
                    self.move_cursor(direction)?;
                }
                Ok(None)
            }
        }
    }

    /// Step the cursor and re-resolve the selection under it.
    ///
    /// Ignored once the game has ended.
    pub fn move_cursor(&mut self, direction: Direction) -> Result<(), PuzzleError> {
        if self.state.is_terminal() {
            return Ok(());
        }
        self.cursor = self.cursor.moved(direction);
        self.refresh_selection()
    }

    /// Jump the cursor straight to grid `index`.
    pub fn move_to_index(&mut self, index: usize) -> Result<(), PuzzleError> {
        if self.state.is_terminal() {
            return Ok(());
        }
        self.cursor = Cursor::at_index(index)?;
        self.refresh_selection()
    }

    fn refresh_selection(&mut self) -> Result<(), PuzzleError> {
        let index = self.cursor.index()?;
        self.selection = select_at(&self.grid, index, self.config.word_length);
        debug_log!(
            "refresh_selection() - cursor {:?} -> {:?}",
            self.cursor,
            self.selection.text
        );
        Ok(())
    }

    /// Submit the current selection.
    pub fn activate(&mut self) -> Result<Outcome, PuzzleError> {
        if self.state.is_terminal() {
            return Ok(Outcome::NoOp);
        }
        let submitted = self.selection.text.clone();
        let outcome = self.evaluate()?;
        info_log!("activate() - '{}' -> {:?}", submitted, outcome);
        self.record(outcome, &submitted)?;
        self.refresh_selection()?;
        Ok(outcome)
    }

    fn evaluate(&mut self) -> Result<Outcome, PuzzleError> {
        self.likeness = 0;
        let Some(start) = self.selection.start() else {
            return Ok(self.deny());
        };
        let first = self.grid[start];

        if first.is_ascii_uppercase() {
            if self.selection.len() == self.config.word_length {
                self.likeness = self.likeness_of(&self.selection);
                if self.likeness == self.config.word_length {
                    self.state = GameState::LoggedIn;
                    return Ok(Outcome::Accepted);
                }
            }
            return Ok(self.deny());
        }

        let consumed = self.bonus_indices.contains(&start);
        if is_opening_bracket(first) && self.selection.len() > 1 && !consumed {
            self.bonus_indices.insert(start);
            return self.apply_bonus();
        }
        if consumed {
            return Ok(Outcome::NoOp);
        }
        Ok(self.deny())
    }

    fn likeness_of(&self, selection: &Selection) -> usize {
        selection
            .indices
            .iter()
            .zip(self.words.password().chars())
            .filter(|&(&index, expected)| self.grid[index] == expected)
            .count()
    }

    fn apply_bonus(&mut self) -> Result<Outcome, PuzzleError> {
        let roll: u32 = self.rng.gen_range(0..=100);
        if roll > DUD_ROLL_THRESHOLD {
            if let Some(dud) = self.pick_dud() {
                self.word_starts.remove(&dud);
                self.grid.blank_out(dud, self.config.word_length)?;
                return Ok(Outcome::DudRemoved);
            }
            log::warn!("apply_bonus() - no duds left to remove, resetting attempts instead");
        }
        self.attempts = MAX_ATTEMPTS;
        Ok(Outcome::AttemptsReset)
    }

    fn pick_dud(&mut self) -> Option<usize> {
        if self.word_starts.is_empty() {
            return None;
        }
        let pick = self.rng.gen_range(0..self.word_starts.len());
        self.word_starts.iter().nth(pick).copied()
    }

    fn deny(&mut self) -> Outcome {
        if self.attempts > 1 {
            self.attempts -= 1;
            Outcome::Denied
        } else {
            self.state = GameState::LockedOut;
            Outcome::LockedOut
        }
    }

    fn record(&mut self, outcome: Outcome, submitted: &str) -> Result<(), PuzzleError> {
        self.status = outcome.message().to_string();
        self.last_outcome = Some(outcome);
        match outcome {
            Outcome::Denied => {
                self.transcript.scroll(submitted)?;
                self.transcript.scroll(outcome.message())?;
                self.transcript
                    .scroll(&format!("Likeness={}", self.likeness))?;
            }
            Outcome::DudRemoved | Outcome::AttemptsReset => {
                self.transcript.scroll(submitted)?;
                self.transcript.scroll(outcome.message())?;
            }
            Outcome::Accepted | Outcome::LockedOut | Outcome::NoOp => {}
        }
        Ok(())
    }
}

impl<R> PuzzleEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid: &self.grid,
            cursor: self.cursor,
            highlighted: &self.selection.indices,
            selection_text: &self.selection.text,
            attempts: self.attempts,
            status: &self.status,
            outcome: self.last_outcome,
            transcript: &self.transcript,
            state: self.state,
            address: self.address,
        }
    }

    #[must_use]
    pub fn config(&self) -> PuzzleConfig {
        self.config
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn words(&self) -> &WordList {
        &self.words
    }

    #[must_use]
    pub fn password(&self) -> &str {
        self.words.password()
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.config.word_length
    }

    #[must_use]
    pub fn word_starts(&self) -> &BTreeSet<usize> {
        &self.word_starts
    }

    #[must_use]
    pub fn bonus_indices(&self) -> &BTreeSet<usize> {
        &self.bonus_indices
    }

    #[must_use]
    pub fn attempts(&self) -> u8 {
        self.attempts
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Likeness of the most recent word submission (0 for non-words).
    #[must_use]
    pub fn likeness(&self) -> usize {
        self.likeness
    }

    #[must_use]
    pub fn address(&self) -> u32 {
        self.address
    }
}

fn build_dataset<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    config: PuzzleConfig,
    rng: &mut R,
) -> Result<Dataset, PuzzleError> {
    config.validate()?;
    let word_length = config.word_length;
    let address = rng.gen_range(ADDRESS_RANGE);
    let mut grid = Grid::junk(rng);
    let words = select_words(dictionary, config.num_words, word_length, rng)?;

    let max_spacing = config.max_spacing();
    let mut offset = rng.gen_range(1..=max_spacing);
    let mut word_starts = BTreeSet::new();
    for (i, word) in words.words().iter().enumerate() {
        grid.place_word(offset, word)?;
        if i != words.password_index() {
            word_starts.insert(offset);
        }
        offset += word_length + rng.gen_range(max_spacing - 2..=max_spacing);
        if offset + word_length > GRID_SIZE {
            offset = GRID_SIZE - word_length;
        }
    }
    debug_log!(
        "build_dataset() - password slot {}, dud starts {:?}",
        words.password_index(),
        word_starts
    );

    Ok(Dataset {
        grid,
        words,
        word_starts,
        address,
    })
}
