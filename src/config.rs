use crate::error::PuzzleError;
use crate::grid::GRID_SIZE;

pub const DEFAULT_NUM_WORDS: usize = 12;
pub const DEFAULT_WORD_LENGTH: usize = 5;
pub const MIN_WORD_LENGTH: usize = 4;
pub const MAX_WORD_LENGTH: usize = 14;

/// Shape of a generated puzzle: how many candidate words and how long they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleConfig {
    pub num_words: usize,
    pub word_length: usize,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            num_words: DEFAULT_NUM_WORDS,
            word_length: DEFAULT_WORD_LENGTH,
        }
    }
}

impl PuzzleConfig {
    #[must_use]
    pub fn new(num_words: usize, word_length: usize) -> Self {
        Self {
            num_words,
            word_length,
        }
    }

    /// Average gap available per word once every word is laid into the grid.
    ///
    /// Returns 0 when the words alone would not fit.
    #[must_use]
    pub fn max_spacing(&self) -> usize {
        if self.num_words == 0 {
            return 0;
        }
        GRID_SIZE.saturating_sub(self.word_length * self.num_words) / self.num_words
    }

    /// Check the configuration can produce a dataset.
    ///
    /// Word placement advances by `word_length + random(max_spacing - 2, max_spacing)`,
    /// so the spacing must be at least 2.
    pub fn validate(&self) -> Result<(), PuzzleError> {
        if !(MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&self.word_length) {
            return Err(PuzzleError::InvalidConfig(format!(
                "word length {} is outside {MIN_WORD_LENGTH}..={MAX_WORD_LENGTH}",
                self.word_length
            )));
        }
        if self.num_words == 0 {
            return Err(PuzzleError::InvalidConfig(
                "at least one word is required".to_string(),
            ));
        }
        if self.max_spacing() < 2 {
            return Err(PuzzleError::InvalidConfig(format!(
                "{} words of length {} do not fit in a {GRID_SIZE} cell grid",
                self.num_words, self.word_length
            )));
        }
        Ok(())
    }
}
