use crate::error::PuzzleError;
use crate::wordbank::Dictionary;
use rand::Rng;
use rand::seq::SliceRandom;

/// Candidate words for one puzzle, one of which is the password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
    password: usize,
}

impl WordList {
    /// Build a list with `words[password]` as the password.
    ///
    /// Words are uppercased; returns `None` if `password` is out of range or
    /// the words differ in length.
    pub fn new<S: AsRef<str>>(words: &[S], password: usize) -> Option<Self> {
        let words: Vec<String> = words
            .iter()
            .map(|w| w.as_ref().to_ascii_uppercase())
            .collect();
        let length = words.first()?.len();
        if password >= words.len() || words.iter().any(|w| w.len() != length) {
            return None;
        }
        Some(Self { words, password })
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.words[self.password]
    }

    #[must_use]
    pub fn password_index(&self) -> usize {
        self.password
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.words[0].len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Pick `num_words` words of `word_length` letters and designate a password.
///
/// Takes a random contiguous window of the length block, shuffles it, then
/// picks the password uniformly among the shuffled words.
pub fn select_words<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    num_words: usize,
    word_length: usize,
    rng: &mut R,
) -> Result<WordList, PuzzleError> {
    if num_words == 0 {
        return Err(PuzzleError::InvalidConfig(
            "at least one word is required".to_string(),
        ));
    }
    let block = dictionary.block(word_length);
    if num_words > block.len() {
        return Err(PuzzleError::InsufficientWords {
            length: word_length,
            requested: num_words,
            available: block.len(),
        });
    }

    let start = rng.gen_range(0..=block.len() - num_words);
    let mut words = block[start..start + num_words].to_vec();
    words.shuffle(rng);
    let password = rng.gen_range(0..words.len());
    crate::debug_log!(
        "select_words() - window {}..{} of {} words, password slot {}",
        start,
        start + num_words,
        block.len(),
        password
    );
    Ok(WordList { words, password })
}
