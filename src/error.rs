use thiserror::Error;

/// Errors raised while building or driving a puzzle.
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// The dictionary does not hold enough words of the requested length.
    #[error("need {requested} words of length {length}, only {available} available")]
    InsufficientWords {
        length: usize,
        requested: usize,
        available: usize,
    },

    /// A grid index outside `0..GRID_SIZE`.
    #[error("grid index {index} is out of range")]
    IndexOutOfRange { index: usize },

    /// A display position that is not inside either grid block.
    #[error("display position (row {row}, col {col}) is not a grid cell")]
    InvalidCursorPosition { row: u16, col: u16 },

    #[error("invalid puzzle configuration: {0}")]
    InvalidConfig(String),

    /// A transcript line wider than the transcript buffer.
    #[error("transcript line of {len} characters exceeds the {max} available")]
    TranscriptOverflow { len: usize, max: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
