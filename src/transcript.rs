use crate::error::PuzzleError;

pub const TRANSCRIPT_ROWS: usize = 15;
pub const TRANSCRIPT_COLS: usize = 15;
const PROMPT: char = '>';

/// Scrolling log of past entries shown beside the grid.
///
/// Each row holds at most `TRANSCRIPT_COLS` characters; new lines enter at the
/// bottom behind a `>` marker and push older lines up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    rows: Vec<String>,
}

impl Default for Transcript {
    fn default() -> Self {
        Self {
            rows: vec![String::new(); TRANSCRIPT_ROWS],
        }
    }
}

impl Transcript {
    /// Shift every row up by one and write `>line` into the bottom row.
    ///
    /// Fails without touching the buffer if `line` does not fit after the marker.
    pub fn scroll(&mut self, line: &str) -> Result<(), PuzzleError> {
        let max = TRANSCRIPT_COLS - 1;
        let len = line.chars().count();
        if len > max {
            return Err(PuzzleError::TranscriptOverflow { len, max });
        }
        self.rows.rotate_left(1);
        if let Some(last) = self.rows.last_mut() {
            last.clear();
            last.push(PROMPT);
            last.push_str(line);
        }
        Ok(())
    }

    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Row `row` padded with spaces to the full transcript width.
    #[must_use]
    pub fn padded_row(&self, row: usize) -> String {
        let text = self.rows.get(row).map_or("", String::as_str);
        format!("{text:<width$}", width = TRANSCRIPT_COLS)
    }

    pub fn clear(&mut self) {
        self.rows.iter_mut().for_each(String::clear);
    }
}
