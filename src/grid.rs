//! The memory-dump grid and its fixed display geometry.
//!
//! The grid is 384 cells laid out as two blocks of 16 rows by 12 columns.
//! Cells `0..192` form the left block, `192..384` the right block.
//! On screen the left block starts at (row 6, col 7) and the right block at
//! (row 6, col 27).

use crate::error::PuzzleError;
use rand::Rng;
use std::ops::Index;

pub const ROW_WIDTH: usize = 12;
pub const ROWS: usize = 16;
pub const BLOCK_SIZE: usize = ROW_WIDTH * ROWS;
pub const GRID_SIZE: usize = BLOCK_SIZE * 2;

pub const FIRST_ROW: u16 = 6;
pub const LAST_ROW: u16 = FIRST_ROW + ROWS as u16 - 1;
pub const LEFT_FIRST_COL: u16 = 7;
pub const LEFT_LAST_COL: u16 = LEFT_FIRST_COL + ROW_WIDTH as u16 - 1;
pub const RIGHT_FIRST_COL: u16 = 27;
pub const RIGHT_LAST_COL: u16 = RIGHT_FIRST_COL + ROW_WIDTH as u16 - 1;
/// Horizontal distance between the two blocks on screen.
pub const BLOCK_COL_OFFSET: u16 = RIGHT_FIRST_COL - LEFT_FIRST_COL;

/// Marks the cells of a removed dud.
pub const PLACEHOLDER: char = '.';

/// Characters used to fill the space between words.
pub const JUNK_CHARS: &[char] = &[
    '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/', ':', ';', '<',
    '=', '>', '?', '@', '[', '\\', ']', '^', '_', '`', '{', '|', '}', '~',
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [char; GRID_SIZE],
}

impl Grid {
    /// A grid where every cell holds `fill`.
    #[must_use]
    pub fn filled(fill: char) -> Self {
        Self {
            cells: [fill; GRID_SIZE],
        }
    }

    /// A grid of independently random junk characters.
    pub fn junk<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut grid = Self::filled(' ');
        for cell in &mut grid.cells {
            *cell = JUNK_CHARS[rng.gen_range(0..JUNK_CHARS.len())];
        }
        grid
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<char> {
        self.cells.get(index).copied()
    }

    pub fn set(&mut self, index: usize, ch: char) -> Result<(), PuzzleError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(PuzzleError::IndexOutOfRange { index })?;
        *cell = ch;
        Ok(())
    }

    /// Overwrite the cells starting at `offset` with the characters of `word`.
    pub fn place_word(&mut self, offset: usize, word: &str) -> Result<(), PuzzleError> {
        let len = word.chars().count();
        if offset + len > GRID_SIZE {
            return Err(PuzzleError::IndexOutOfRange {
                index: offset + len - 1,
            });
        }
        for (i, ch) in word.chars().enumerate() {
            self.cells[offset + i] = ch;
        }
        Ok(())
    }

    /// Replace `len` cells starting at `offset` with the dud placeholder.
    pub fn blank_out(&mut self, offset: usize, len: usize) -> Result<(), PuzzleError> {
        let placeholder: String = std::iter::repeat_n(PLACEHOLDER, len).collect();
        self.place_word(offset, &placeholder)
    }

    #[must_use]
    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    /// The characters at `indices`, concatenated in order.
    #[must_use]
    pub fn text_at(&self, indices: &[usize]) -> String {
        indices.iter().filter_map(|&i| self.get(i)).collect()
    }

    /// One 12-character display row of the left (`block == 0`) or right block.
    #[must_use]
    pub fn row_text(&self, block: usize, row: usize) -> String {
        let start = block * BLOCK_SIZE + row * ROW_WIDTH;
        self.cells[start..start + ROW_WIDTH].iter().collect()
    }

    /// First grid index at which `needle` appears, if any.
    #[must_use]
    pub fn find(&self, needle: &str) -> Option<usize> {
        let needle: Vec<char> = needle.chars().collect();
        if needle.is_empty() || needle.len() > GRID_SIZE {
            return None;
        }
        self.cells
            .windows(needle.len())
            .position(|window| window == needle.as_slice())
    }
}

impl Index<usize> for Grid {
    type Output = char;

    fn index(&self, index: usize) -> &char {
        &self.cells[index]
    }
}

/// Screen position `(row, col)` of a grid cell.
pub fn index_to_display(index: usize) -> Result<(u16, u16), PuzzleError> {
    if index >= GRID_SIZE {
        return Err(PuzzleError::IndexOutOfRange { index });
    }
    let (local, first_col) = if index >= BLOCK_SIZE {
        (index - BLOCK_SIZE, RIGHT_FIRST_COL)
    } else {
        (index, LEFT_FIRST_COL)
    };
    let row = FIRST_ROW + (local / ROW_WIDTH) as u16;
    let col = first_col + (local % ROW_WIDTH) as u16;
    Ok((row, col))
}

/// Grid cell under the screen position `(row, col)`.
pub fn display_to_index(row: u16, col: u16) -> Result<usize, PuzzleError> {
    let invalid = PuzzleError::InvalidCursorPosition { row, col };
    if !(FIRST_ROW..=LAST_ROW).contains(&row) {
        return Err(invalid);
    }
    let block_start = if (LEFT_FIRST_COL..=LEFT_LAST_COL).contains(&col) {
        usize::from(col - LEFT_FIRST_COL)
    } else if (RIGHT_FIRST_COL..=RIGHT_LAST_COL).contains(&col) {
        BLOCK_SIZE + usize::from(col - RIGHT_FIRST_COL)
    } else {
        return Err(invalid);
    };
    Ok(block_start + usize::from(row - FIRST_ROW) * ROW_WIDTH)
}
