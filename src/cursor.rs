use crate::error::PuzzleError;
use crate::grid::{
    FIRST_ROW, LAST_ROW, LEFT_FIRST_COL, LEFT_LAST_COL, RIGHT_FIRST_COL, RIGHT_LAST_COL,
    display_to_index,
};

/// Column just left of the right block; stepping onto it returns to the left block.
const GAP_RETURN_COL: u16 = RIGHT_FIRST_COL - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Screen position of the selection cursor.
///
/// Always sits on a grid cell: rows 6..=21, columns 7..=18 or 27..=38.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    row: u16,
    col: u16,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            row: FIRST_ROW,
            col: LEFT_FIRST_COL,
        }
    }
}

impl Cursor {
    #[must_use]
    pub fn row(self) -> u16 {
        self.row
    }

    #[must_use]
    pub fn col(self) -> u16 {
        self.col
    }

    /// Place the cursor on the cell at grid `index`.
    pub fn at_index(index: usize) -> Result<Self, PuzzleError> {
        let (row, col) = crate::grid::index_to_display(index)?;
        Ok(Self { row, col })
    }

    /// The cursor after one step in `direction`, wrapped back onto the grid.
    #[must_use]
    pub fn moved(self, direction: Direction) -> Self {
        let (row, col) = match direction {
            Direction::Down => (self.row + 1, self.col),
            Direction::Up => (self.row - 1, self.col),
            Direction::Right => (self.row, self.col + 1),
            Direction::Left => (self.row, self.col - 1),
        };
        Self {
            row: wrap_row(row),
            col: wrap_col(col),
        }
    }

    /// Grid index under the cursor.
    pub fn index(self) -> Result<usize, PuzzleError> {
        display_to_index(self.row, self.col)
    }
}

fn wrap_row(row: u16) -> u16 {
    if row < FIRST_ROW {
        LAST_ROW
    } else if row > LAST_ROW {
        FIRST_ROW
    } else {
        row
    }
}

// Order matters: the gap-return check runs before the snap into the right block.
fn wrap_col(col: u16) -> u16 {
    if col < LEFT_FIRST_COL {
        RIGHT_LAST_COL
    } else if col == GAP_RETURN_COL {
        LEFT_LAST_COL
    } else if col > LEFT_LAST_COL && col < RIGHT_FIRST_COL {
        RIGHT_FIRST_COL
    } else if col > RIGHT_LAST_COL {
        LEFT_FIRST_COL
    } else {
        col
    }
}
