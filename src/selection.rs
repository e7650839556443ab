//! Resolve the token under the cursor: a word, a bracket pair, or a single cell.

use crate::grid::{GRID_SIZE, Grid, ROW_WIDTH};

/// How far right of an opening bracket to look for its closer.
const BRACKET_SCAN: usize = ROW_WIDTH + 1;

/// Highlighted cells and the text they spell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    pub indices: Vec<usize>,
    pub text: String,
}

impl Selection {
    fn single(grid: &Grid, index: usize) -> Self {
        Self::from_indices(grid, vec![index])
    }

    fn from_indices(grid: &Grid, indices: Vec<usize>) -> Self {
        let text = grid.text_at(&indices);
        Self { indices, text }
    }

    /// First highlighted cell, if any.
    #[must_use]
    pub fn start(&self) -> Option<usize> {
        self.indices.first().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }
}

#[must_use]
pub fn closing_bracket(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '{' => Some('}'),
        '[' => Some(']'),
        '<' => Some('>'),
        _ => None,
    }
}

#[must_use]
pub fn is_opening_bracket(ch: char) -> bool {
    closing_bracket(ch).is_some()
}

/// Resolve the token that contains the cell at `index`.
///
/// Letters only look rightward for the end of the word, then take the
/// `word_length` cells before that boundary.
#[must_use]
pub fn select_at(grid: &Grid, index: usize, word_length: usize) -> Selection {
    let Some(ch) = grid.get(index) else {
        return Selection::default();
    };
    if ch.is_ascii_uppercase() {
        select_word(grid, index, word_length)
    } else if let Some(close) = closing_bracket(ch) {
        select_bracket_pair(grid, index, close)
    } else {
        Selection::single(grid, index)
    }
}

fn select_word(grid: &Grid, index: usize, word_length: usize) -> Selection {
    for step in 0..=word_length {
        let probe = index + step;
        let at_boundary = grid.get(probe).is_none_or(|c| !c.is_ascii_uppercase());
        if !at_boundary {
            continue;
        }
        if probe < word_length {
            break;
        }
        return Selection::from_indices(grid, (probe - word_length..probe).collect());
    }
    Selection::single(grid, index)
}

fn select_bracket_pair(grid: &Grid, index: usize, close: char) -> Selection {
    for step in 0..BRACKET_SCAN {
        let probe = index + step;
        if probe >= GRID_SIZE {
            break;
        }
        if grid[probe] == close {
            return Selection::from_indices(grid, (index..=probe).collect());
        }
    }
    Selection::single(grid, index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(placements: &[(usize, &str)]) -> Grid {
        let mut grid = Grid::filled('#');
        for (offset, text) in placements {
            grid.place_word(*offset, text).unwrap();
        }
        grid
    }

    #[test]
    fn test_word_selected_from_first_letter() {
        let grid = grid_with(&[(10, "APPLE")]);
        let selection = select_at(&grid, 10, 5);
        assert_eq!(selection.indices, vec![10, 11, 12, 13, 14]);
        assert_eq!(selection.text, "APPLE");
    }

    #[test]
    fn test_word_selected_from_any_letter() {
        let grid = grid_with(&[(10, "APPLE")]);
        for index in 10..15 {
            let selection = select_at(&grid, index, 5);
            assert_eq!(selection.text, "APPLE", "clicked {index}");
            assert_eq!(selection.start(), Some(10));
        }
    }

    #[test]
    fn test_word_at_grid_end_uses_end_as_boundary() {
        let grid = grid_with(&[(GRID_SIZE - 5, "GRAPE")]);
        let selection = select_at(&grid, GRID_SIZE - 2, 5);
        assert_eq!(selection.text, "GRAPE");
        assert_eq!(selection.indices.last(), Some(&(GRID_SIZE - 1)));
    }

    #[test]
    fn test_abutting_words_fall_back_to_single_cell() {
        // No boundary within word_length + 1 cells of the first word's start
        let grid = grid_with(&[(20, "APPLEGRAPE")]);
        let selection = select_at(&grid, 20, 5);
        assert_eq!(selection.indices, vec![20]);
        assert_eq!(selection.text, "A");
        // Clicking later in the run finds the end of the second word
        let selection = select_at(&grid, 26, 5);
        assert_eq!(selection.text, "GRAPE");
    }

    #[test]
    fn test_short_run_at_grid_start_falls_back() {
        let grid = grid_with(&[(0, "AB")]);
        let selection = select_at(&grid, 0, 5);
        assert_eq!(selection.indices, vec![0]);
    }

    #[test]
    fn test_short_run_window_takes_cells_before_boundary() {
        // The window always spans word_length cells ending at the boundary
        let grid = grid_with(&[(30, "AB")]);
        let selection = select_at(&grid, 30, 5);
        assert_eq!(selection.indices, vec![27, 28, 29, 30, 31]);
        assert_eq!(selection.text, "###AB");
    }

    #[test]
    fn test_bracket_pair_inclusive() {
        let grid = grid_with(&[(50, "(####)")]);
        let selection = select_at(&grid, 50, 5);
        assert_eq!(selection.indices, vec![50, 51, 52, 53, 54, 55]);
        assert_eq!(selection.text, "(####)");
    }

    #[test]
    fn test_each_bracket_kind_matches_its_closer() {
        for (open, close) in [('(', ')'), ('{', '}'), ('[', ']'), ('<', '>')] {
            let text = format!("{open}#){close}");
            let grid = grid_with(&[(60, &text)]);
            let selection = select_at(&grid, 60, 5);
            let expected_len = if close == ')' { 3 } else { 4 };
            assert_eq!(selection.len(), expected_len, "{text}");
        }
    }

    #[test]
    fn test_mismatched_closer_is_ignored() {
        let grid = grid_with(&[(70, "(##]#>")]);
        let selection = select_at(&grid, 70, 5);
        assert_eq!(selection.indices, vec![70]);
        assert_eq!(selection.text, "(");
    }

    #[test]
    fn test_bracket_scan_limited_to_a_row_width() {
        // Closer 12 cells away is found, 13 cells away is not
        let grid = grid_with(&[(100, "(###########)")]);
        assert_eq!(select_at(&grid, 100, 5).len(), 13);
        let grid = grid_with(&[(100, "(############)")]);
        assert_eq!(select_at(&grid, 100, 5).len(), 1);
    }

    #[test]
    fn test_bracket_scan_stops_at_grid_end() {
        let grid = grid_with(&[(GRID_SIZE - 3, "<##")]);
        let selection = select_at(&grid, GRID_SIZE - 3, 5);
        assert_eq!(selection.indices, vec![GRID_SIZE - 3]);
    }

    #[test]
    fn test_closing_bracket_alone_is_junk() {
        let grid = grid_with(&[(80, ")")]);
        let selection = select_at(&grid, 80, 5);
        assert_eq!(selection.indices, vec![80]);
    }

    #[test]
    fn test_junk_cell_selects_itself() {
        let grid = grid_with(&[]);
        let selection = select_at(&grid, 5, 5);
        assert_eq!(selection.indices, vec![5]);
        assert_eq!(selection.text, "#");
    }

    #[test]
    fn test_out_of_range_is_empty() {
        let grid = grid_with(&[]);
        assert!(select_at(&grid, GRID_SIZE, 5).is_empty());
    }

    #[test]
    fn test_bracket_helpers() {
        assert!(is_opening_bracket('<'));
        assert!(!is_opening_bracket('>'));
        assert_eq!(closing_bracket('{'), Some('}'));
        assert_eq!(closing_bracket('a'), None);
    }
}
