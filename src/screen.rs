//! Fixed screen layout shared by the front ends.
//!
//! Rows 0-4 hold the header, rows 6-21 the two grid blocks with their memory
//! addresses, column 40 the transcript and, on row 21, the live selection.

use crate::engine::Snapshot;
use crate::game_state::GameState;
use crate::grid::{BLOCK_SIZE, FIRST_ROW, ROW_WIDTH, ROWS};
use crate::transcript::TRANSCRIPT_ROWS;

pub const WELCOME: &str = "Welcome to ROBCO Industries (TM) Termlink";
pub const PASSWORD_REQUIRED: &str = "Password Required";
pub const CONTACT_ADMIN: &str = "PLEASE CONTACT ADMINISTRATOR";
pub const ATTEMPT_BLOCK: char = '█';

pub const ATTEMPTS_ROW: u16 = 4;
pub const TRANSCRIPT_COL: u16 = 40;
pub const PROMPT_ROW: u16 = FIRST_ROW + TRANSCRIPT_ROWS as u16;
pub const SCREEN_ROWS: u16 = FIRST_ROW + ROWS as u16;
pub const SCREEN_COLS: u16 = TRANSCRIPT_COL + 16;

pub const LOCKED_ROW: u16 = 9;
pub const LOCKED_COL: u16 = 22;
pub const CONTACT_ROW: u16 = 11;
pub const CONTACT_COL: u16 = 16;

#[must_use]
pub fn attempts_line(attempts: u8) -> String {
    let mut line = String::from("Attempts Remaining:");
    for _ in 0..attempts {
        line.push(' ');
        line.push(ATTEMPT_BLOCK);
    }
    line
}

/// Memory address shown left of display row `row` of `block`.
#[must_use]
pub fn address_label(base: u32, block: usize, row: usize) -> String {
    let offset = block * BLOCK_SIZE + row * ROW_WIDTH;
    format!("0x{:04X}", base as usize + offset)
}

/// Text to the right of the grid on display row `row` (0-based within the grid).
#[must_use]
pub fn side_text(view: &Snapshot<'_>, row: usize) -> String {
    if row < TRANSCRIPT_ROWS {
        view.transcript.padded_row(row)
    } else {
        format!(">{}", view.selection_text)
    }
}

/// One full grid row: addresses, both blocks and the side column.
#[must_use]
pub fn grid_line(view: &Snapshot<'_>, row: usize) -> String {
    format!(
        "{:<7}{} {:<7}{} {}",
        address_label(view.address, 0, row),
        view.grid.row_text(0, row),
        address_label(view.address, 1, row),
        view.grid.row_text(1, row),
        side_text(view, row)
    )
}

/// Plain-text rendering of the whole screen, one entry per terminal row.
#[must_use]
pub fn screen_lines(view: &Snapshot<'_>) -> Vec<String> {
    match view.state {
        GameState::Playing => {
            let mut lines = vec![
                WELCOME.to_string(),
                String::new(),
                PASSWORD_REQUIRED.to_string(),
                String::new(),
                attempts_line(view.attempts),
                String::new(),
            ];
            lines.extend((0..ROWS).map(|row| grid_line(view, row)));
            lines
        }
        GameState::LockedOut => {
            let mut lines = vec![String::new(); usize::from(CONTACT_ROW) + 1];
            lines[usize::from(LOCKED_ROW)] =
                format!("{}{}", " ".repeat(usize::from(LOCKED_COL)), view.status);
            lines[usize::from(CONTACT_ROW)] =
                format!("{}{CONTACT_ADMIN}", " ".repeat(usize::from(CONTACT_COL)));
            lines
        }
        GameState::LoggedIn => {
            let mut lines = vec![String::new(); usize::from(SCREEN_ROWS)];
            lines[0] = WELCOME.to_string();
            if let Some(last) = lines.last_mut() {
                *last = view.status.to_string();
            }
            lines
        }
    }
}
