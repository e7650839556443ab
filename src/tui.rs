//! TUI (Terminal User Interface) module for the terminal puzzle
//!
//! Draws the engine snapshot with Ratatui at the fixed RobCo screen geometry
//! and turns Crossterm key events into `UserAction`s.
//!
//! # Keys
//! - Arrows / WASD: move the cursor
//! - ENTER / E: submit the highlighted selection
//! - N: new puzzle
//! - Q / ESC: quit

use crate::engine::Snapshot;
use crate::game_state::{GameInterface, GameState, InputEvent, Outcome, UserAction};
use crate::grid::{BLOCK_SIZE, FIRST_ROW, ROW_WIDTH, ROWS};
use crate::screen::{
    ATTEMPTS_ROW, CONTACT_ADMIN, CONTACT_COL, CONTACT_ROW, LOCKED_COL, LOCKED_ROW,
    PASSWORD_REQUIRED, PROMPT_ROW, SCREEN_COLS, SCREEN_ROWS, WELCOME, address_label,
    attempts_line, side_text,
};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use std::io;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const INSTRUCTIONS_ROW: u16 = SCREEN_ROWS + 1;
const MIN_HEIGHT: u16 = INSTRUCTIONS_ROW + 1;

const TEXT_STYLE: Style = Style::new().fg(Color::Green).bg(Color::Black);
const HIGHLIGHT_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Green);
const ERROR_STYLE: Style = Style::new().fg(Color::Red).bg(Color::Black);
const SUCCESS_STYLE: Style = Style::new()
    .fg(Color::Green)
    .bg(Color::Black)
    .add_modifier(Modifier::BOLD);
const CURSOR_STYLE: Style = Style::new()
    .fg(Color::Green)
    .bg(Color::Black)
    .add_modifier(Modifier::SLOW_BLINK);

/// Main TUI interface component.
///
/// Owns the terminal for its lifetime; raw mode and the alternate screen are
/// restored on drop.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    /// Outcome of the latest activation, shown once on the next draw.
    flash: Option<Outcome>,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete: raw mode, alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            flash: None,
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self, view: &Snapshot<'_>) -> Result<(), io::Error> {
        let flash = self.flash.take();
        self.terminal.draw(|f| {
            Self::render_static(f, view, flash);
        })?;
        Ok(())
    }

    fn render_static(f: &mut Frame, view: &Snapshot<'_>, flash: Option<Outcome>) {
        let area = f.area();
        if area.width < SCREEN_COLS || area.height < MIN_HEIGHT {
            let message = format!("Enlarge the terminal to at least {SCREEN_COLS}x{MIN_HEIGHT}");
            Self::render_line(f, area, 0, 0, vec![Span::styled(message, ERROR_STYLE)]);
            return;
        }

        match view.state {
            GameState::Playing => Self::render_playing(f, area, view, flash),
            GameState::LockedOut => Self::render_locked_out(f, area, view),
            GameState::LoggedIn => Self::render_logged_in(f, area, view),
        }
        Self::render_instructions(f, area, view.state);
    }

    fn render_playing(f: &mut Frame, area: Rect, view: &Snapshot<'_>, flash: Option<Outcome>) {
        Self::render_text(f, area, 0, WELCOME);
        Self::render_text(f, area, 2, PASSWORD_REQUIRED);
        Self::render_text(f, area, ATTEMPTS_ROW, &attempts_line(view.attempts));

        for row in 0..ROWS {
            let mut spans = Vec::with_capacity(2 * ROW_WIDTH + 5);
            spans.push(Span::styled(
                format!("{:<7}", address_label(view.address, 0, row)),
                TEXT_STYLE,
            ));
            Self::push_cells(&mut spans, view, row * ROW_WIDTH);
            spans.push(Span::styled(
                format!(" {:<7}", address_label(view.address, 1, row)),
                TEXT_STYLE,
            ));
            Self::push_cells(&mut spans, view, BLOCK_SIZE + row * ROW_WIDTH);

            let y = FIRST_ROW + row as u16;
            let side_style = if y == PROMPT_ROW {
                Self::flash_style(flash)
            } else {
                TEXT_STYLE
            };
            spans.push(Span::styled(format!(" {}", side_text(view, row)), side_style));
            if y == PROMPT_ROW {
                spans.push(Span::styled("█", CURSOR_STYLE));
            }
            Self::render_line(f, area, y, 0, spans);
        }
    }

    fn push_cells(spans: &mut Vec<Span<'static>>, view: &Snapshot<'_>, start: usize) {
        for index in start..start + ROW_WIDTH {
            let style = if view.highlighted.contains(&index) {
                HIGHLIGHT_STYLE
            } else {
                TEXT_STYLE
            };
            spans.push(Span::styled(view.grid[index].to_string(), style));
        }
    }

    fn flash_style(flash: Option<Outcome>) -> Style {
        match flash {
            Some(Outcome::Denied | Outcome::LockedOut) => ERROR_STYLE,
            Some(Outcome::Accepted | Outcome::DudRemoved | Outcome::AttemptsReset) => {
                SUCCESS_STYLE
            }
            Some(Outcome::NoOp) | None => TEXT_STYLE,
        }
    }

    fn render_locked_out(f: &mut Frame, area: Rect, view: &Snapshot<'_>) {
        Self::render_line(
            f,
            area,
            LOCKED_ROW,
            LOCKED_COL,
            vec![Span::styled(view.status.to_string(), ERROR_STYLE)],
        );
        Self::render_line(
            f,
            area,
            CONTACT_ROW,
            CONTACT_COL,
            vec![Span::styled(CONTACT_ADMIN, ERROR_STYLE)],
        );
    }

    fn render_logged_in(f: &mut Frame, area: Rect, view: &Snapshot<'_>) {
        Self::render_text(f, area, 0, WELCOME);
        Self::render_line(
            f,
            area,
            SCREEN_ROWS - 1,
            0,
            vec![
                Span::styled(view.status.to_string(), SUCCESS_STYLE),
                Span::styled("█", CURSOR_STYLE),
            ],
        );
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: GameState) {
        let text = match state {
            GameState::Playing => "ARROWS/WASD: Move | ENTER/E: Submit | N: New | Q/ESC: Quit",
            GameState::LockedOut | GameState::LoggedIn => "N: New puzzle | Q/ESC: Quit",
        };
        Self::render_line(
            f,
            area,
            INSTRUCTIONS_ROW,
            0,
            vec![Span::styled(text, Style::default().fg(Color::DarkGray))],
        );
    }

    fn render_text(f: &mut Frame, area: Rect, y: u16, text: &str) {
        Self::render_line(f, area, y, 0, vec![Span::styled(text.to_string(), TEXT_STYLE)]);
    }

    fn render_line(f: &mut Frame, area: Rect, y: u16, x: u16, spans: Vec<Span>) {
        if y >= area.height || x >= area.width {
            return;
        }
        let paragraph = Paragraph::new(Line::from(spans));
        f.render_widget(
            paragraph,
            Rect {
                x: area.x + x,
                y: area.y + y,
                width: area.width - x,
                height: 1,
            },
        );
    }

    /// Block until a key maps to an action. Unmapped keys yield `None`.
    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        loop {
            if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                    debug_log!(
                        "handle_input() - Key event received: code={:?}, modifiers={:?}",
                        key.code,
                        key.modifiers
                    );
                    return Ok(Self::map_key(key));
                }
                Event::Resize(_, _) => {
                    debug_log!("handle_input() - Resize, redrawing");
                    return Ok(None);
                }
                other => {
                    debug_log!("handle_input() - Ignoring event: {:?}", other);
                }
            }
        }
    }

    fn map_key(key: KeyEvent) -> Option<UserAction> {
        if key.modifiers.contains(event::KeyModifiers::ALT)
            || key.modifiers.contains(event::KeyModifiers::CONTROL)
        {
            return None;
        }
        let event = match key.code {
            KeyCode::Up | KeyCode::Char('w' | 'W') => InputEvent::MoveUp,
            KeyCode::Down | KeyCode::Char('s' | 'S') => InputEvent::MoveDown,
            KeyCode::Left | KeyCode::Char('a' | 'A') => InputEvent::MoveLeft,
            KeyCode::Right | KeyCode::Char('d' | 'D') => InputEvent::MoveRight,
            KeyCode::Enter | KeyCode::Char('e' | 'E') => InputEvent::Activate,
            KeyCode::Esc | KeyCode::Char('q' | 'Q') => InputEvent::Quit,
            KeyCode::Char('n' | 'N') => return Some(UserAction::NewGame),
            _ => return None,
        };
        Some(UserAction::Input(event))
    }
}

impl GameInterface for TuiInterface {
    fn render(&mut self, view: &Snapshot<'_>) {
        if let Err(e) = self.draw(view) {
            debug_log!("Draw error: {}", e);
        }
    }

    fn read_action(&mut self) -> Option<UserAction> {
        match self.handle_input() {
            Ok(action) => action,
            Err(e) => {
                log::warn!("read_action() - Error handling input, quitting: {e}");
                Some(UserAction::Input(InputEvent::Quit))
            }
        }
    }

    fn announce(&mut self, outcome: Outcome) {
        info_log!("announce() - {:?}", outcome);
        self.flash = Some(outcome);
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
