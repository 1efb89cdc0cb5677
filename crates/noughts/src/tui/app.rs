//! Application state and logic.

use super::input::{self, Action};
use super::status::StatusLine;
use crate::Settings;
use crossterm::event::KeyCode;
use noughts_engine::{MatchEngine, MoveError, Position, WinLine};
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Exit the loop.
    Quit,
}

/// Main application state.
///
/// Owns the match engine; rendering only reads from it.
pub struct App {
    engine: MatchEngine,
    settings: Settings,
    cursor: Position,
    status: StatusLine,
    highlight: Option<WinLine>,
}

impl App {
    /// Creates a new application with a fresh session.
    #[instrument(skip(settings))]
    pub fn new(settings: Settings) -> Self {
        Self {
            engine: MatchEngine::new(),
            settings,
            cursor: Position::Center,
            status: StatusLine::default(),
            highlight: None,
        }
    }

    /// The match engine.
    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    /// Square under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Winning line to highlight, set from the last accepted move.
    pub fn highlight(&self) -> Option<WinLine> {
        self.highlight
    }

    /// Status line text: an active flash, else the match state.
    pub fn status_message(&self) -> String {
        if let Some(flash) = self.status.current() {
            return flash.to_string();
        }
        match self.engine.outcome() {
            Some(outcome) => outcome.to_string(),
            None => format!("{}'s Turn", self.engine.current_turn()),
        }
    }

    /// Handles one key press.
    #[instrument(skip(self, now))]
    pub fn handle_key(&mut self, key: KeyCode, now: Instant) -> Control {
        let Some(action) = input::action_for(key) else {
            return Control::Continue;
        };
        debug!(?action, "Key mapped");

        match action {
            Action::Cursor(direction) => {
                self.cursor = input::move_cursor(self.cursor, direction);
            }
            Action::PlayCursor => self.play(self.cursor, now),
            Action::Play(pos) => {
                self.cursor = pos;
                self.play(pos, now);
            }
            Action::Reset => self.reset(now),
            Action::NewSession => self.new_session(now),
            Action::Quit => {
                info!("User quit");
                return Control::Quit;
            }
        }
        Control::Continue
    }

    /// Plays the current sign at `pos`, flashing a message on rejection.
    #[instrument(skip(self, now))]
    pub fn play(&mut self, pos: Position, now: Instant) {
        match self.engine.play_move(pos.index()) {
            Ok(outcome) => {
                self.highlight = outcome.line();
                debug!(?outcome, "Move applied");
            }
            Err(e) => {
                let message = match e {
                    MoveError::GameOver => "Game Over! Reset to play.",
                    MoveError::CellOccupied(_) | MoveError::InvalidIndex(_) => "Cell taken!",
                };
                self.status.flash(message, now, self.settings.flash_duration());
            }
        }
    }

    /// Starts a new match; tallies carry over.
    #[instrument(skip(self, now))]
    pub fn reset(&mut self, now: Instant) {
        self.engine.reset();
        self.highlight = None;
        self.status
            .flash("Board Reset!", now, self.settings.reset_flash_duration());
    }

    /// Starts a new session with cleared tallies.
    #[instrument(skip(self, now))]
    pub fn new_session(&mut self, now: Instant) {
        self.engine.reset_session();
        self.highlight = None;
        self.status
            .flash("New Session!", now, self.settings.reset_flash_duration());
    }

    /// Expires timed status messages.
    pub fn tick(&mut self, now: Instant) {
        self.status.tick(now);
    }
}
