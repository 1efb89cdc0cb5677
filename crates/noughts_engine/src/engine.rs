//! Match engine: turn order, terminal state and session tallies.

use super::board::{Board, BOARD_SIZE};
use super::error::MoveError;
use super::invariants::{InvariantSet, MatchInvariants};
use super::outcome::{MoveOutcome, Outcome, WinLine};
use super::position::Position;
use super::rules;
use super::tally::Tally;
use super::types::{Cell, Mark};
use tracing::{debug, info, instrument, warn};

/// Owns one board and everything needed to referee repeated matches on it.
///
/// Two states: in progress (no outcome recorded) and over (outcome
/// recorded). Only [`MatchEngine::reset`] leaves the over state. Board and
/// per-match fields are always reset together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchEngine {
    board: Board,
    turn_counter: u32,
    matches_played: u32,
    outcome: Option<Outcome>,
    winning_line: Option<WinLine>,
    tally: Tally,
}

impl MatchEngine {
    /// Starts a session: empty board, X to open, zero tallies.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn_counter: 1,
            matches_played: 0,
            outcome: None,
            winning_line: None,
            tally: Tally::default(),
        }
    }

    /// Sign to move next.
    ///
    /// Within a match signs alternate; across matches the opener alternates
    /// with the number of matches finished, so X opens odd-numbered matches
    /// and O opens even-numbered ones.
    pub fn current_turn(&self) -> Mark {
        let opener = if self.matches_played % 2 == 0 { Mark::X } else { Mark::O };
        if self.turn_counter % 2 == 1 {
            opener
        } else {
            opener.opponent()
        }
    }

    /// Plays the current sign at a board index (0-8).
    ///
    /// Checks run in order: game over, index range, occupancy. A rejected
    /// move leaves the engine untouched.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the match already has an outcome.
    /// - [`MoveError::InvalidIndex`] if `index` is negative or above 8.
    /// - [`MoveError::CellOccupied`] if the square already holds a mark.
    #[instrument(skip(self), fields(turn = self.turn_counter, sign = %self.current_turn()))]
    pub fn play_move<I>(&mut self, index: I) -> Result<MoveOutcome, MoveError>
    where
        I: TryInto<usize> + std::fmt::Debug + Copy,
    {
        if self.is_over() {
            warn!("Move rejected: match is over");
            return Err(MoveError::GameOver);
        }

        let pos = index
            .try_into()
            .ok()
            .and_then(Position::from_index)
            .ok_or_else(|| {
                warn!(?index, "Move rejected: index out of range");
                MoveError::InvalidIndex(format!("{:?}", index))
            })?;

        self.place(pos)
    }

    /// Like [`MatchEngine::play_move`], but takes raw text such as a typed
    /// command: an integer index or a square label like `"top-left"`.
    /// Anything else is an invalid index.
    ///
    /// # Errors
    ///
    /// Same as [`MatchEngine::play_move`].
    #[instrument(skip(self))]
    pub fn play_input(&mut self, input: &str) -> Result<MoveOutcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let trimmed = input.trim();
        match trimmed.parse::<i64>() {
            Ok(index) => self.play_move(index),
            Err(_) => match Position::from_label_or_number(trimmed) {
                Some(pos) => self.place(pos),
                None => {
                    warn!(input = trimmed, "Move rejected: not a square");
                    Err(MoveError::InvalidIndex(trimmed.to_string()))
                }
            },
        }
    }

    /// Plays the current sign at a typed position.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] or [`MoveError::CellOccupied`].
    #[instrument(skip(self), fields(sign = %self.current_turn()))]
    pub fn play_position(&mut self, pos: Position) -> Result<MoveOutcome, MoveError> {
        if self.is_over() {
            warn!("Move rejected: match is over");
            return Err(MoveError::GameOver);
        }
        self.place(pos)
    }

    fn place(&mut self, pos: Position) -> Result<MoveOutcome, MoveError> {
        if !self.board.is_empty(pos) {
            warn!(position = %pos, "Move rejected: square occupied");
            return Err(MoveError::CellOccupied(pos));
        }

        let sign = self.current_turn();
        self.board.place(pos, sign);
        debug!(position = %pos, %sign, "Mark placed");

        let result = match rules::check_outcome(&self.board) {
            Some((outcome, line)) => {
                self.finish(outcome, line);
                match (outcome, line) {
                    (Outcome::Winner(winner), Some(line)) => MoveOutcome::Won { winner, line },
                    _ => MoveOutcome::Draw,
                }
            }
            None => {
                self.turn_counter += 1;
                MoveOutcome::Continue {
                    placed: sign,
                    next: self.current_turn(),
                }
            }
        };

        debug_assert!(
            MatchInvariants::check_all(self).is_ok(),
            "Match invariants violated after move at {}",
            pos
        );

        Ok(result)
    }

    fn finish(&mut self, outcome: Outcome, line: Option<WinLine>) {
        self.outcome = Some(outcome);
        self.winning_line = line;
        self.matches_played += 1;
        self.tally.record(outcome);
        info!(
            %outcome,
            matches_played = self.matches_played,
            tally = %self.tally,
            "Match finished"
        );
    }

    /// Evaluates the current board without changing anything.
    pub fn check_outcome(&self) -> Option<Outcome> {
        rules::check_outcome(&self.board).map(|(outcome, _)| outcome)
    }

    /// Starts a new match. Tallies and the match count are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.turn_counter = 1;
        self.outcome = None;
        self.winning_line = None;
        debug!(next = %self.current_turn(), "Match reset");
    }

    /// Starts a new session: a fresh match with tallies cleared.
    #[instrument(skip(self))]
    pub fn reset_session(&mut self) {
        *self = Self::new();
        info!("Session reset");
    }

    /// Owned copy of the nine cells.
    pub fn snapshot(&self) -> [Cell; BOARD_SIZE] {
        self.board.snapshot()
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// True once the match has an outcome.
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Result of the match, once over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// The line that ended the match, if it was won.
    pub fn winning_line(&self) -> Option<WinLine> {
        self.winning_line
    }

    /// Session tallies.
    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// 1-based move number within the current match.
    pub fn turn_counter(&self) -> u32 {
        self.turn_counter
    }

    /// Matches finished this session.
    pub fn matches_played(&self) -> u32 {
        self.matches_played
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}
