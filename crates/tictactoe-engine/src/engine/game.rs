use crate::{
    PlaceError,
    core::{Board, Mark, Outcome},
};

use super::coin::{Coin, StartChoice};

/// Turn indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::IsVariant)]
pub enum Turn {
    /// No game has been started; the start screen is shown.
    #[default]
    Unstarted,
    /// The given mark places next.
    ToMove(Mark),
}

impl Turn {
    #[must_use]
    pub fn mark(self) -> Option<Mark> {
        match self {
            Turn::Unstarted => None,
            Turn::ToMove(mark) => Some(mark),
        }
    }
}

/// Which screen a game is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Phase {
    Unstarted,
    InProgress(Mark),
    Won(Mark),
    Tied,
}

/// State of a single game: the board, whose turn it is and the hover preview.
///
/// Invalid requests (placing on an occupied cell, hovering after the game is over, ...)
/// leave the state untouched. The outcome is never stored; it is evaluated from the board
/// whenever it is asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Turn,
    hover: Option<usize>,
}

impl Game {
    /// Creates an unstarted game.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn turn(&self) -> Turn {
        self.turn
    }

    #[must_use]
    pub fn hover(&self) -> Option<usize> {
        self.hover
    }

    /// Returns the hovered cell together with the mark a click there would place.
    #[must_use]
    pub fn hover_preview(&self) -> Option<(usize, Mark)> {
        Some((self.hover?, self.turn.mark()?))
    }

    /// Evaluates the current board.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        Outcome::of(&self.board)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        let Turn::ToMove(mark) = self.turn else {
            return Phase::Unstarted;
        };
        match self.outcome() {
            Outcome::InProgress => Phase::InProgress(mark),
            Outcome::Won(winner) => Phase::Won(winner),
            Outcome::Tied => Phase::Tied,
        }
    }

    /// Starts a new game with `first` to move.
    ///
    /// Valid from every phase; the board is cleared and the hover preview dropped.
    pub fn start(&mut self, first: Mark) {
        self.board = Board::EMPTY;
        self.turn = Turn::ToMove(first);
        self.hover = None;
    }

    /// Starts a new game, resolving `choice` with `coin` when it is random.
    ///
    /// Returns the mark that moves first.
    pub fn start_with<C>(&mut self, choice: StartChoice, coin: &mut C) -> Mark
    where
        C: Coin + ?Sized,
    {
        let first = choice.resolve(coin);
        self.start(first);
        first
    }

    /// Places the current player's mark at `index` and passes the turn.
    ///
    /// Returns the placed mark. On error nothing changes.
    pub fn place(&mut self, index: usize) -> Result<Mark, PlaceError> {
        let mark = self.accepting_mark()?;
        if index >= Board::CELLS {
            return Err(PlaceError::OutOfRange(index));
        }
        if !self.board.is_vacant(index) {
            return Err(PlaceError::Occupied(index));
        }

        self.board.set(index, mark);
        self.turn = Turn::ToMove(mark.opponent());
        self.hover = None;
        Ok(mark)
    }

    /// Records `index` as hovered if a click there would place a mark.
    pub fn hover_enter(&mut self, index: usize) {
        if self.accepting_mark().is_ok() && self.board.is_vacant(index) {
            self.hover = Some(index);
        }
    }

    pub fn hover_leave(&mut self) {
        self.hover = None;
    }

    fn accepting_mark(&self) -> Result<Mark, PlaceError> {
        let Turn::ToMove(mark) = self.turn else {
            return Err(PlaceError::NotStarted);
        };
        if self.outcome().is_terminal() {
            return Err(PlaceError::GameOver);
        }
        Ok(mark)
    }
}
