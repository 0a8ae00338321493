use crate::core::{Mark, Outcome};

/// Count of finished games in the current session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    x_wins: usize,
    o_wins: usize,
    ties: usize,
}

impl Tally {
    #[must_use]
    pub fn wins(&self, mark: Mark) -> usize {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    #[must_use]
    pub fn ties(&self) -> usize {
        self.ties
    }

    /// Records a finished game. In-progress outcomes are not counted.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome.winner() {
            Some(Mark::X) => self.x_wins += 1,
            Some(Mark::O) => self.o_wins += 1,
            None if outcome.is_tied() => self.ties += 1,
            None => {}
        }
    }
}
