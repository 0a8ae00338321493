use super::{board::Board, mark::Mark};

/// The eight index triples that win when uniformly marked.
///
/// Rows first, then columns, then the two diagonals. The scan order decides which
/// triple [`winning_line`] reports when more than one is satisfied.
pub const WINNING_TRIPLES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Result of a board, derived on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Outcome {
    /// No winner yet and at least one empty cell.
    InProgress,
    /// Some triple is uniformly held by this mark.
    Won(Mark),
    /// Every cell is filled and no triple is satisfied.
    Tied,
}

impl Outcome {
    /// Evaluates `board`.
    ///
    /// The win check runs first, so a full board containing a triple is a win rather than a tie.
    #[must_use]
    pub fn of(board: &Board) -> Self {
        if let Some(mark) = winner(board) {
            Outcome::Won(mark)
        } else if board.is_full() {
            Outcome::Tied
        } else {
            Outcome::InProgress
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        !self.is_in_progress()
    }

    #[must_use]
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Won(mark) => Some(mark),
            Outcome::InProgress | Outcome::Tied => None,
        }
    }
}

/// Returns the first uniformly marked triple and its mark.
#[must_use]
pub fn winning_line(board: &Board) -> Option<(Mark, [usize; 3])> {
    WINNING_TRIPLES.into_iter().find_map(|triple @ [a, b, c]| {
        let mark = board.get(a)?;
        (board.get(b) == Some(mark) && board.get(c) == Some(mark)).then_some((mark, triple))
    })
}

/// Returns the winning mark, if any.
#[must_use]
pub fn winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}

/// Returns whether the board is full without a winner.
#[must_use]
pub fn is_tie(board: &Board) -> bool {
    winner(board).is_none() && board.is_full()
}
