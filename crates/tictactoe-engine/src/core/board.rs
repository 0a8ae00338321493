use std::{fmt, str::FromStr};

use super::mark::Mark;

/// Error returned when parsing a [`Board`] from its text form.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    #[display("expected 9 cells, found {_0}")]
    InvalidLength(#[error(not(source))] usize),
    #[display("invalid cell {_0:?} at index {_1}")]
    InvalidCell(char, usize),
}

/// A 3×3 tic-tac-toe board.
///
/// Cells are stored row-major: index `i` lives at row `i / 3`, column `i % 3`.
/// A cell is either empty (`None`) or holds a [`Mark`].
///
/// # Text form
///
/// Boards parse from nine characters using `X`, `O` and `.` for an empty cell
/// (`-`, `_` and space are also accepted as empty). Line breaks and `/` are ignored, so the
/// [`Display`](fmt::Display) output parses back to the same board.
///
/// ```
/// use tictactoe_engine::{Board, Mark};
///
/// let board: Board = "XO.\n.X.\n..O".parse().unwrap();
/// assert_eq!(board.get(0), Some(Mark::X));
/// assert_eq!(board.get(2), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Option<Mark>; Board::CELLS],
}

impl Board {
    /// Side length of the grid.
    pub const SIZE: usize = 3;
    /// Number of cells on the board.
    pub const CELLS: usize = Self::SIZE * Self::SIZE;

    /// A board with every cell empty.
    pub const EMPTY: Self = Self {
        cells: [None; Self::CELLS],
    };

    /// Returns the mark at `index`, or `None` if the cell is empty or out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    /// Returns whether `index` names a cell that holds no mark.
    #[must_use]
    pub fn is_vacant(&self, index: usize) -> bool {
        matches!(self.cells.get(index), Some(None))
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the cells of each row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Mark>]> + '_ {
        self.cells.chunks_exact(Self::SIZE)
    }

    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = Some(mark);
    }

    /// Converts a cell index into `(row, column)`.
    #[must_use]
    pub const fn position(index: usize) -> (usize, usize) {
        (index / Self::SIZE, index % Self::SIZE)
    }

    /// Converts `(row, column)` into a cell index.
    #[must_use]
    pub const fn index(row: usize, col: usize) -> usize {
        row * Self::SIZE + col
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                let c = cell.map_or('.', Mark::as_char);
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars = s
            .chars()
            .filter(|c| !matches!(c, '\n' | '\r' | '/'))
            .collect::<Vec<_>>();
        if chars.len() != Self::CELLS {
            return Err(ParseBoardError::InvalidLength(chars.len()));
        }

        let mut board = Self::EMPTY;
        for (i, c) in chars.into_iter().enumerate() {
            match c {
                '.' | '-' | '_' | ' ' => {}
                _ => {
                    let mark = Mark::from_char(c).ok_or(ParseBoardError::InvalidCell(c, i))?;
                    board.set(i, mark);
                }
            }
        }
        Ok(board)
    }
}
