use ratatui::layout::{Constraint, Flex, Layout, Position, Rect};
use tictactoe_engine::{Board, StartChoice};

pub const CELL_WIDTH: u16 = 7;
pub const CELL_HEIGHT: u16 = 3;
pub const MENU_WIDTH: u16 = 30;

#[expect(clippy::cast_possible_truncation)]
const BOARD_WIDTH: u16 = CELL_WIDTH * Board::SIZE as u16;
#[expect(clippy::cast_possible_truncation)]
const BOARD_HEIGHT: u16 = CELL_HEIGHT * Board::SIZE as u16;
#[expect(clippy::cast_possible_truncation)]
const MENU_HEIGHT: u16 = StartChoice::ALL.len() as u16;

/// Areas of every element on screen.
///
/// Computed from the terminal area on each draw and kept around so mouse positions
/// can be mapped back to cells and buttons. Elements absent from a screen get an
/// empty `Rect`, which contains no position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub board: Rect,
    pub status: Rect,
    pub menu: Rect,
    pub tally: Rect,
    pub help: Rect,
}

impl ScreenLayout {
    /// Layout of the start screen: title, menu and help only.
    pub fn start(area: Rect) -> Self {
        let [title, _, menu, _, tally, help] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(MENU_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(area);
        Self {
            title,
            board: Rect::default(),
            status: Rect::default(),
            menu,
            tally,
            help,
        }
    }

    /// Layout of the board screen, shared by the in-progress and finished states.
    pub fn board(area: Rect) -> Self {
        let [title, _, board, status, menu, tally, help] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(BOARD_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(MENU_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(area);
        let [board] = Layout::horizontal([Constraint::Length(BOARD_WIDTH)])
            .flex(Flex::Center)
            .areas(board);
        Self {
            title,
            board,
            status,
            menu,
            tally,
            help,
        }
    }

    pub fn cells(&self) -> [Rect; Board::CELLS] {
        grid_cells(self.board)
    }

    pub fn buttons(&self) -> [Rect; StartChoice::ALL.len()] {
        menu_buttons(self.menu)
    }

    /// Returns the cell under the given terminal position.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.cells().iter().position(|cell| cell.contains(position))
    }

    /// Returns the menu button under the given terminal position.
    pub fn button_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.buttons()
            .iter()
            .position(|button| button.contains(position))
    }
}

/// Splits a board area into its cells, row-major.
pub fn grid_cells(area: Rect) -> [Rect; Board::CELLS] {
    let vertical = Layout::vertical([Constraint::Length(CELL_HEIGHT); Board::SIZE]);
    let horizontal =
        Layout::horizontal([Constraint::Length(CELL_WIDTH); Board::SIZE]).flex(Flex::Center);

    let mut cells = [Rect::default(); Board::CELLS];
    let rows = vertical.areas::<{ Board::SIZE }>(area);
    for (row, row_area) in rows.into_iter().enumerate() {
        let cols = horizontal.areas::<{ Board::SIZE }>(row_area);
        for (col, cell) in cols.into_iter().enumerate() {
            cells[Board::index(row, col)] = cell;
        }
    }
    cells
}

/// Splits a menu area into one centered button per line.
pub fn menu_buttons(area: Rect) -> [Rect; StartChoice::ALL.len()] {
    let vertical = Layout::vertical([Constraint::Length(1); StartChoice::ALL.len()]);
    vertical
        .areas::<{ StartChoice::ALL.len() }>(area)
        .map(|line| line.centered_horizontally(Constraint::Length(MENU_WIDTH)))
}
