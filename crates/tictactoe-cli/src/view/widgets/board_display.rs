use std::iter;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block as BlockWidget, Borders, Widget},
};
use tictactoe_engine::{Board, Mark};

use crate::view::{layout, widgets::style};

/// The 3×3 grid with committed marks, the hover preview and the keyboard cursor.
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    board: &'a Board,
    preview: Option<(usize, Mark)>,
    cursor: Option<usize>,
    winning_line: Option<[usize; 3]>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            preview: None,
            cursor: None,
            winning_line: None,
        }
    }

    pub fn preview(self, preview: Option<(usize, Mark)>) -> Self {
        Self { preview, ..self }
    }

    pub fn cursor(self, index: usize) -> Self {
        Self {
            cursor: Some(index),
            ..self
        }
    }

    pub fn winning_line(self, line: Option<[usize; 3]>) -> Self {
        Self {
            winning_line: line,
            ..self
        }
    }

    fn cell_span(&self, index: usize) -> Span<'static> {
        match (self.board.get(index), self.preview) {
            (Some(mark), _) => Span::styled(mark.to_string(), style::mark(mark)),
            (None, Some((hovered, mark))) if hovered == index => {
                Span::styled(mark.to_string(), style::preview(mark))
            }
            (None, _) => Span::raw(" "),
        }
    }

    fn border_style(&self, index: usize) -> Style {
        if self
            .winning_line
            .is_some_and(|line| line.contains(&index))
        {
            style::WINNING_CELL
        } else if self.cursor == Some(index) {
            style::CURSOR
        } else {
            style::GRID
        }
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cells = layout::grid_cells(area);
        for (index, cell_area) in iter::zip(0.., cells) {
            let block = BlockWidget::new()
                .borders(Borders::ALL)
                .border_style(self.border_style(index));
            let inner = block.inner(cell_area);
            block.render(cell_area, buf);
            Line::from(self.cell_span(index)).centered().render(inner, buf);
        }
    }
}
