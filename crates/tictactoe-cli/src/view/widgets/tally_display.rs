use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use tictactoe_engine::{Mark, Tally};

use crate::view::widgets::style;

/// One-line summary of the games finished in this session.
#[derive(Debug)]
pub struct TallyDisplay<'a> {
    tally: &'a Tally,
}

impl<'a> TallyDisplay<'a> {
    pub fn new(tally: &'a Tally) -> Self {
        Self { tally }
    }
}

impl Widget for TallyDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![];
        for mark in Mark::ALL {
            spans.push(Span::styled(mark.to_string(), style::mark(mark)));
            spans.push(Span::styled(format!(" {}   ", self.tally.wins(mark)), style::HELP));
        }
        spans.push(Span::styled(format!("Ties {}", self.tally.ties()), style::HELP));
        Line::from(spans).centered().render(area, buf);
    }
}
