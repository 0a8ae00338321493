use std::iter;

use ratatui::{buffer::Buffer, layout::Rect, text::Line, widgets::Widget};
use tictactoe_engine::StartChoice;

use crate::view::{layout, widgets::style};

/// The three "who goes first" buttons shown on the start and result screens.
#[derive(Debug, Default)]
pub struct ChoiceMenu {
    selected: Option<usize>,
}

impl ChoiceMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(mut self, index: usize) -> Self {
        self.selected = Some(index);
        self
    }
}

impl Widget for ChoiceMenu {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let buttons = layout::menu_buttons(area);
        for (i, (choice, button)) in iter::zip(StartChoice::ALL, buttons).enumerate() {
            let style = if self.selected == Some(i) {
                style::SELECTED_BUTTON
            } else {
                style::BUTTON
            };
            Line::styled(choice.to_string(), style)
                .centered()
                .render(button, buf);
        }
    }
}
