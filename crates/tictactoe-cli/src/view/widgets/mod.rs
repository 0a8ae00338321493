pub use self::{board_display::*, choice_menu::*, tally_display::*};

mod board_display;
mod choice_menu;
mod tally_display;

mod color {
    use ratatui::style::Color;

    pub const RED: Color = Color::Rgb(255, 85, 85);
    pub const BLUE: Color = Color::Rgb(85, 170, 255);
    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const GREEN: Color = Color::Rgb(0, 255, 0);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const DARK_GRAY: Color = Color::Rgb(80, 80, 80);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub mod style {
    use ratatui::style::{Modifier, Style};
    use tictactoe_engine::Mark;

    use crate::view::widgets::color;

    pub const TITLE: Style = Style::new().fg(color::WHITE).add_modifier(Modifier::BOLD);
    pub const HELP: Style = Style::new().fg(color::GRAY);
    pub const GRID: Style = Style::new().fg(color::DARK_GRAY);
    pub const CURSOR: Style = Style::new().fg(color::YELLOW);
    pub const WINNING_CELL: Style = Style::new().fg(color::GREEN);
    pub const BANNER: Style = Style::new().fg(color::YELLOW).add_modifier(Modifier::BOLD);
    pub const BUTTON: Style = Style::new().fg(color::WHITE);
    pub const SELECTED_BUTTON: Style = Style::new()
        .fg(color::YELLOW)
        .add_modifier(Modifier::REVERSED);

    pub const fn mark(mark: Mark) -> Style {
        match mark {
            Mark::X => Style::new().fg(color::RED).add_modifier(Modifier::BOLD),
            Mark::O => Style::new().fg(color::BLUE).add_modifier(Modifier::BOLD),
        }
    }

    /// Dimmed version of [`mark`] used for the hover preview.
    pub const fn preview(mark: Mark) -> Style {
        match mark {
            Mark::X => Style::new().fg(color::RED).add_modifier(Modifier::DIM),
            Mark::O => Style::new().fg(color::BLUE).add_modifier(Modifier::DIM),
        }
    }
}
