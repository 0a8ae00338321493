use crossterm::event::{Event, KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    text::{Line, Span},
};
use tictactoe_engine::{Board, Coin, Game, Mark, Phase, StartChoice, Tally, winning_line};

use crate::{
    tui::App,
    view::{
        self,
        layout::ScreenLayout,
        widgets::{BoardDisplay, ChoiceMenu, TallyDisplay, style},
    },
};

const TITLE: &str = "Tic Tac Toe";
const CENTER: usize = 4;
const CELL_KEYS: &str = "123456789";

/// Interactive game: start screen, board, and result screen.
///
/// Pointer and keyboard input are both translated into [`Game`] operations. The
/// keyboard cursor stands in for the pointer, so moving it hovers the cell under it.
#[derive(Debug)]
pub struct PlayApp {
    game: Game,
    coin: Box<dyn Coin>,
    tally: Tally,
    layout: ScreenLayout,
    menu_cursor: usize,
    board_cursor: usize,
    pointer_cell: Option<usize>,
    is_exiting: bool,
}

impl PlayApp {
    pub fn new(coin: Box<dyn Coin>) -> Self {
        Self {
            game: Game::new(),
            coin,
            tally: Tally::default(),
            layout: ScreenLayout::default(),
            menu_cursor: 0,
            board_cursor: CENTER,
            pointer_cell: None,
            is_exiting: false,
        }
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// Returns whether the start menu is on screen (start or result screen).
    fn is_menu_visible(&self) -> bool {
        !self.game.phase().is_in_progress()
    }

    pub fn start(&mut self, choice: StartChoice) {
        let first = self.game.start_with(choice, self.coin.as_mut());
        self.pointer_cell = None;
        tracing::info!(%choice, %first, "game started");
    }

    fn place(&mut self, index: usize) {
        match self.game.place(index) {
            Ok(mark) => {
                tracing::info!(index, %mark, "mark placed");
                let outcome = self.game.outcome();
                if outcome.is_terminal() {
                    self.tally.record(outcome);
                    tracing::info!(?outcome, "game finished");
                }
            }
            Err(err) => tracing::debug!(index, %err, "placement ignored"),
        }
    }

    /// Moves the hover to `cell`, as a pointer crossing cell borders would.
    fn hover(&mut self, cell: Option<usize>) {
        self.game.hover_leave();
        if let Some(index) = cell {
            self.game.hover_enter(index);
        }
    }

    fn move_cursor(&mut self, code: KeyCode) {
        let (row, col) = Board::position(self.board_cursor);
        let last = Board::SIZE - 1;
        let (row, col) = match code {
            KeyCode::Up | KeyCode::Char('k') => (row.saturating_sub(1), col),
            KeyCode::Down | KeyCode::Char('j') => ((row + 1).min(last), col),
            KeyCode::Left | KeyCode::Char('h') => (row, col.saturating_sub(1)),
            KeyCode::Right | KeyCode::Char('l') => (row, (col + 1).min(last)),
            _ => return,
        };
        self.board_cursor = Board::index(row, col);
        self.pointer_cell = None;
        self.hover(Some(self.board_cursor));
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        let last = StartChoice::ALL.len() - 1;
        match code {
            KeyCode::Char('x') => self.start(StartChoice::Fixed(Mark::X)),
            KeyCode::Char('o') => self.start(StartChoice::Fixed(Mark::O)),
            KeyCode::Char('r') => self.start(StartChoice::Random),
            KeyCode::Up | KeyCode::Char('k') => {
                self.menu_cursor = self.menu_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.menu_cursor = (self.menu_cursor + 1).min(last);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.start(StartChoice::ALL[self.menu_cursor]);
            }
            _ => {}
        }
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.board_cursor),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(index) = CELL_KEYS.find(c) {
                    self.place(index);
                }
            }
            code => self.move_cursor(code),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let MouseEvent {
            kind, column, row, ..
        } = mouse;
        let cell = self.layout.cell_at(column, row);
        let button = self
            .layout
            .button_at(column, row)
            .filter(|_| self.is_menu_visible());

        match kind {
            MouseEventKind::Moved => {
                if let Some(button) = button {
                    self.menu_cursor = button;
                }
                if cell != self.pointer_cell {
                    self.pointer_cell = cell;
                    if let Some(index) = cell {
                        self.board_cursor = index;
                    }
                    self.hover(cell);
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(button) = button {
                    self.start(StartChoice::ALL[button]);
                } else if let Some(index) = cell {
                    self.board_cursor = index;
                    self.place(index);
                }
            }
            _ => {}
        }
    }

    fn help_text(&self) -> &'static str {
        match self.game.phase() {
            Phase::InProgress(_) => {
                "Controls: ←↓↑→ (Move) | Enter (Place) | 1-9 (Cell) | Mouse | Q (Quit)"
            }
            Phase::Unstarted | Phase::Won(_) | Phase::Tied => {
                "Controls: X/O/R (Choose) | ↑↓ Enter (Select) | Mouse | Q (Quit)"
            }
        }
    }

    fn draw_start_screen(&self, frame: &mut Frame) {
        let layout = &self.layout;
        frame.render_widget(Line::styled(TITLE, style::TITLE).centered(), layout.title);
        frame.render_widget(ChoiceMenu::new().selected(self.menu_cursor), layout.menu);
    }

    fn draw_board_screen(&self, frame: &mut Frame, phase: Phase) {
        let layout = &self.layout;
        frame.render_widget(Line::styled(TITLE, style::TITLE).centered(), layout.title);

        let board = self.game.board();
        let mut board_display = BoardDisplay::new(board)
            .preview(self.game.hover_preview())
            .winning_line(winning_line(board).map(|(_, line)| line));
        if phase.is_in_progress() {
            board_display = board_display.cursor(self.board_cursor);
        }
        frame.render_widget(board_display, layout.board);

        let status = if let Phase::InProgress(mark) = phase {
            Line::from(vec![
                Span::styled(mark.to_string(), style::mark(mark)),
                Span::raw(" to move"),
            ])
        } else {
            let message = view::outcome_message(self.game.outcome()).unwrap_or_default();
            Line::styled(message, style::BANNER)
        };
        frame.render_widget(status.centered(), layout.status);

        if !phase.is_in_progress() {
            frame.render_widget(ChoiceMenu::new().selected(self.menu_cursor), layout.menu);
        }
    }
}

impl App for PlayApp {
    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, event: &Event) {
        if let Some(key) = event.as_key_press_event() {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.is_exiting = true,
                code if self.is_menu_visible() => self.handle_menu_key(code),
                code => self.handle_board_key(code),
            }
            return;
        }
        if let Event::Mouse(mouse) = *event {
            self.handle_mouse(mouse);
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let phase = self.game.phase();
        if phase.is_unstarted() {
            self.layout = ScreenLayout::start(area);
            self.draw_start_screen(frame);
        } else {
            self.layout = ScreenLayout::board(area);
            self.draw_board_screen(frame, phase);
        }

        frame.render_widget(TallyDisplay::new(&self.tally), self.layout.tally);
        frame.render_widget(
            Line::styled(self.help_text(), style::HELP).centered(),
            self.layout.help,
        );
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend, layout::Rect};
    use tictactoe_engine::{Outcome, Turn};

    use super::*;

    #[derive(Debug)]
    struct FixedCoin(bool);

    impl Coin for FixedCoin {
        fn toss(&mut self) -> bool {
            self.0
        }
    }

    fn new_app(heads: bool) -> PlayApp {
        PlayApp::new(Box::new(FixedCoin(heads)))
    }

    fn press(app: &mut PlayApp, code: KeyCode) {
        app.handle_event(&Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn mouse(app: &mut PlayApp, kind: MouseEventKind, area: Rect) {
        app.handle_event(&Event::Mouse(MouseEvent {
            kind,
            column: area.x + area.width / 2,
            row: area.y + area.height / 2,
            modifiers: KeyModifiers::NONE,
        }));
    }

    fn redraw(app: &mut PlayApp) {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();
    }

    #[test]
    fn test_menu_keys_start_game() {
        let mut app = new_app(true);
        assert!(app.game.phase().is_unstarted());
        press(&mut app, KeyCode::Char('o'));
        assert_eq!(app.game.phase(), Phase::InProgress(Mark::O));

        let mut app = new_app(false);
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.game.turn(), Turn::ToMove(Mark::O));

        let mut app = new_app(true);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game.turn(), Turn::ToMove(Mark::X));
    }

    #[test]
    fn test_board_keys_ignored_on_start_screen() {
        let mut app = new_app(true);
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.game, Game::new());
    }

    #[test]
    fn test_digit_keys_play_to_a_win() {
        let mut app = new_app(true);
        app.start(StartChoice::Fixed(Mark::X));
        for key in ['1', '2', '4', '5', '7'] {
            press(&mut app, KeyCode::Char(key));
        }
        assert_eq!(app.game.outcome(), Outcome::Won(Mark::X));
        assert_eq!(app.tally().wins(Mark::X), 1);
        assert!(app.is_menu_visible());

        // Digits are menu-inert and the finished board stays as it is.
        let board = *app.game.board();
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.game.board(), &board);
    }

    #[test]
    fn test_cursor_drives_hover() {
        let mut app = new_app(true);
        app.start(StartChoice::Fixed(Mark::X));
        press(&mut app, KeyCode::Left);
        assert_eq!(app.board_cursor, 3);
        assert_eq!(app.game.hover_preview(), Some((3, Mark::X)));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game.board().get(3), Some(Mark::X));
        assert_eq!(app.game.hover(), None);

        press(&mut app, KeyCode::Left);
        assert_eq!(app.board_cursor, 3);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.board_cursor, 0);
        assert_eq!(app.game.hover_preview(), Some((0, Mark::O)));
    }

    #[test]
    fn test_mouse_hover_and_click() {
        let mut app = new_app(true);
        app.start(StartChoice::Fixed(Mark::O));
        redraw(&mut app);
        let cells = app.layout.cells();

        mouse(&mut app, MouseEventKind::Moved, cells[4]);
        assert_eq!(app.game.hover_preview(), Some((4, Mark::O)));

        let title = app.layout.title;
        mouse(&mut app, MouseEventKind::Moved, title);
        assert_eq!(app.game.hover(), None);

        mouse(&mut app, MouseEventKind::Moved, cells[4]);
        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), cells[4]);
        assert_eq!(app.game.board().get(4), Some(Mark::O));
        assert_eq!(app.game.turn(), Turn::ToMove(Mark::X));
        assert_eq!(app.game.hover(), None);

        // Occupied cells neither preview nor accept marks.
        mouse(&mut app, MouseEventKind::Moved, cells[0]);
        mouse(&mut app, MouseEventKind::Moved, cells[4]);
        assert_eq!(app.game.hover(), None);
        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), cells[4]);
        assert_eq!(app.game.board().get(4), Some(Mark::O));
        assert_eq!(app.game.turn(), Turn::ToMove(Mark::X));
    }

    #[test]
    fn test_pointer_rehovers_after_keyboard_moves_cursor() {
        let mut app = new_app(true);
        app.start(StartChoice::Fixed(Mark::X));
        redraw(&mut app);
        let cell = app.layout.cells()[5];

        mouse(&mut app, MouseEventKind::Moved, cell);
        assert_eq!(app.game.hover(), Some(5));

        press(&mut app, KeyCode::Left);
        assert_eq!(app.game.hover(), Some(4));

        // Still inside cell 5, one column over.
        app.handle_event(&Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: cell.x + 1,
            row: cell.y + 1,
            modifiers: KeyModifiers::NONE,
        }));
        assert_eq!(app.game.hover(), Some(5));
        assert_eq!(app.board_cursor, 5);
    }

    #[test]
    fn test_mouse_restart_from_result_screen() {
        let mut app = new_app(false);
        app.start(StartChoice::Fixed(Mark::X));
        // X O X / X O O / O X X
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            app.place(index);
        }
        assert_eq!(app.game.phase(), Phase::Tied);
        assert_eq!(app.tally().ties(), 1);

        redraw(&mut app);
        let buttons = app.layout.buttons();
        mouse(&mut app, MouseEventKind::Moved, buttons[2]);
        assert_eq!(app.menu_cursor, 2);
        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), buttons[2]);
        assert_eq!(app.game.phase(), Phase::InProgress(Mark::O));
        assert_eq!(app.game.board(), &Board::EMPTY);
    }

    #[test]
    fn test_menu_buttons_inert_during_play() {
        let mut app = new_app(true);
        app.start(StartChoice::Fixed(Mark::X));
        app.place(0);
        redraw(&mut app);
        let buttons = app.layout.buttons();
        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), buttons[1]);
        assert_eq!(app.game.board().get(0), Some(Mark::X));
        assert_eq!(app.game.turn(), Turn::ToMove(Mark::O));
    }

    #[test]
    fn test_draw_shows_banner() {
        let mut app = new_app(true);
        app.start(StartChoice::Fixed(Mark::X));
        for index in [0, 1, 3, 4, 6] {
            app.place(index);
        }
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();
        let buf = terminal.backend().buffer();
        let status = app.layout.status;
        let text = (status.x..status.right())
            .map(|x| buf[(x, status.y)].symbol())
            .collect::<String>();
        assert_eq!(text.trim(), "X Wins!");
    }

    #[test]
    fn test_quit() {
        let mut app = new_app(true);
        assert!(!app.should_exit());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_exit());
    }
}
