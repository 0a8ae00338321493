use std::io;

use crossterm::event::{self, Event, MouseEventKind};

use crate::tui::event::TuiEvent;

/// Event loop state management.
///
/// Nothing changes on its own in a turn-based game, so a render is requested only after
/// an input event arrives. The loop otherwise blocks on crossterm.
#[derive(Debug)]
pub(super) struct EventLoop {
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    pub(super) fn new() -> Self {
        Self {
            dirty: true, // Initial render is required on startup
        }
    }

    /// Returns the next event.
    ///
    /// Blocks until a crossterm event occurs when no render is pending.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        if self.dirty {
            self.dirty = false;
            return Ok(TuiEvent::Render);
        }

        let event = event::read()?;
        self.dirty = needs_render(&event);
        Ok(event.into())
    }
}

fn needs_render(event: &Event) -> bool {
    match event {
        // Drags and scrolls never change what is on screen.
        Event::Mouse(mouse) => matches!(
            mouse.kind,
            MouseEventKind::Down(_) | MouseEventKind::Up(_) | MouseEventKind::Moved
        ),
        Event::FocusGained | Event::FocusLost => false,
        _ => true,
    }
}
