//! # GotoBox Component
//!
//! Single-line path prompt. Opened with `g`; Enter navigates to whatever was
//! typed (any path, registered or not, which is how you reach the 404 page
//! on purpose), Esc dismisses.
//!
//! ## State Management
//!
//! The buffer is internal state. The parent only learns about it through the
//! emitted `GotoEvent` when the prompt closes.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the GotoBox
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GotoEvent {
    /// User submitted a path (Enter pressed on a non-empty buffer)
    Navigate(String),
    /// User dismissed the prompt (Esc, or Enter on an empty buffer)
    Dismiss,
}

/// Path input component.
#[derive(Debug, Default)]
pub struct GotoBox {
    /// Text buffer (Internal State)
    pub buffer: String,
}

impl GotoBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }
}

impl EventHandler for GotoBox {
    type Event = GotoEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<GotoEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                None
            }
            TuiEvent::Backspace => {
                self.buffer.pop();
                None
            }
            TuiEvent::Submit => {
                let path = self.buffer.trim().to_string();
                if path.is_empty() {
                    Some(GotoEvent::Dismiss)
                } else {
                    Some(GotoEvent::Navigate(path))
                }
            }
            TuiEvent::Escape => Some(GotoEvent::Dismiss),
            _ => None,
        }
    }
}

impl Component for GotoBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let input = Paragraph::new(self.buffer.as_str())
            .block(Block::bordered().title("Go to path (Enter to navigate, Esc to cancel)"));
        frame.render_widget(input, area);

        // Cursor sits after the typed text, inside the border.
        let cursor_x = area.x + 1 + self.buffer.chars().count() as u16;
        frame.set_cursor_position(Position::new(cursor_x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}
