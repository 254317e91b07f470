//! # NavBar Component
//!
//! Bottom bar listing every registered route pattern with its jump key,
//! highlighting the one matching the current location. Stateless: both the
//! pattern list and the current path arrive as props.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::Component;

pub struct NavBar {
    /// Route patterns in registration order (Prop)
    pub patterns: Vec<String>,
    /// Current location path (Prop)
    pub current_path: String,
}

impl NavBar {
    pub fn new(patterns: Vec<String>, current_path: String) -> Self {
        Self {
            patterns,
            current_path,
        }
    }
}

impl Component for NavBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for (index, pattern) in self.patterns.iter().enumerate() {
            if index > 0 {
                spans.push(Span::raw("   "));
            }
            let label = format!("[{}] {}", index + 1, pattern);
            let style = if *pattern == self.current_path {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::DIM)
            };
            spans.push(Span::styled(label, style));
        }

        let bar = Paragraph::new(Line::from(spans)).block(
            Block::bordered().title("Routes").title_bottom(
                Line::from(Span::styled(
                    " g go to | backspace back | q quit ",
                    Style::default().add_modifier(Modifier::DIM),
                ))
                .right_aligned(),
            ),
        );
        frame.render_widget(bar, area);
    }
}
