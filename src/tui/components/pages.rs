//! # Pages
//!
//! The registered views. Each page is a zero-argument function producing the
//! `Text` it wants displayed. The router hands these back without ever
//! looking inside; the shell invokes the matched one on each draw.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

/// A view: a zero-argument producer of displayable content.
pub type Page = fn() -> Text<'static>;

fn heading(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

pub fn home() -> Text<'static> {
    Text::from(vec![
        heading("Atrium"),
        Line::raw(""),
        Line::raw("A small application shell: one mount point, a handful of"),
        Line::raw("named views, and a router that decides which one you see."),
        Line::raw(""),
        Line::raw("  1-9        jump to a registered route"),
        Line::raw("  g          go to a path by name"),
        Line::raw("  Backspace  back        Alt+Right  forward"),
        Line::raw("  q          quit"),
    ])
}

pub fn about() -> Text<'static> {
    Text::from(vec![
        heading("About"),
        Line::raw(""),
        Line::raw("Routes are an ordered list of (pattern, view) pairs fixed"),
        Line::raw("at startup. Matching is exact: a path either names a view"),
        Line::raw("or it doesn't, and the shell shows a fallback page when it"),
        Line::raw("doesn't. Back and forward walk the same history stack a"),
        Line::raw("browser would keep for you."),
    ])
}

/// Fallback for paths with no registered route. Deliberately not part of the
/// route table: the router reports NotFound as a plain `None` and the shell
/// chooses to render this.
pub fn not_found(path: &str) -> Text<'static> {
    Text::from(vec![
        Line::from(Span::styled(
            "404",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::raw(format!("No view is registered for {path:?}.")),
        Line::raw(""),
        Line::raw("Press Backspace to go back."),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_produce_content() {
        assert!(!home().lines.is_empty());
        assert!(!about().lines.is_empty());
    }

    #[test]
    fn test_not_found_names_the_missing_path() {
        let text = not_found("/missing");
        let flat = text.to_string();
        assert!(flat.contains("404"));
        assert!(flat.contains("/missing"));
    }
}
