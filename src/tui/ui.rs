use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::router::Router;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{NavBar, Page, pages};

/// Draw one frame: title bar, the matched view (or the 404 fallback), and
/// either the navigation bar or the go-to prompt at the bottom.
pub fn draw_ui(frame: &mut Frame, router: &Router<Page>, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(3)]);
    let [title_area, main_area, bottom_area] = layout.areas(frame.area());

    // Title bar
    let title_text = format!("Atrium Shell ({})", router.location().path);
    frame.render_widget(Span::raw(title_text), title_area);

    // Main area: the matched view, or the shell's NotFound fallback
    let text = match router.current_view() {
        Some(page) => page(),
        None => pages::not_found(&router.location().path),
    };
    let page = Paragraph::new(text)
        .block(Block::bordered())
        .wrap(Wrap { trim: false });
    frame.render_widget(page, main_area);

    // Bottom row: go-to prompt when open, navigation bar otherwise
    if let Some(goto) = tui.goto.as_mut() {
        goto.render(frame, bottom_area);
    } else {
        let patterns = router
            .table()
            .routes()
            .iter()
            .map(|route| route.pattern.clone())
            .collect();
        let mut nav_bar = NavBar::new(patterns, router.location().path.clone());
        nav_bar.render(frame, bottom_area);
    }
}
