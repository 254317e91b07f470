//! # TUI Adapter
//!
//! The ratatui-specific layer: terminal I/O, rendering, and translation of
//! keyboard events into router calls. This is the only module that knows
//! about ratatui and crossterm; the core routing logic never sees either.
//!
//! ## Redraw Strategy
//!
//! Conditional redraw driven by the router's change signal: the loop polls
//! with a timeout, drains every pending event, applies them to the router
//! strictly in delivery order, and draws once only if something changed the
//! location or the go-to overlay. Nothing here animates, so an idle shell
//! draws nothing.

pub mod component;
pub mod components;
pub mod event;
mod ui;

use log::{debug, info};
use std::time::Duration;

use crate::core::config::ResolvedConfig;
use crate::core::history::MemoryHistory;
use crate::core::route::RouteTable;
use crate::core::router::Router;
use crate::tui::component::EventHandler;
use crate::tui::components::{GotoBox, GotoEvent, Page, pages};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core routing state)
pub struct TuiState {
    /// Go-to prompt overlay (None = hidden)
    pub goto: Option<GotoBox>,
}

impl TuiState {
    pub fn new() -> Self {
        Self { goto: None }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

/// The static route table. Built once at startup, immutable afterwards -
/// there is no dynamic registration.
fn route_table() -> RouteTable<Page> {
    let mut table = RouteTable::new();
    table.register("/", pages::home as Page);
    table.register("/about", pages::about as Page);
    table
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let history = MemoryHistory::new(config.start_path.clone());
    let mut router = Router::new(route_table(), Box::new(history));
    let mut tui = TuiState::new();

    // The terminal is the mount point. Failing to acquire it means nothing
    // can be rendered, so the error propagates to main untouched.
    let mut terminal = ratatui::try_init()?;
    info!(
        "Mounted at {} with {} routes",
        router.location().path,
        router.table().len()
    );

    let tick = Duration::from_millis(config.tick_ms);
    let mut needs_redraw = true; // Force first frame
    let mut should_quit = false;

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &router, &mut tui))?;
            needs_redraw = false;
        }

        // Process first event + drain ALL pending events before next draw
        let first_event = poll_event_timeout(tick);
        for ev in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if matches!(ev, TuiEvent::Resize) {
                needs_redraw = true;
                continue;
            }

            // Ctrl+C always quits regardless of mode
            if matches!(ev, TuiEvent::ForceQuit) {
                should_quit = true;
                continue;
            }

            // When the go-to prompt is open, it owns every event
            if let Some(ref mut goto) = tui.goto {
                needs_redraw = true; // buffer edits repaint the prompt
                if let Some(goto_event) = goto.handle_event(&ev) {
                    match goto_event {
                        GotoEvent::Navigate(path) => {
                            router.navigate(&path);
                        }
                        GotoEvent::Dismiss => {}
                    }
                    tui.goto = None;
                }
                continue;
            }

            // Browse mode
            match ev {
                TuiEvent::InputChar('q') | TuiEvent::Escape => should_quit = true,
                TuiEvent::InputChar('g') => {
                    tui.goto = Some(GotoBox::new());
                    needs_redraw = true;
                }
                TuiEvent::InputChar(c @ '1'..='9') => {
                    let index = c as usize - '1' as usize;
                    let pattern = router
                        .table()
                        .routes()
                        .get(index)
                        .map(|route| route.pattern.clone());
                    if let Some(pattern) = pattern {
                        needs_redraw |= router.navigate(&pattern);
                    }
                }
                // Backspace doubles as the back button outside the prompt
                TuiEvent::Back | TuiEvent::Backspace => needs_redraw |= router.back(),
                TuiEvent::Forward => needs_redraw |= router.forward(),
                _ => {}
            }
        }

        if should_quit {
            break;
        }
    }

    debug!("Unmounting at {}", router.location().path);
    ratatui::restore();
    Ok(())
}
