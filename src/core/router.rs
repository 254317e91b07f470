//! # Router
//!
//! Owns the current [`Location`] and the history seam. `navigate` is the only
//! writer of the Location; everything else reads it. There is no module-level
//! singleton: the shell constructs one `Router` at mount time, holds it for
//! the process lifetime, and drops it at unmount.
//!
//! Within one navigation the ordering is fixed: the Location is updated
//! first, the match happens against the updated Location, and only then does
//! the caller receive the re-render signal (the `bool` return). The loop is
//! single-threaded, so no second navigation can interleave mid-match.

use log::debug;

use crate::core::history::History;
use crate::core::route::RouteTable;

/// The currently active path. Created at mount, updated on every navigation,
/// written only by the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
}

/// Router lifecycle phase.
///
/// `Transitioning` spans a single navigation call, between the Location
/// update and the re-render signal. The shell is single-threaded and the
/// call completes before anyone can look, so the observable phase is always
/// `Idle`; the variant exists to pin the ordering down, not to be seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Transitioning,
}

pub struct Router<V> {
    table: RouteTable<V>,
    location: Location,
    history: Box<dyn History>,
    phase: Phase,
}

impl<V> Router<V> {
    /// The initial Location is whatever entry the history currently points
    /// at, so a router mounted over a fresh history starts at the start path.
    pub fn new(table: RouteTable<V>, history: Box<dyn History>) -> Self {
        let location = Location {
            path: history.current().to_string(),
        };
        Self {
            table,
            location,
            history,
            phase: Phase::Idle,
        }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn table(&self) -> &RouteTable<V> {
        &self.table
    }

    /// The view for the current Location.
    ///
    /// `None` is the NotFound result. It is a value, not an error: a failed
    /// match can never crash the render loop, and the fallback (blank view,
    /// error page, redirect) belongs to the caller.
    pub fn current_view(&self) -> Option<&V> {
        self.table.resolve(&self.location.path)
    }

    /// Explicit navigation: record a history entry and move the Location.
    ///
    /// Navigating to the path that is already current is a full no-op - no
    /// history entry, no redraw signal. Returns whether the Location changed;
    /// the caller treats `true` as its re-render trigger.
    pub fn navigate(&mut self, path: &str) -> bool {
        if self.location.path == path {
            debug!("navigate({path:?}): already current, no-op");
            return false;
        }
        self.phase = Phase::Transitioning;
        self.history.push(path);
        self.location.path = path.to_string();
        debug!("navigate -> {path:?}");
        self.phase = Phase::Idle;
        true
    }

    /// Externally-originated back navigation (the host's back button).
    ///
    /// Identical to [`navigate`](Self::navigate) except no new history entry
    /// is recorded - the entry already exists. Returns `false` at the
    /// history boundary.
    pub fn back(&mut self) -> bool {
        match self.history.back() {
            Some(path) => {
                self.phase = Phase::Transitioning;
                self.location.path = path;
                debug!("back -> {:?}", self.location.path);
                self.phase = Phase::Idle;
                true
            }
            None => false,
        }
    }

    /// Externally-originated forward navigation (the host's forward button).
    pub fn forward(&mut self) -> bool {
        match self.history.forward() {
            Some(path) => {
                self.phase = Phase::Transitioning;
                self.location.path = path;
                debug!("forward -> {:?}", self.location.path);
                self.phase = Phase::Idle;
                true
            }
            None => false,
        }
    }
}
