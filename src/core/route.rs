//! # Routes
//!
//! The view registry and the path matcher. A `RouteTable` is an ordered list
//! of (pattern, view) pairs built once at startup; `resolve` walks it in
//! registration order and returns the first view whose pattern equals the
//! requested path exactly.
//!
//! The view payload `V` is opaque to this module - the TUI registers
//! page-rendering functions, tests register plain labels. The table never
//! invokes or inspects a view, it only hands it back.

use log::warn;

/// A single (pattern, view) pair.
///
/// `pattern` is an exact path such as "/" or "/about". No wildcards, no
/// parameters, no trailing-slash normalization: two paths match only when
/// they are byte-for-byte identical.
#[derive(Debug, Clone)]
pub struct Route<V> {
    pub pattern: String,
    pub view: V,
}

/// Ordered view registry. Insertion order is matching priority.
#[derive(Debug)]
pub struct RouteTable<V> {
    routes: Vec<Route<V>>,
}

impl<V> RouteTable<V> {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Append a route to the table.
    ///
    /// Duplicate patterns are permitted but shadowed: the first registration
    /// wins at resolution time. A duplicate is almost certainly a mistake,
    /// so it gets a diagnostic rather than silence, but it is not an error.
    pub fn register(&mut self, pattern: impl Into<String>, view: V) {
        let pattern = pattern.into();
        if self.routes.iter().any(|r| r.pattern == pattern) {
            warn!("Duplicate route pattern {pattern:?}: the earlier registration shadows this one");
        }
        self.routes.push(Route { pattern, view });
    }

    /// Exact-match lookup in registration order; the first equal pattern
    /// wins. `None` is the NotFound result - a normal value, never an error.
    /// What to do about it (blank view, error page, redirect) is the
    /// caller's decision.
    pub fn resolve(&self, path: &str) -> Option<&V> {
        self.routes
            .iter()
            .find(|route| route.pattern == path)
            .map(|route| &route.view)
    }

    /// Registered routes in priority order.
    pub fn routes(&self) -> &[Route<V>] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<V> Default for RouteTable<V> {
    fn default() -> Self {
        Self::new()
    }
}
