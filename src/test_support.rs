//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::history::MemoryHistory;
use crate::core::route::RouteTable;
use crate::core::router::Router;

/// The two-route table used throughout the unit tests: "/" shows "home",
/// "/about" shows "about". Views are plain labels - the core treats them as
/// opaque payloads either way.
pub fn test_table() -> RouteTable<&'static str> {
    let mut table = RouteTable::new();
    table.register("/", "home");
    table.register("/about", "about");
    table
}

/// A router over [`test_table`], mounted at "/".
pub fn test_router() -> Router<&'static str> {
    Router::new(test_table(), Box::new(MemoryHistory::new("/")))
}
