//! # Core Routing Logic
//!
//! Everything the shell decides lives here, free of UI types: the route
//! table, the matcher, the history seam and the router. The TUI adapter owns
//! rendering; any other host (tests drive it directly) could sit on the same
//! core.
//!
//! ## Modules
//!
//! - [`route`]: `RouteTable` — the ordered (pattern, view) registry and the
//!   exact-match resolver
//! - [`history`]: the hosting environment's back/forward stack, behind a
//!   trait
//! - [`router`]: `Router` — owns the Location and drives navigation
//! - [`config`]: settings with defaults → file → env → CLI resolution

pub mod config;
pub mod history;
pub mod route;
pub mod router;
