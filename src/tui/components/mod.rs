//! # TUI Components
//!
//! Two flavors, mirroring the rest of the interface:
//!
//! - Stateless components receive everything as props and just draw:
//!   [`NavBar`].
//! - Stateful components own local state and emit high-level events:
//!   [`GotoBox`].
//!
//! Pages are neither - they are plain `fn() -> Text` values (see [`pages`]).
//! The route table stores them opaquely and the shell wraps whatever they
//! produce in a `Paragraph`.

pub mod goto_box;
pub mod nav_bar;
pub mod pages;

pub use goto_box::{GotoBox, GotoEvent};
pub use nav_bar::NavBar;
pub use pages::Page;
