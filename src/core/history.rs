//! # Navigable History
//!
//! The seam between the router and the hosting environment's back/forward
//! stack. In a browser this would be the history API; in the terminal host it
//! is [`MemoryHistory`]. The router only ever talks to the [`History`] trait,
//! so the core neither implements nor assumes a concrete storage.

/// The hosting environment's push/pop history primitive.
pub trait History {
    /// The entry the history currently points at.
    fn current(&self) -> &str;

    /// Record a new entry, discarding anything on the forward stack.
    fn push(&mut self, path: &str);

    /// Step back one entry, returning the new current entry.
    /// `None` (and no movement) at the boundary.
    fn back(&mut self) -> Option<String>;

    /// Step forward one entry, returning the new current entry.
    /// `None` (and no movement) at the boundary.
    fn forward(&mut self) -> Option<String>;
}

/// In-process history stack for the terminal host.
///
/// Same shape as a browser history: entries behind the current one, the
/// current one, entries ahead of it. A fresh `push` makes the entries ahead
/// unreachable, exactly like typing a new address after going back.
#[derive(Debug)]
pub struct MemoryHistory {
    past: Vec<String>,
    current: String,
    future: Vec<String>,
}

impl MemoryHistory {
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            past: Vec::new(),
            current: start.into(),
            future: Vec::new(),
        }
    }
}

impl History for MemoryHistory {
    fn current(&self) -> &str {
        &self.current
    }

    fn push(&mut self, path: &str) {
        self.past
            .push(std::mem::replace(&mut self.current, path.to_string()));
        self.future.clear();
    }

    fn back(&mut self) -> Option<String> {
        let previous = self.past.pop()?;
        self.future
            .push(std::mem::replace(&mut self.current, previous));
        Some(self.current.clone())
    }

    fn forward(&mut self) -> Option<String> {
        let next = self.future.pop()?;
        self.past
            .push(std::mem::replace(&mut self.current, next));
        Some(self.current.clone())
    }
}
