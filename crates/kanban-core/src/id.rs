//! Identifier generation.
//!
//! Columns and tasks draw from one monotonically increasing counter, so an id
//! is never reused within a board and never collides across entity kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of a column, task or board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(u64);

impl Id {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Id {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// Counter-based id source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdGenerator {
    /// `None` once `u64::MAX` has been handed out or observed
    next: Option<u64>,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self { next: Some(1) }
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed past every id already in use
    pub fn after<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = Id>,
    {
        let mut generator = Self::new();
        for id in ids {
            generator.observe(id);
        }
        generator
    }

    /// Make sure `id` is never handed out later
    pub fn observe(&mut self, id: Id) {
        if let Some(next) = self.next {
            if id.0 >= next {
                self.next = id.0.checked_add(1);
            }
        }
    }

    /// Next unused id, or `None` when the id space is used up
    pub fn next_id(&mut self) -> Option<Id> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(Id(id))
    }
}
