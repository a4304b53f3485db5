//! Root aggregate for one tracking session.
//!
//! # Responsibility
//! - Own the full office list loaded at startup and mutated by services.
//!
//! # Invariants
//! - There is no process-global store; the single instance is owned by the
//!   service layer and threaded through callers explicitly.
//! - Offices are append-only and keep insertion order.

use crate::model::office::Office;
use serde::{Deserialize, Serialize};

/// In-memory collection of every office in the persisted document.
///
/// Serializes transparently as the top-level JSON array of offices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Store {
    pub offices: Vec<Office>,
}

impl Store {
    /// Creates the empty store used when no persisted file exists yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new office and returns its position.
    pub fn add_office(&mut self, name: impl Into<String>) -> usize {
        self.offices.push(Office::new(name));
        self.offices.len() - 1
    }

    /// Returns the office at `index`, if any.
    pub fn office(&self, index: usize) -> Option<&Office> {
        self.offices.get(index)
    }

    /// Returns whether no office has been created yet.
    pub fn is_empty(&self) -> bool {
        self.offices.is_empty()
    }
}
