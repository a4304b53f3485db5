//! Project domain model.
//!
//! # Responsibility
//! - Own the ordered stage list of one project.
//! - Enforce the append-only and bounds-guard rules for stage mutation.
//!
//! # Invariants
//! - Stages are append-only; insertion order is display order.
//! - An out-of-range stage index never mutates state and never errors.

use crate::model::stage::Stage;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Mid-level entity: a named piece of work tracked as ordered stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    /// Free text, may be empty.
    pub description: String,
    pub stages: Vec<Stage>,
}

impl Project {
    /// Creates a project with no stages.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            stages: Vec::new(),
        }
    }

    /// Appends a stage with no completion date. Duplicate names are allowed.
    pub fn add_stage(&mut self, name: impl Into<String>, planned_date: NaiveDate) {
        self.stages.push(Stage::new(name, planned_date));
    }

    /// Records the completion date on the stage at `index`.
    ///
    /// An out-of-range index leaves the stage list untouched; callers that
    /// want to report bad indices must bounds-check before calling.
    pub fn set_actual_date(&mut self, index: usize, actual_date: NaiveDate) {
        if let Some(stage) = self.stages.get_mut(index) {
            stage.complete(actual_date);
        }
    }

    /// Overwrites name and description from edit input.
    ///
    /// An empty replacement keeps the old value of that field, so a user
    /// can change one field without retyping the other.
    pub fn apply_edit(&mut self, name: &str, description: &str) {
        if !name.is_empty() {
            self.name = name.to_string();
        }
        if !description.is_empty() {
            self.description = description.to_string();
        }
    }
}
