//! Stage domain model.
//!
//! # Responsibility
//! - Define the milestone leaf record of the tracking hierarchy.
//! - Render the canonical single-line stage summary.
//!
//! # Invariants
//! - `planned_date` is always present; `actual_date` absent means the
//!   stage is not yet completed.
//! - No ordering is enforced between `actual_date` and `planned_date`;
//!   late and early completions are both recorded as-is.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Placeholder rendered for a stage that has no completion date yet.
const NOT_DONE_MARKER: &str = "---";

/// Milestone within a project: planned date plus optional completion date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    /// User-facing label. Not validated and not required to be unique.
    pub name: String,
    /// Calendar date the stage is expected to finish.
    pub planned_date: NaiveDate,
    /// Calendar date the stage actually finished. `None` until completion.
    pub actual_date: Option<NaiveDate>,
}

impl Stage {
    /// Creates a stage that has not been completed yet.
    pub fn new(name: impl Into<String>, planned_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            planned_date,
            actual_date: None,
        }
    }

    /// Records the completion date, overwriting any previous value.
    pub fn complete(&mut self, actual_date: NaiveDate) {
        self.actual_date = Some(actual_date);
    }

    /// Returns whether a completion date has been recorded.
    pub fn is_done(&self) -> bool {
        self.actual_date.is_some()
    }
}

impl Display for Stage {
    /// Renders `<name> | Planned: YYYY-MM-DD | Done: YYYY-MM-DD` with a
    /// `---` placeholder while the stage is incomplete.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} | Planned: {} | Done: ", self.name, self.planned_date)?;
        match self.actual_date {
            Some(date) => write!(f, "{date}"),
            None => write!(f, "{NOT_DONE_MARKER}"),
        }
    }
}
