//! Office domain model.

use crate::model::project::Project;
use serde::{Deserialize, Serialize};

/// Top-level grouping entity owning an ordered, append-only project list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Office {
    pub name: String,
    pub projects: Vec<Project>,
}

impl Office {
    /// Creates an office with no projects.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            projects: Vec::new(),
        }
    }

    /// Appends a project with an empty stage list.
    pub fn add_project(&mut self, name: impl Into<String>, description: impl Into<String>) {
        self.projects.push(Project::new(name, description));
    }

    /// Overwrites the office name. Blank-input cancellation is a shell
    /// concern; the model accepts whatever it is given.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}
