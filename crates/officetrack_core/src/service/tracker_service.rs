//! Tracking use-case service.
//!
//! # Responsibility
//! - Own the store for the running session and validate index input.
//! - Persist the full store after every successful mutation.
//!
//! # Invariants
//! - The store is loaded exactly once, at service construction.
//! - No mutating operation returns success unless the document was saved.
//! - Office and project indices are validated here; the stage index keeps
//!   the model's silent bounds guard.

use crate::model::office::Office;
use crate::model::project::Project;
use crate::model::store::Store;
use crate::repo::store_repo::{StoreRepoError, StoreRepository};
use chrono::NaiveDate;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type used by tracking service operations.
pub type TrackerResult<T> = Result<T, TrackerError>;

/// Errors from tracking service operations.
#[derive(Debug)]
pub enum TrackerError {
    /// Office index is outside the current office list.
    OfficeIndex(usize),
    /// Project index is outside the addressed office's project list.
    ProjectIndex(usize),
    /// Persistence-level failure.
    Repo(StoreRepoError),
}

impl Display for TrackerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OfficeIndex(index) => write!(f, "no office at position {index}"),
            Self::ProjectIndex(index) => write!(f, "no project at position {index}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TrackerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreRepoError> for TrackerError {
    fn from(value: StoreRepoError) -> Self {
        Self::Repo(value)
    }
}

/// Use-case facade over the store and its repository.
pub struct TrackerService<R: StoreRepository> {
    store: Store,
    repo: R,
}

impl<R: StoreRepository> TrackerService<R> {
    /// Loads the persisted store and wraps it with the repository.
    ///
    /// Runs the one startup load; a missing document yields an empty store.
    pub fn load(repo: R) -> TrackerResult<Self> {
        let store = repo.load()?;
        info!(
            "event=store_loaded module=service status=ok offices={}",
            store.offices.len()
        );
        Ok(Self { store, repo })
    }

    /// Returns every office in insertion order.
    pub fn offices(&self) -> &[Office] {
        &self.store.offices
    }

    /// Returns the office at `index`.
    pub fn office(&self, index: usize) -> TrackerResult<&Office> {
        self.store.office(index).ok_or(TrackerError::OfficeIndex(index))
    }

    /// Appends a new office and returns its position.
    pub fn create_office(&mut self, name: impl Into<String>) -> TrackerResult<usize> {
        let index = self.store.add_office(name);
        self.persist("office_created")?;
        Ok(index)
    }

    /// Overwrites the name of the office at `index`.
    pub fn rename_office(&mut self, index: usize, name: impl Into<String>) -> TrackerResult<()> {
        self.office_mut(index)?.rename(name);
        self.persist("office_renamed")
    }

    /// Appends a project to the office at `office`.
    pub fn add_project(
        &mut self,
        office: usize,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> TrackerResult<()> {
        self.office_mut(office)?.add_project(name, description);
        self.persist("project_added")
    }

    /// Edits name/description of one project; empty input keeps a field.
    pub fn edit_project(
        &mut self,
        office: usize,
        project: usize,
        name: &str,
        description: &str,
    ) -> TrackerResult<()> {
        self.project_mut(office, project)?.apply_edit(name, description);
        self.persist("project_edited")
    }

    /// Appends a stage to one project with no completion date.
    pub fn add_stage(
        &mut self,
        office: usize,
        project: usize,
        name: impl Into<String>,
        planned_date: NaiveDate,
    ) -> TrackerResult<()> {
        self.project_mut(office, project)?.add_stage(name, planned_date);
        self.persist("stage_added")
    }

    /// Records a completion date on one stage.
    ///
    /// An out-of-range `stage` index is absorbed by the model guard and
    /// still counts as a successful (empty) operation.
    pub fn set_actual_date(
        &mut self,
        office: usize,
        project: usize,
        stage: usize,
        actual_date: NaiveDate,
    ) -> TrackerResult<()> {
        self.project_mut(office, project)?.set_actual_date(stage, actual_date);
        self.persist("stage_completed")
    }

    fn office_mut(&mut self, index: usize) -> TrackerResult<&mut Office> {
        self.store
            .offices
            .get_mut(index)
            .ok_or(TrackerError::OfficeIndex(index))
    }

    fn project_mut(&mut self, office: usize, project: usize) -> TrackerResult<&mut Project> {
        self.office_mut(office)?
            .projects
            .get_mut(project)
            .ok_or(TrackerError::ProjectIndex(project))
    }

    fn persist(&self, event: &'static str) -> TrackerResult<()> {
        if let Err(err) = self.repo.save(&self.store) {
            error!("event={event} module=service status=error reason=save_failed detail={err}");
            return Err(err.into());
        }
        info!(
            "event={event} module=service status=ok offices={}",
            self.store.offices.len()
        );
        Ok(())
    }
}
