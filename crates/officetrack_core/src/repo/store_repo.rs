//! Store repository contract and JSON file implementation.
//!
//! # Responsibility
//! - Persist the full office hierarchy as one JSON document.
//! - Rehydrate the store from disk at process start.
//!
//! # Invariants
//! - A missing file is the defined empty starting state, not an error.
//! - Corrupt or unreadable data surfaces as an error instead of being
//!   masked; persistence must never lose data silently.
//! - Save overwrites the whole document in place.

use crate::model::store::Store;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

/// Result type used by store repository operations.
pub type StoreRepoResult<T> = Result<T, StoreRepoError>;

/// Errors from store persistence operations.
#[derive(Debug)]
pub enum StoreRepoError {
    /// Reading or writing the document file failed.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The persisted document is not valid store JSON.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The in-memory store could not be serialized.
    Serialize(serde_json::Error),
}

impl Display for StoreRepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "store file access failed at `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid store document at `{}`: {source}", path.display())
            }
            Self::Serialize(source) => write!(f, "store serialization failed: {source}"),
        }
    }
}

impl Error for StoreRepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Serialize(source) => Some(source),
        }
    }
}

/// Repository interface for whole-store persistence.
pub trait StoreRepository {
    /// Loads the full store, or the empty store when no document exists.
    fn load(&self) -> StoreRepoResult<Store>;
    /// Serializes the full store and overwrites the document.
    fn save(&self, store: &Store) -> StoreRepoResult<()>;
}

/// JSON-file-backed store repository.
///
/// The document is the top-level array of offices described by the
/// persisted-format contract; dates are `YYYY-MM-DD` strings and an
/// absent completion date is `null`.
pub struct JsonStoreRepository {
    path: PathBuf,
}

impl JsonStoreRepository {
    /// Creates a repository persisting to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the document path this repository reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreRepoError {
        StoreRepoError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl StoreRepository for JsonStoreRepository {
    fn load(&self) -> StoreRepoResult<Store> {
        if !self.path.exists() {
            return Ok(Store::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|err| self.io_error(err))?;
        serde_json::from_str(&content).map_err(|err| StoreRepoError::Parse {
            path: self.path.clone(),
            source: err,
        })
    }

    fn save(&self, store: &Store) -> StoreRepoResult<()> {
        let content = serde_json::to_string_pretty(store).map_err(StoreRepoError::Serialize)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
            }
        }

        fs::write(&self.path, content).map_err(|err| self.io_error(err))
    }
}
