//! Core domain logic for OfficeTrack.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging};
pub use model::office::Office;
pub use model::project::Project;
pub use model::stage::Stage;
pub use model::store::Store;
pub use repo::store_repo::{JsonStoreRepository, StoreRepoError, StoreRepoResult, StoreRepository};
pub use service::tracker_service::{TrackerError, TrackerResult, TrackerService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
