//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the whole-document persistence contract for the store.
//! - Isolate file and JSON details from service orchestration.
//!
//! # Invariants
//! - Load and save always operate on the entire store; there are no
//!   incremental or partial writes.

pub mod store_repo;
