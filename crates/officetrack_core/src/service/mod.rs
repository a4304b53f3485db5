//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate model mutation and repository persistence into one API.
//! - Keep UI layers decoupled from storage details.

pub mod tracker_service;
