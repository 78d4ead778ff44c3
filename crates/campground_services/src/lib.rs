//! # Campground Services
//!
//! This crate provides the campground data model, the field validator and the
//! persistence boundary for campground records.

/// Types shared by the validator and the stores.
pub mod types;
pub use types::*;

/// Field rules applied before any write reaches a store.
pub mod validation;
pub use validation::{validate_changes, validate_new};

/// The `CampgroundStore` trait implemented by every backend.
pub mod store;
pub use store::CampgroundStore;

/// PostgreSQL-backed campground store.
mod service;
pub use service::PgCampgroundStore;

/// In-memory campground store used for tests and isolated instances.
pub mod memory;
pub use memory::InMemoryCampgroundStore;
