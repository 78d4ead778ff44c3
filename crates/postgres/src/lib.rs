//! # Postgres
//!
//! This crate opens and prepares the PostgreSQL database that stores campground listings.

/// Connection pool construction and schema bootstrap.
pub mod database;
