//! # Web Handlers for the Campground Listings Web Application
//!
//! This crate provides the page handlers, route table, error pages and form
//! plumbing for the campground listings site.

/// Handlers for campground pages
mod campground_handlers;
pub use campground_handlers::*;

/// Central mapping from failures to error pages
mod error_page;
pub use error_page::*;

/// Form body decoding
mod forms;
pub use forms::*;

/// Method override middleware for HTML forms
mod method_override;
pub use method_override::*;

/// Route table
mod routes;
pub use routes::*;

/// Embedded page templates
pub mod templates;
