//! Contact Viewer Library
//!
//! Loads a CSV of contact records once, from a URL or a local file, and
//! derives filtered views, per-field summaries and detail selections from it.
//! A failed load never aborts: a single placeholder record stands in and the
//! failure reason travels with it.

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod prelude;

// Re-export commonly used types for convenience
pub use errors::{AppError, Result};
