//! # Curriculum Common Library
//!
//! Shared code for the curriculum catalog service:
//! - Source file loading and flattening
//! - Course entry validation
//! - SQLite course store and tag queries
//! - The load cycle tying them together
//! - Configuration loading

pub mod config;
pub mod db;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod query;
pub mod validation;

pub use db::{Course, CourseStore, CourseSummary};
pub use error::{Error, Result};
pub use validation::{ValidationReport, Violation};
