//! Store gateway: schema setup, course persistence and tag queries

pub mod courses;
pub mod init;
pub mod models;

pub use courses::*;
pub use init::*;
pub use models::*;
