//! Kinship Store - SQLite persistence for the person graph
//!
//! Provides:
//! - Connection management (`db`)
//! - An embedded, checksummed migrations framework
//! - `SqliteStore`, a `PersonStore` keeping one row per Person document

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use errors::Result;
pub use repo::SqliteStore;
