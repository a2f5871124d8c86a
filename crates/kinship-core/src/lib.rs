//! Kinship Core - person graph kernel
//!
//! This crate provides the foundational data structures and operations for
//! Kinship, including:
//! - The `Person` model with mirrored parent/child id lists
//! - The `PersonStore` contract and an in-memory implementation
//! - Relationship maintenance (add, find, delete, list) that keeps both
//!   sides of every edge in step
//! - Input validation and graph integrity checks
//! - The structured error and logging facilities shared by every crate

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod rules;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, ExResult, KinshipError, Result};
pub use model::{Person, PersonId, PersonRef, PersonView};
pub use ops::{MemoryStore, PersonStore};
pub use rules::invariants::Violation;
