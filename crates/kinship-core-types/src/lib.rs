//! Core types shared across Kinship facilities
//!
//! This crate provides foundational types used by both error handling
//! and logging facilities:
//!
//! - **Correlation types**: RequestId for tagging a single request
//! - **Schema constants**: Canonical event names

pub mod correlation;
pub mod schema;

pub use correlation::RequestId;
