//! Kinship Engine - Orchestration layer
//!
//! Provides `PersonGraphService`, which owns an injected `PersonStore` and
//! exposes the person graph operations with boundary logging.

pub mod service;

pub use service::PersonGraphService;
