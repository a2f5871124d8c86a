//! Repository layer persisting Person documents to SQLite

pub mod sqlite_store;

pub use sqlite_store::SqliteStore;
