pub mod memory_store;
pub mod person_ops;
pub mod store;

pub use memory_store::MemoryStore;
pub use store::PersonStore;
