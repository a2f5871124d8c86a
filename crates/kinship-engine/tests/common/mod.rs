#![allow(dead_code)]

use kinship_core::MemoryStore;
use kinship_engine::PersonGraphService;

pub fn memory_service() -> PersonGraphService<MemoryStore> {
    PersonGraphService::new(MemoryStore::new())
}

pub fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
