use kinship_core::errors::{KinshipError, Result};
use kinship_core::{MemoryStore, Person, PersonId, PersonRef, PersonStore};

/// Create a new empty store for testing
#[allow(dead_code)]
pub fn new_store() -> MemoryStore {
    MemoryStore::new()
}

/// Owned name list from string literals
#[allow(dead_code)]
pub fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Fetch a person by name, panicking if absent
#[allow(dead_code)]
pub fn get(store: &impl PersonStore, name: &str) -> Person {
    store
        .find_by_name(name)
        .unwrap()
        .unwrap_or_else(|| panic!("{} should exist", name))
}

/// Store wrapper that fails once a given number of saves have succeeded
///
/// Lets tests break a multi-document operation part-way through.
#[allow(dead_code)]
#[derive(Debug, Clone, Default)]
pub struct FlakyStore {
    pub inner: MemoryStore,
    pub saves_before_failure: Option<usize>,
    pub saves: usize,
}

#[allow(dead_code)]
impl FlakyStore {
    pub fn new(inner: MemoryStore) -> Self {
        Self {
            inner,
            saves_before_failure: None,
            saves: 0,
        }
    }

    pub fn fail_after_saves(&mut self, n: usize) {
        self.saves_before_failure = Some(n);
        self.saves = 0;
    }
}

impl PersonStore for FlakyStore {
    fn find_by_name(&self, name: &str) -> Result<Option<Person>> {
        self.inner.find_by_name(name)
    }

    fn find_by_id(&self, id: &PersonId) -> Result<Option<Person>> {
        self.inner.find_by_id(id)
    }

    fn list_refs(&self) -> Result<Vec<PersonRef>> {
        self.inner.list_refs()
    }

    fn list_people(&self) -> Result<Vec<Person>> {
        self.inner.list_people()
    }

    fn insert(&mut self, name: &str) -> Result<Person> {
        self.inner.insert(name)
    }

    fn save(&mut self, person: &Person) -> Result<()> {
        if let Some(limit) = self.saves_before_failure {
            if self.saves >= limit {
                return Err(KinshipError::storage("save", "injected failure"));
            }
        }
        self.saves += 1;
        self.inner.save(person)
    }

    fn delete(&mut self, id: &PersonId) -> Result<bool> {
        self.inner.delete(id)
    }

    fn atomically<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        let snapshot = self.inner.clone();
        let result = f(self);
        if result.is_err() {
            self.inner = snapshot;
        }
        result
    }
}
