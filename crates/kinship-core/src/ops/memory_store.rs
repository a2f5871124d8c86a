use crate::errors::{KinshipError, Result};
use crate::model::{Person, PersonId, PersonRef};
use crate::ops::store::PersonStore;

/// In-memory store for Person documents
///
/// Documents are kept in insertion order, which is the store's default
/// listing order. Not thread-safe; callers share it behind a lock.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    people: Vec<Person>,
}

impl MemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self { people: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Insert a prepared document as-is, bypassing name and id checks
    ///
    /// Used by tests to seed graphs that the operations would never produce.
    pub fn insert_raw(&mut self, person: Person) {
        self.people.push(person);
    }

    fn position(&self, id: &PersonId) -> Option<usize> {
        self.people.iter().position(|p| &p.id == id)
    }
}

impl PersonStore for MemoryStore {
    fn find_by_name(&self, name: &str) -> Result<Option<Person>> {
        Ok(self.people.iter().find(|p| p.name == name).cloned())
    }

    fn find_by_id(&self, id: &PersonId) -> Result<Option<Person>> {
        Ok(self.people.iter().find(|p| &p.id == id).cloned())
    }

    fn list_refs(&self) -> Result<Vec<PersonRef>> {
        Ok(self.people.iter().map(Person::to_ref).collect())
    }

    fn list_people(&self) -> Result<Vec<Person>> {
        Ok(self.people.clone())
    }

    fn insert(&mut self, name: &str) -> Result<Person> {
        if self.people.iter().any(|p| p.name == name) {
            return Err(KinshipError::DuplicateName {
                name: name.to_string(),
            });
        }
        let person = Person::new(PersonId::generate(), name.to_string());
        self.people.push(person.clone());
        Ok(person)
    }

    fn save(&mut self, person: &Person) -> Result<()> {
        let idx = self.position(&person.id).ok_or_else(|| {
            KinshipError::storage("save", format!("no document with id {}", person.id))
        })?;
        self.people[idx] = person.clone();
        Ok(())
    }

    fn delete(&mut self, id: &PersonId) -> Result<bool> {
        match self.position(id) {
            Some(idx) => {
                self.people.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn atomically<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        let snapshot = self.people.clone();
        let result = f(self);
        if result.is_err() {
            self.people = snapshot;
        }
        result
    }
}
