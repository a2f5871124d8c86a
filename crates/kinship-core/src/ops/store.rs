use crate::errors::Result;
use crate::model::{Person, PersonId, PersonRef};

/// Document store contract consumed by the person graph operations
///
/// Each Person is one document holding its own ordered `parents` and
/// `children` id lists. The store knows nothing about edge symmetry; keeping
/// both sides in step is the job of `person_ops`.
pub trait PersonStore {
    /// Find a Person by exact name
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the underlying store fails.
    fn find_by_name(&self, name: &str) -> Result<Option<Person>>;

    /// Find a Person by id
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the underlying store fails.
    fn find_by_id(&self, id: &PersonId) -> Result<Option<Person>>;

    /// Every Person as an `{id, name}` projection, in store default order
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the underlying store fails.
    fn list_refs(&self) -> Result<Vec<PersonRef>>;

    /// Every Person as a full document, in store default order
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the underlying store fails.
    fn list_people(&self) -> Result<Vec<Person>>;

    /// Resolve ids to `{id, name}` projections, keeping the input order
    ///
    /// Ids that no longer resolve are skipped.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the underlying store fails.
    fn populate(&self, ids: &[PersonId]) -> Result<Vec<PersonRef>> {
        let mut refs = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(person) = self.find_by_id(id)? {
                refs.push(person.to_ref());
            }
        }
        Ok(refs)
    }

    /// Create a Person with no relatives; the store assigns the id
    ///
    /// # Errors
    ///
    /// Returns `DuplicateName` if the name is taken, `Storage` on failure.
    fn insert(&mut self, name: &str) -> Result<Person>;

    /// Overwrite an existing Person document
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the document does not exist or the write fails.
    fn save(&mut self, person: &Person) -> Result<()>;

    /// Delete a Person document; returns `false` if it did not exist
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the underlying store fails.
    fn delete(&mut self, id: &PersonId) -> Result<bool>;

    /// Run `f` as one unit of work
    ///
    /// If `f` fails, every write it made is rolled back before the error is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns the error from `f`, or `Storage` if the unit cannot be opened
    /// or committed.
    fn atomically<T, F>(&mut self, f: F) -> Result<T>
    where
        Self: Sized,
        F: FnOnce(&mut Self) -> Result<T>;
}
