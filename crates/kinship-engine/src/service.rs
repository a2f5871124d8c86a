//! Person graph service with boundary logging.
//!
//! ## Logging Ownership
//!
//! The engine layer owns lifecycle logging for every operation:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure (client errors at `warn`, the rest at `error`)
//!
//! Lower layers (store, core) use only `tracing::debug!()` for internal details.
//!
//! ## Concurrency
//!
//! Mutating operations take `&mut self`. Share one service behind a mutex to
//! serialize relationship updates within a process; the SQLite store adds a
//! write transaction per operation for writers in other processes.

use std::path::Path;
use std::time::Instant;

use kinship_core::errors::{ExError, ExResult, KinshipError};
use kinship_core::ops::person_ops;
use kinship_core::rules::invariants::{self, Violation};
use kinship_core::{log_op_end, log_op_error, log_op_start};
use kinship_core::{Person, PersonRef, PersonStore, PersonView};
use kinship_store::SqliteStore;

/// Creates, links, queries and deletes Person nodes over an injected store
pub struct PersonGraphService<S> {
    store: S,
}

impl<S: PersonStore> PersonGraphService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Add a person, creating and linking the named parents and children
    ///
    /// ## Errors
    ///
    /// - `InvalidInput`: blank name, self relation, or a name that is both
    ///   parent and child
    /// - `Persistence`: store failure (nothing is written)
    pub fn add_person(
        &mut self,
        name: &str,
        parent_names: &[String],
        child_names: &[String],
    ) -> ExResult<Person> {
        log_op_start!(
            "person_add",
            person_name = name,
            parent_count = parent_names.len(),
            child_count = child_names.len()
        );
        let start = Instant::now();

        let person = person_ops::add_person(&mut self.store, name, parent_names, child_names)
            .map_err(|e| fail("person_add", e, start))?;

        log_op_end!(
            "person_add",
            duration_ms = start.elapsed().as_millis() as u64,
            person_id = person.id.as_str()
        );

        Ok(person)
    }

    /// Find a person by name with parents and children resolved
    ///
    /// `Ok(None)` when nobody has that name.
    ///
    /// ## Errors
    ///
    /// - `Persistence`: store failure
    pub fn find_person(&self, name: &str) -> ExResult<Option<PersonView>> {
        log_op_start!("person_find", person_name = name);
        let start = Instant::now();

        let view = person_ops::find_person(&self.store, name)
            .map_err(|e| fail("person_find", e, start))?;

        log_op_end!(
            "person_find",
            duration_ms = start.elapsed().as_millis() as u64,
            found = view.is_some()
        );

        Ok(view)
    }

    /// Delete a person and remove them from every relative's lists
    ///
    /// ## Errors
    ///
    /// - `NotFound`: nobody has that name
    /// - `Persistence`: store failure (the delete is rolled back)
    pub fn delete_person(&mut self, name: &str) -> ExResult<Person> {
        log_op_start!("person_delete", person_name = name);
        let start = Instant::now();

        let person = person_ops::delete_person(&mut self.store, name)
            .map_err(|e| fail("person_delete", e, start))?;

        log_op_end!(
            "person_delete",
            duration_ms = start.elapsed().as_millis() as u64,
            person_id = person.id.as_str(),
            parent_count = person.parents.len(),
            child_count = person.children.len()
        );

        Ok(person)
    }

    /// List every person's id and name
    ///
    /// ## Errors
    ///
    /// - `Persistence`: store failure
    pub fn list_all(&self) -> ExResult<Vec<PersonRef>> {
        log_op_start!("person_list");
        let start = Instant::now();

        let people =
            person_ops::list_people(&self.store).map_err(|e| fail("person_list", e, start))?;

        log_op_end!(
            "person_list",
            duration_ms = start.elapsed().as_millis() as u64,
            count = people.len()
        );

        Ok(people)
    }

    /// Report every breach of the edge symmetry invariants
    ///
    /// ## Errors
    ///
    /// - `Persistence`: store failure
    pub fn check_integrity(&self) -> ExResult<Vec<Violation>> {
        log_op_start!("graph_check");
        let start = Instant::now();

        let violations = invariants::check_integrity(&self.store)
            .map_err(|e| fail("graph_check", e, start))?;

        if !violations.is_empty() {
            tracing::warn!(
                count = violations.len(),
                "person graph has integrity violations"
            );
        }

        log_op_end!(
            "graph_check",
            duration_ms = start.elapsed().as_millis() as u64,
            violations = violations.len()
        );

        Ok(violations)
    }
}

impl PersonGraphService<SqliteStore> {
    /// Open a service over a SQLite file, creating it if needed
    ///
    /// ## Errors
    ///
    /// - `Persistence`: the file cannot be opened or migrated
    pub fn open_sqlite<P: AsRef<Path>>(path: P) -> ExResult<Self> {
        let store = SqliteStore::open(path).map_err(|e| ExError::from(e).with_op("store_open"))?;
        Ok(Self::new(store))
    }
}

/// Log a failed operation and convert its error to the structured form
fn fail(op: &'static str, err: KinshipError, start: Instant) -> ExError {
    let ex_err = ExError::from(err);
    log_op_error!(
        op,
        ex_err.clone(),
        duration_ms = start.elapsed().as_millis() as u64
    );
    match ex_err.op() {
        Some(_) => ex_err,
        None => ex_err.with_op(op),
    }
}
