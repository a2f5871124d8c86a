//! SQLite implementation of `PersonStore`
//!
//! One row per Person; `parents` and `children` are JSON arrays of ids so
//! each row mirrors the document shape the graph operations work with.

use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};
use kinship_core::errors::KinshipError;
use kinship_core::{Person, PersonId, PersonRef, PersonStore};
use rusqlite::{Connection, OptionalExtension, Row};

use crate::db;
use crate::errors::{from_rusqlite, is_unique_violation, Result};
use crate::migrations::apply_migrations;

const SELECT_PERSON: &str =
    "SELECT id, name, parents, children, created_at, updated_at FROM persons";

/// SQLite-backed person store
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) a database file and bring its schema up to date
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_connection(db::open(path)?)
    }

    /// Open a private in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(db::open_in_memory()?)
    }

    /// Wrap an existing connection, applying pending migrations
    pub fn from_connection(mut conn: Connection) -> Result<Self> {
        apply_migrations(&mut conn)?;
        Ok(Self { conn })
    }

    /// Borrow the underlying connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Abandon the open transaction, if SQLite has not already done so
    fn rollback(&self) {
        if self.conn.is_autocommit() {
            return;
        }
        if let Err(rollback_err) = self.conn.execute_batch("ROLLBACK") {
            tracing::warn!(error = %rollback_err, "rollback failed");
        }
    }

    fn query_one(&self, filter: &str, value: &str) -> Result<Option<Person>> {
        let sql = format!("{} WHERE {} = ?1", SELECT_PERSON, filter);
        let mut stmt = self.conn.prepare_cached(&sql).map_err(from_rusqlite)?;
        let row = stmt
            .query_row([value], PersonRow::from_row)
            .optional()
            .map_err(from_rusqlite)?;
        row.map(PersonRow::into_person).transpose()
    }
}

/// Raw column values of one `persons` row
struct PersonRow {
    id: String,
    name: String,
    parents: String,
    children: String,
    created_at: i64,
    updated_at: i64,
}

impl PersonRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            parents: row.get(2)?,
            children: row.get(3)?,
            created_at: row.get(4)?,
            updated_at: row.get(5)?,
        })
    }

    fn into_person(self) -> Result<Person> {
        let mut person = Person::new(PersonId::from_string(self.id), self.name);
        person.parents = serde_json::from_str(&self.parents)?;
        person.children = serde_json::from_str(&self.children)?;
        person.created_at = from_millis(self.created_at)?;
        person.updated_at = from_millis(self.updated_at)?;
        Ok(person)
    }
}

fn from_millis(millis: i64) -> Result<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or_else(|| KinshipError::Serialization {
            message: format!("timestamp {} is out of range", millis),
        })
}

impl PersonStore for SqliteStore {
    fn find_by_name(&self, name: &str) -> Result<Option<Person>> {
        self.query_one("name", name)
    }

    fn find_by_id(&self, id: &PersonId) -> Result<Option<Person>> {
        self.query_one("id", id.as_str())
    }

    fn list_refs(&self) -> Result<Vec<PersonRef>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT id, name FROM persons ORDER BY rowid")
            .map_err(from_rusqlite)?;
        let refs = stmt
            .query_map([], |row| {
                Ok(PersonRef {
                    id: PersonId::from_string(row.get(0)?),
                    name: row.get(1)?,
                })
            })
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(refs)
    }

    fn list_people(&self) -> Result<Vec<Person>> {
        let sql = format!("{} ORDER BY rowid", SELECT_PERSON);
        let mut stmt = self.conn.prepare_cached(&sql).map_err(from_rusqlite)?;
        let rows = stmt
            .query_map([], PersonRow::from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        rows.into_iter().map(PersonRow::into_person).collect()
    }

    fn populate(&self, ids: &[PersonId]) -> Result<Vec<PersonRef>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids_json = serde_json::to_string(ids)?;
        let mut stmt = self
            .conn
            .prepare_cached(
                "SELECT p.id, p.name FROM json_each(?1) AS j
                 JOIN persons AS p ON p.id = j.value
                 ORDER BY j.key",
            )
            .map_err(from_rusqlite)?;
        let refs = stmt
            .query_map([ids_json], |row| {
                Ok(PersonRef {
                    id: PersonId::from_string(row.get(0)?),
                    name: row.get(1)?,
                })
            })
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(refs)
    }

    fn insert(&mut self, name: &str) -> Result<Person> {
        let person = Person::new(PersonId::generate(), name.to_string());

        self.conn
            .execute(
                "INSERT INTO persons (id, name, parents, children, created_at, updated_at)
                 VALUES (?1, ?2, '[]', '[]', ?3, ?4)",
                rusqlite::params![
                    person.id.as_str(),
                    person.name,
                    person.created_at.timestamp_millis(),
                    person.updated_at.timestamp_millis(),
                ],
            )
            .map_err(|e| {
                if is_unique_violation(&e) {
                    KinshipError::DuplicateName {
                        name: name.to_string(),
                    }
                } else {
                    from_rusqlite(e)
                }
            })?;

        Ok(person)
    }

    fn save(&mut self, person: &Person) -> Result<()> {
        let parents = serde_json::to_string(&person.parents)?;
        let children = serde_json::to_string(&person.children)?;

        let changed = self
            .conn
            .execute(
                "UPDATE persons
                 SET name = ?2, parents = ?3, children = ?4, updated_at = ?5
                 WHERE id = ?1",
                rusqlite::params![
                    person.id.as_str(),
                    person.name,
                    parents,
                    children,
                    person.updated_at.timestamp_millis(),
                ],
            )
            .map_err(|e| {
                if is_unique_violation(&e) {
                    KinshipError::DuplicateName {
                        name: person.name.clone(),
                    }
                } else {
                    from_rusqlite(e)
                }
            })?;

        if changed == 0 {
            return Err(KinshipError::storage(
                "save",
                format!("no document with id {}", person.id),
            ));
        }

        Ok(())
    }

    fn delete(&mut self, id: &PersonId) -> Result<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM persons WHERE id = ?1", [id.as_str()])
            .map_err(from_rusqlite)?;
        Ok(changed > 0)
    }

    fn atomically<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        // Already inside a unit of work: join it
        if !self.conn.is_autocommit() {
            return f(self);
        }

        self.conn
            .execute_batch("BEGIN IMMEDIATE")
            .map_err(from_rusqlite)?;

        match f(self) {
            Ok(value) => {
                if let Err(commit_err) = self.conn.execute_batch("COMMIT") {
                    self.rollback();
                    return Err(from_rusqlite(commit_err));
                }
                Ok(value)
            }
            Err(err) => {
                self.rollback();
                Err(err)
            }
        }
    }
}
