//! Error handling for kinship-store
//!
//! Builds kinship-core `KinshipError` values from SQLite and IO failures

use kinship_core::errors::KinshipError;
use rusqlite::ErrorCode;

/// Result type alias using KinshipError
pub type Result<T> = std::result::Result<T, KinshipError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> KinshipError {
    KinshipError::storage(
        "migration",
        format!("Migration {} failed: {}", migration_id, reason),
    )
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> KinshipError {
    KinshipError::storage(
        "migration_checksum",
        format!(
            "Checksum mismatch for migration {}: recorded {}, embedded {}",
            migration_id, expected, actual
        ),
    )
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> KinshipError {
    KinshipError::storage("sqlite", err.to_string())
}

/// True if the error is a UNIQUE index failure
///
/// Other constraint failures (NOT NULL, PRIMARY KEY, CHECK) are not
/// duplicate names and stay ordinary storage errors.
pub fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == ErrorCode::ConstraintViolation
                && e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> KinshipError {
    KinshipError::storage(operation, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    fn failing_insert(sql: &str) -> rusqlite::Error {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE t (id TEXT PRIMARY KEY, name TEXT NOT NULL UNIQUE);
             INSERT INTO t (id, name) VALUES ('1', 'Alice');",
        )
        .unwrap();
        conn.execute(sql, []).unwrap_err()
    }

    #[test]
    fn test_unique_index_failure_is_detected() {
        let err = failing_insert("INSERT INTO t (id, name) VALUES ('2', 'Alice')");
        assert!(is_unique_violation(&err));
    }

    #[test]
    fn test_other_constraint_failures_are_not_unique_violations() {
        let not_null = failing_insert("INSERT INTO t (id, name) VALUES ('2', NULL)");
        assert!(!is_unique_violation(&not_null));

        let primary_key = failing_insert("INSERT INTO t (id, name) VALUES ('1', 'Bob')");
        assert!(!is_unique_violation(&primary_key));
    }
}
