// Integration tests for the migration runner

use rusqlite::Connection;

#[test]
fn test_migrations_create_persons_table() {
    let mut conn = Connection::open_in_memory().unwrap();
    kinship_store::migrations::apply_migrations(&mut conn).unwrap();

    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'persons'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn test_migrations_are_recorded_once() {
    let mut conn = Connection::open_in_memory().unwrap();
    kinship_store::migrations::apply_migrations(&mut conn).unwrap();
    kinship_store::migrations::apply_migrations(&mut conn).unwrap();

    let applied = kinship_store::migrations::applied_migrations(&conn).unwrap();
    assert_eq!(applied, vec!["001_initial_schema".to_string()]);
}

#[test]
fn test_edited_migration_is_detected() {
    let mut conn = Connection::open_in_memory().unwrap();
    kinship_store::migrations::apply_migrations(&mut conn).unwrap();
    conn.execute(
        "UPDATE schema_version SET checksum = 'tampered' WHERE migration_id = '001_initial_schema'",
        [],
    )
    .unwrap();

    let err = kinship_store::migrations::apply_migrations(&mut conn).unwrap_err();
    assert!(err.to_string().contains("Checksum mismatch"));
}
