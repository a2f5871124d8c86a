// Integration tests: person graph operations over the SQLite store

use kinship_core::ops::person_ops;
use kinship_core::rules::invariants::check_integrity;
use kinship_core::{KinshipError, PersonStore};
use kinship_store::SqliteStore;
use tempfile::TempDir;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn setup_store() -> SqliteStore {
    SqliteStore::open_in_memory().unwrap()
}

#[test]
fn test_add_and_find_over_sqlite() {
    let mut store = setup_store();
    person_ops::add_person(&mut store, "Alice", &[], &[]).unwrap();
    person_ops::add_person(&mut store, "Bob", &names(&["Alice"]), &[]).unwrap();
    person_ops::add_person(&mut store, "Bob", &names(&["Alice"]), &[]).unwrap();

    let alice = person_ops::find_person(&store, "Alice").unwrap().unwrap();
    let bob = person_ops::find_person(&store, "Bob").unwrap().unwrap();

    assert_eq!(alice.child_names(), vec!["Bob"]);
    assert_eq!(bob.parent_names(), vec!["Alice"]);
    assert!(check_integrity(&store).unwrap().is_empty());
}

#[test]
fn test_delete_over_sqlite() {
    let mut store = setup_store();
    person_ops::add_person(&mut store, "Bob", &names(&["Alice"]), &names(&["Dan"])).unwrap();

    person_ops::delete_person(&mut store, "Bob").unwrap();

    assert!(person_ops::find_person(&store, "Bob").unwrap().is_none());
    let alice = person_ops::find_person(&store, "Alice").unwrap().unwrap();
    let dan = person_ops::find_person(&store, "Dan").unwrap().unwrap();
    assert!(alice.children.is_empty());
    assert!(dan.parents.is_empty());
    assert!(check_integrity(&store).unwrap().is_empty());
}

#[test]
fn test_duplicate_name_is_rejected() {
    let mut store = setup_store();
    store.insert("Alice").unwrap();

    let result = store.insert("Alice");

    assert!(matches!(result, Err(KinshipError::DuplicateName { .. })));
}

#[test]
fn test_list_refs_in_insertion_order() {
    let mut store = setup_store();
    for name in ["Zed", "Amy", "Max"] {
        store.insert(name).unwrap();
    }

    let listed: Vec<String> = store
        .list_refs()
        .unwrap()
        .into_iter()
        .map(|r| r.name)
        .collect();

    assert_eq!(listed, vec!["Zed", "Amy", "Max"]);
}

#[test]
fn test_populate_keeps_order_and_skips_missing() {
    let mut store = setup_store();
    let a = store.insert("A").unwrap();
    let b = store.insert("B").unwrap();
    let c = store.insert("C").unwrap();
    store.delete(&b.id).unwrap();

    let refs = store
        .populate(&[c.id.clone(), b.id.clone(), a.id.clone()])
        .unwrap();

    assert_eq!(refs, vec![c.to_ref(), a.to_ref()]);
}

#[test]
fn test_atomically_rolls_back_sql_writes() {
    let mut store = setup_store();
    store.insert("Alice").unwrap();

    let result: kinship_store::Result<()> = store.atomically(|s| {
        s.insert("Bob")?;
        let mut alice = s.find_by_name("Alice")?.unwrap();
        alice.name = "Alicia".to_string();
        s.save(&alice)?;
        Err(KinshipError::storage("test", "abort"))
    });

    assert!(result.is_err());
    assert!(store.find_by_name("Bob").unwrap().is_none());
    assert!(store.find_by_name("Alice").unwrap().is_some());
    assert!(store.connection().is_autocommit());
}

#[test]
fn test_nested_atomically_joins_outer_unit() {
    let mut store = setup_store();

    let result: kinship_store::Result<()> = store.atomically(|s| {
        s.atomically(|inner| inner.insert("Alice").map(|_| ()))?;
        Err(KinshipError::storage("test", "abort"))
    });

    assert!(result.is_err());
    assert!(store.find_by_name("Alice").unwrap().is_none());
}

#[test]
fn test_file_store_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("nested").join("store.db");

    {
        let mut store = SqliteStore::open(&db_path).unwrap();
        person_ops::add_person(&mut store, "Bob", &names(&["Alice"]), &[]).unwrap();
    }

    let store = SqliteStore::open(&db_path).unwrap();
    let bob = person_ops::find_person(&store, "Bob").unwrap().unwrap();
    assert_eq!(bob.parent_names(), vec!["Alice"]);
}
