mod common;

use common::{memory_service, names};
use kinship_core::{ExErrorKind, MemoryStore, Person, PersonId, Violation};
use kinship_engine::PersonGraphService;
use tempfile::TempDir;

#[test]
fn test_add_then_find_resolves_names() {
    let mut service = memory_service();

    service
        .add_person("Bob", &names(&["Alice"]), &names(&["Dan"]))
        .unwrap();

    let bob = service.find_person("Bob").unwrap().unwrap();
    assert_eq!(bob.parent_names(), vec!["Alice"]);
    assert_eq!(bob.child_names(), vec!["Dan"]);

    let alice = service.find_person("Alice").unwrap().unwrap();
    assert_eq!(alice.child_names(), vec!["Bob"]);
}

#[test]
fn test_repeated_add_keeps_single_edge() {
    let mut service = memory_service();
    service.add_person("Alice", &[], &[]).unwrap();

    let first = service.add_person("Bob", &names(&["Alice"]), &[]).unwrap();
    let second = service.add_person("Bob", &names(&["Alice"]), &[]).unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.parents.len(), 1);
    let alice = service.find_person("Alice").unwrap().unwrap();
    assert_eq!(alice.children.len(), 1);
    assert!(service.check_integrity().unwrap().is_empty());
}

#[test]
fn test_blank_name_is_invalid_input() {
    let mut service = memory_service();

    let err = service.add_person("  ", &names(&["Alice"]), &[]).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    assert_eq!(err.op(), Some("person_add"));
    assert!(service.list_all().unwrap().is_empty());
}

#[test]
fn test_delete_missing_is_not_found() {
    let mut service = memory_service();

    let err = service.delete_person("Ghost").unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert_eq!(err.entity_id(), Some("Ghost"));
    assert_eq!(err.op(), Some("person_delete"));
}

#[test]
fn test_delete_strips_relatives() {
    let mut service = memory_service();
    service
        .add_person("Bob", &names(&["Alice"]), &names(&["Dan"]))
        .unwrap();

    let deleted = service.delete_person("Bob").unwrap();
    assert_eq!(deleted.name, "Bob");

    assert!(service.find_person("Bob").unwrap().is_none());
    let alice = service.find_person("Alice").unwrap().unwrap();
    let dan = service.find_person("Dan").unwrap().unwrap();
    assert!(alice.children.is_empty());
    assert!(dan.parents.is_empty());
    assert!(service.check_integrity().unwrap().is_empty());
}

#[test]
fn test_list_all_in_insertion_order() {
    let mut service = memory_service();
    service
        .add_person("Bob", &names(&["Alice"]), &names(&["Dan"]))
        .unwrap();

    let listed: Vec<String> = service
        .list_all()
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();

    assert_eq!(listed, vec!["Bob", "Alice", "Dan"]);
}

#[test]
fn test_sqlite_service_persists_across_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("kin.db");

    {
        let mut service = PersonGraphService::open_sqlite(&path).unwrap();
        service.add_person("Bob", &names(&["Alice"]), &[]).unwrap();
    }

    let mut service = PersonGraphService::open_sqlite(&path).unwrap();
    let bob = service.find_person("Bob").unwrap().unwrap();
    assert_eq!(bob.parent_names(), vec!["Alice"]);

    service.delete_person("Alice").unwrap();
    let bob = service.find_person("Bob").unwrap().unwrap();
    assert!(bob.parents.is_empty());
    assert!(service.check_integrity().unwrap().is_empty());
}

#[test]
fn test_sqlite_service_rejects_blank_relatives_only() {
    let dir = TempDir::new().unwrap();
    let mut service = PersonGraphService::open_sqlite(dir.path().join("kin.db")).unwrap();

    let person = service
        .add_person("Eve", &names(&["", "  "]), &names(&[""]))
        .unwrap();

    assert!(person.parents.is_empty());
    assert!(person.children.is_empty());
    assert_eq!(service.list_all().unwrap().len(), 1);
}

#[test]
fn test_check_integrity_reports_seeded_one_sided_edge() {
    let mut store = MemoryStore::new();
    let mut mum = Person::new(PersonId::generate(), "Mum".to_string());
    let kid = Person::new(PersonId::generate(), "Kid".to_string());
    mum.add_child(kid.id.clone());
    let (mum_id, kid_id) = (mum.id.clone(), kid.id.clone());
    store.insert_raw(mum);
    store.insert_raw(kid);
    let service = PersonGraphService::new(store);

    let violations = service.check_integrity().unwrap();

    assert_eq!(
        violations,
        vec![Violation::MissingParentLink {
            parent_id: mum_id,
            child_id: kid_id,
        }]
    );
}

#[test]
fn test_delete_skips_relatives_that_no_longer_exist() {
    let mut store = MemoryStore::new();
    let mut kid = Person::new(PersonId::generate(), "Kid".to_string());
    kid.add_parent(PersonId::from_string("long-gone".to_string()));
    store.insert_raw(kid);
    let mut service = PersonGraphService::new(store);

    let deleted = service.delete_person("Kid").unwrap();

    assert_eq!(deleted.parents.len(), 1);
    assert!(service.list_all().unwrap().is_empty());
    assert!(service.store().is_empty());
}
