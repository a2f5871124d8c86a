use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::errors::Result;
use crate::model::{Person, PersonId};
use crate::ops::PersonStore;

/// A single breach of the person graph invariants
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// An edge list holds an id that resolves to no Person
    DanglingReference {
        person_id: PersonId,
        missing_id: PersonId,
    },
    /// `parent.children` has the child but `child.parents` lacks the parent
    MissingParentLink {
        parent_id: PersonId,
        child_id: PersonId,
    },
    /// `child.parents` has the parent but `parent.children` lacks the child
    MissingChildLink {
        parent_id: PersonId,
        child_id: PersonId,
    },
    /// The same id appears more than once in one edge list
    DuplicateEntry {
        person_id: PersonId,
        repeated_id: PersonId,
    },
    /// A Person lists itself as a relative
    SelfReference { person_id: PersonId },
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::DanglingReference {
                person_id,
                missing_id,
            } => write!(f, "{} references missing person {}", person_id, missing_id),
            Violation::MissingParentLink {
                parent_id,
                child_id,
            } => write!(
                f,
                "{} lists child {} but the child does not list it as a parent",
                parent_id, child_id
            ),
            Violation::MissingChildLink {
                parent_id,
                child_id,
            } => write!(
                f,
                "{} lists parent {} but the parent does not list it as a child",
                child_id, parent_id
            ),
            Violation::DuplicateEntry {
                person_id,
                repeated_id,
            } => write!(f, "{} lists {} more than once", person_id, repeated_id),
            Violation::SelfReference { person_id } => {
                write!(f, "{} lists itself as a relative", person_id)
            }
        }
    }
}

/// Check every Person in the store against the graph invariants
///
/// An empty result means every edge is mirrored on both endpoints, no list
/// repeats an id, and no id is dangling.
///
/// # Errors
///
/// Returns `Storage` if the store cannot be read.
pub fn check_integrity<S: PersonStore>(store: &S) -> Result<Vec<Violation>> {
    let people = store.list_people()?;
    Ok(find_violations(&people))
}

/// Pure form of `check_integrity` over an already loaded set of documents
pub fn find_violations(people: &[Person]) -> Vec<Violation> {
    let by_id: HashMap<&PersonId, &Person> = people.iter().map(|p| (&p.id, p)).collect();
    let mut violations = Vec::new();

    for person in people {
        violations.extend(duplicates(person, &person.parents));
        violations.extend(duplicates(person, &person.children));

        if person.has_parent(&person.id) || person.has_child(&person.id) {
            violations.push(Violation::SelfReference {
                person_id: person.id.clone(),
            });
        }

        for child_id in &person.children {
            match by_id.get(child_id) {
                None => violations.push(Violation::DanglingReference {
                    person_id: person.id.clone(),
                    missing_id: child_id.clone(),
                }),
                Some(child) if !child.has_parent(&person.id) => {
                    violations.push(Violation::MissingParentLink {
                        parent_id: person.id.clone(),
                        child_id: child_id.clone(),
                    })
                }
                Some(_) => {}
            }
        }

        for parent_id in &person.parents {
            match by_id.get(parent_id) {
                None => violations.push(Violation::DanglingReference {
                    person_id: person.id.clone(),
                    missing_id: parent_id.clone(),
                }),
                Some(parent) if !parent.has_child(&person.id) => {
                    violations.push(Violation::MissingChildLink {
                        parent_id: parent_id.clone(),
                        child_id: person.id.clone(),
                    })
                }
                Some(_) => {}
            }
        }
    }

    violations
}

fn duplicates(person: &Person, ids: &[PersonId]) -> Vec<Violation> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    ids.iter()
        .filter(|id| !seen.insert(*id) && reported.insert(*id))
        .map(|id| Violation::DuplicateEntry {
            person_id: person.id.clone(),
            repeated_id: id.clone(),
        })
        .collect()
}
