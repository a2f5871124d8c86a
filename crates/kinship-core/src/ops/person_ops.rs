use crate::errors::{KinshipError, Result};
use crate::model::{Person, PersonRef, PersonView};
use crate::ops::store::PersonStore;
use crate::rules::validation;

/// Add a person and link them to the named parents and children
///
/// The subject and every named relative are found by name or created.
/// Each edge is written on both endpoints, and neither side gains an id it
/// already holds, so repeating a call with the same arguments changes
/// nothing. Only documents whose lists actually changed are saved.
///
/// All writes happen inside one `atomically` unit.
///
/// # Arguments
/// * `store` - The document store
/// * `name` - Subject name (trimmed; must not be blank)
/// * `parent_names` - Parent names; blank entries are ignored
/// * `child_names` - Child names; blank entries are ignored
///
/// # Returns
/// The subject as persisted
///
/// # Errors
/// * `InvalidName` - If `name` is blank
/// * `SelfRelation` - If the subject is named among its own relatives
/// * `ConflictingRelation` - If a name is both a parent and a child
/// * `Storage` - If the store fails; nothing is written in that case
pub fn add_person<S: PersonStore>(
    store: &mut S,
    name: &str,
    parent_names: &[String],
    child_names: &[String],
) -> Result<Person> {
    let name = validation::validate_name(name)?;
    let parent_names = validation::normalize_relative_names(parent_names);
    let child_names = validation::normalize_relative_names(child_names);
    validation::check_relations(name, &parent_names, &child_names)?;

    store.atomically(|store| {
        let mut subject = find_or_create(store, name)?;
        let mut subject_changed = false;

        for parent_name in &parent_names {
            let mut parent = find_or_create(store, parent_name)?;
            if parent.add_child(subject.id.clone()) {
                store.save(&parent)?;
            }
            subject_changed |= subject.add_parent(parent.id);
        }

        for child_name in &child_names {
            let mut child = find_or_create(store, child_name)?;
            if child.add_parent(subject.id.clone()) {
                store.save(&child)?;
            }
            subject_changed |= subject.add_child(child.id);
        }

        if subject_changed {
            store.save(&subject)?;
        }

        tracing::debug!(
            person_id = %subject.id,
            parent_count = subject.parents.len(),
            child_count = subject.children.len(),
            "person linked"
        );

        Ok(subject)
    })
}

/// Look up a person by name and resolve their immediate family
///
/// Not finding the person is a normal outcome and returns `Ok(None)`.
/// Relative ids that no longer resolve are left out of the view.
///
/// # Errors
/// * `Storage` - If the store fails
pub fn find_person<S: PersonStore>(store: &S, name: &str) -> Result<Option<PersonView>> {
    let name = name.trim();
    if name.is_empty() {
        return Ok(None);
    }

    let Some(person) = store.find_by_name(name)? else {
        return Ok(None);
    };

    let parents = store.populate(&person.parents)?;
    let children = store.populate(&person.children)?;

    Ok(Some(PersonView {
        id: person.id,
        name: person.name,
        parents,
        children,
    }))
}

/// Delete a person and strip their id from every relative
///
/// Each parent loses the subject from `children` and each child loses it
/// from `parents`; relatives that no longer exist are skipped. The subject
/// is removed last. All writes happen inside one `atomically` unit, so a
/// failure part-way leaves the graph as it was.
///
/// # Returns
/// The deleted document
///
/// # Errors
/// * `PersonNotFound` - If no person has this name
/// * `Storage` - If the store fails
pub fn delete_person<S: PersonStore>(store: &mut S, name: &str) -> Result<Person> {
    let name = name.trim();

    store.atomically(|store| {
        let subject = store
            .find_by_name(name)?
            .ok_or_else(|| KinshipError::PersonNotFound {
                name: name.to_string(),
            })?;

        for parent_id in &subject.parents {
            if let Some(mut parent) = store.find_by_id(parent_id)? {
                if parent.remove_child(&subject.id) {
                    store.save(&parent)?;
                }
            }
        }

        for child_id in &subject.children {
            if let Some(mut child) = store.find_by_id(child_id)? {
                if child.remove_parent(&subject.id) {
                    store.save(&child)?;
                }
            }
        }

        if !store.delete(&subject.id)? {
            return Err(KinshipError::storage(
                "delete",
                format!("document {} vanished during delete", subject.id),
            ));
        }

        tracing::debug!(person_id = %subject.id, "person deleted");

        Ok(subject)
    })
}

/// List every person as `{id, name}` in store default order
///
/// # Errors
/// * `Storage` - If the store fails
pub fn list_people<S: PersonStore>(store: &S) -> Result<Vec<PersonRef>> {
    store.list_refs()
}

fn find_or_create<S: PersonStore>(store: &mut S, name: &str) -> Result<Person> {
    match store.find_by_name(name)? {
        Some(person) => Ok(person),
        None => {
            let person = store.insert(name)?;
            tracing::debug!(person_id = %person.id, "person created");
            Ok(person)
        }
    }
}
