use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier of a Person, assigned by the store (UUID v7 text)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(String);

impl PersonId {
    /// Generate a fresh, time-ordered id
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Wrap an id read back from storage
    pub fn from_string(s: String) -> Self {
        Self(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Person - a node in the family graph
///
/// Edges are stored as mirrored id references: if `a.children` contains
/// `b.id` then `b.parents` contains `a.id`. The mutators below never insert
/// an id twice, so both lists stay duplicate-free.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Store-assigned identifier
    pub id: PersonId,

    /// Human-facing lookup key
    pub name: String,

    /// Parent ids, in the order the edges were added
    pub parents: Vec<PersonId>,

    /// Child ids, in the order the edges were added
    pub children: Vec<PersonId>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Person {
    /// Create a Person with no relatives and current timestamps
    pub fn new(id: PersonId, name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            parents: Vec::new(),
            children: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn has_parent(&self, id: &PersonId) -> bool {
        self.parents.contains(id)
    }

    pub fn has_child(&self, id: &PersonId) -> bool {
        self.children.contains(id)
    }

    /// Append a parent id unless already present
    ///
    /// Returns `true` if the list changed.
    pub fn add_parent(&mut self, id: PersonId) -> bool {
        if self.has_parent(&id) {
            return false;
        }
        self.parents.push(id);
        self.touch();
        true
    }

    /// Append a child id unless already present
    ///
    /// Returns `true` if the list changed.
    pub fn add_child(&mut self, id: PersonId) -> bool {
        if self.has_child(&id) {
            return false;
        }
        self.children.push(id);
        self.touch();
        true
    }

    /// Remove every occurrence of a parent id
    ///
    /// Returns `true` if the list changed.
    pub fn remove_parent(&mut self, id: &PersonId) -> bool {
        let before = self.parents.len();
        self.parents.retain(|p| p != id);
        let changed = self.parents.len() != before;
        if changed {
            self.touch();
        }
        changed
    }

    /// Remove every occurrence of a child id
    ///
    /// Returns `true` if the list changed.
    pub fn remove_child(&mut self, id: &PersonId) -> bool {
        let before = self.children.len();
        self.children.retain(|c| c != id);
        let changed = self.children.len() != before;
        if changed {
            self.touch();
        }
        changed
    }

    /// Project to the `{id, name}` pair used for listings
    pub fn to_ref(&self) -> PersonRef {
        PersonRef {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// `{id, name}` projection of a Person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRef {
    pub id: PersonId,
    pub name: String,
}

/// A Person with parent and child ids resolved to names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonView {
    pub id: PersonId,
    pub name: String,
    pub parents: Vec<PersonRef>,
    pub children: Vec<PersonRef>,
}

impl PersonView {
    pub fn parent_names(&self) -> Vec<&str> {
        self.parents.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn child_names(&self) -> Vec<&str> {
        self.children.iter().map(|c| c.name.as_str()).collect()
    }
}
