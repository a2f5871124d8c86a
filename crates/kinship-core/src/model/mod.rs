pub mod person;

pub use person::{Person, PersonId, PersonRef, PersonView};
