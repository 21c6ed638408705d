//! Trait definitions for collaborators
//!
//! The engine never fetches data itself. These traits describe what it
//! consumes; implementations live in other crates (kindred-guestbook).

use crate::{Person, PersonId, ReferencePerson};

/// Source of authors for a reference person
pub trait AuthorSource {
    /// Error type for fetch operations
    type Error;

    /// Authors who declared a relation to the given reference person
    ///
    /// Unknown references yield an empty list, not an error.
    fn authors_for(&self, reference: PersonId) -> Result<Vec<Person>, Self::Error>;
}

/// Lookup and search of reference persons
pub trait ReferenceDirectory {
    /// Error type for lookup operations
    type Error;

    /// Get a reference person by id
    fn get_reference(&self, id: PersonId) -> Result<Option<ReferencePerson>, Self::Error>;

    /// Reference persons whose name fields match a free-text query
    fn search_references(&self, query: &str) -> Result<Vec<ReferencePerson>, Self::Error>;
}
