//! People module - authors and the reference person they relate to

use crate::relation::RelationKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a person based on UUIDv7
///
/// Authors and reference persons share this identifier type so that graph
/// nodes and edges can be correlated back to the records they came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonId(u128);

impl PersonId {
    /// Generate a new UUIDv7-based PersonId
    ///
    /// # Examples
    ///
    /// ```
    /// use kindred_domain::PersonId;
    ///
    /// let id = PersonId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a PersonId from a raw u128 value
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a PersonId from its UUID string form
    ///
    /// # Examples
    ///
    /// ```
    /// use kindred_domain::PersonId;
    ///
    /// let id = PersonId::new();
    /// let parsed = PersonId::from_string(&id.to_string()).unwrap();
    /// assert_eq!(id, parsed);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid person id '{}': {}", s, e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for PersonId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

impl std::str::FromStr for PersonId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl TryFrom<String> for PersonId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_string(&value)
    }
}

impl From<PersonId> for String {
    fn from(id: PersonId) -> Self {
        id.to_string()
    }
}

/// The common person every author declared a relation to (e.g. the deceased)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferencePerson {
    /// Unique identifier
    pub id: PersonId,

    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,
}

impl ReferencePerson {
    /// Create a new reference person
    pub fn new(id: PersonId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// First and last name joined by a space
    pub fn full_name(&self) -> String {
        join_names(&self.first_name, &self.last_name)
    }
}

/// An author: someone who declared a single relation to a reference person
///
/// Built by a collaborator from raw guestbook data; never mutated by the
/// deduction engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier
    pub id: PersonId,

    /// First name
    pub first_name: String,

    /// Last name, as stored
    pub last_name: String,

    /// Stated relation to the reference person
    pub relation: RelationKind,

    /// Identifier of the reference person the relation points to
    pub reference_id: PersonId,

    /// Optional free-text message left by the author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// When the author's entry was written (seconds since Unix epoch)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<u64>,
}

impl Person {
    /// Create a new author
    pub fn new(
        id: PersonId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        relation: RelationKind,
        reference_id: PersonId,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            relation,
            reference_id,
            message: None,
            created_at: None,
        }
    }

    /// Attach the author's message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attach the entry timestamp
    pub fn with_created_at(mut self, created_at: u64) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// First and last name joined by a space
    pub fn full_name(&self) -> String {
        join_names(&self.first_name, &self.last_name)
    }
}

fn join_names(first: &str, last: &str) -> String {
    match (first.is_empty(), last.is_empty()) {
        (false, false) => format!("{} {}", first, last),
        (false, true) => first.to_string(),
        (true, false) => last.to_string(),
        (true, true) => String::new(),
    }
}
