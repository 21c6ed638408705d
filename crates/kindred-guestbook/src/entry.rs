//! Raw guestbook entries and their normalization into authors

use kindred_domain::{normalize_legacy, Person, PersonId, RelationKind};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

/// A guestbook entry as stored, before normalization
///
/// The relation is whatever string the entry was saved with; older data
/// holds free-form or differently-cased values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestbookEntry {
    /// Entry (author) identifier
    pub id: PersonId,

    /// Deceased the entry was written for
    pub deceased_id: PersonId,

    /// Author first name; missing or null reads as empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub first_name: String,

    /// Author last name; missing or null reads as empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub last_name: String,

    /// Stated relation, raw
    #[serde(default)]
    pub relation: Option<String>,

    /// Message left in the guestbook
    #[serde(default)]
    pub message: Option<String>,

    /// Seconds since Unix epoch
    #[serde(default)]
    pub created_at: Option<u64>,
}

impl GuestbookEntry {
    /// Normalize into an author, substituting `default` for a missing or
    /// unrecognized relation
    pub fn into_person(self, default: RelationKind) -> Person {
        let relation = match normalize_legacy(self.relation.as_deref()) {
            Some(kind) => kind,
            None => {
                debug!(
                    entry = %self.id,
                    raw = ?self.relation,
                    fallback = %default,
                    "Unrecognized relation, using fallback"
                );
                default
            }
        };

        Person {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            relation,
            reference_id: self.deceased_id,
            message: self.message,
            created_at: self.created_at,
        }
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
