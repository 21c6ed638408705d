//! File-backed guestbook dataset

use crate::{GuestbookConfig, GuestbookEntry, GuestbookError};
use kindred_domain::traits::{AuthorSource, ReferenceDirectory};
use kindred_domain::{Person, PersonId, ReferencePerson};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// On-disk layout of a guestbook data file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuestbookData {
    /// People the guestbooks were opened for
    #[serde(default)]
    pub deceased: Vec<ReferencePerson>,

    /// Entries across all guestbooks
    #[serde(default)]
    pub entries: Vec<GuestbookEntry>,
}

/// An in-memory guestbook serving authors and deceased lookups
///
/// # Examples
///
/// ```
/// use kindred_guestbook::Guestbook;
/// use kindred_domain::traits::ReferenceDirectory;
///
/// let json = r#"{
///   "deceased": [
///     {"id": "0190a7f6-1c2b-7d3e-8f40-000000000001", "first_name": "Jean", "last_name": "Dupont"}
///   ],
///   "entries": []
/// }"#;
///
/// let guestbook = Guestbook::from_json(json).unwrap();
/// assert_eq!(guestbook.search_references("dupont").unwrap().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Guestbook {
    config: GuestbookConfig,
    data: GuestbookData,
}

impl Guestbook {
    /// Create a guestbook from parsed data, rejecting repeated ids
    pub fn new(data: GuestbookData, config: GuestbookConfig) -> Result<Self, GuestbookError> {
        check_unique("deceased", data.deceased.iter().map(|d| d.id))?;
        check_unique("entry", data.entries.iter().map(|e| e.id))?;

        info!(
            deceased = data.deceased.len(),
            entries = data.entries.len(),
            "Guestbook loaded"
        );

        Ok(Self { config, data })
    }

    /// Parse a guestbook from a JSON string with default configuration
    pub fn from_json(json: &str) -> Result<Self, GuestbookError> {
        Self::from_json_with_config(json, GuestbookConfig::default())
    }

    /// Parse a guestbook from a JSON string
    pub fn from_json_with_config(json: &str, config: GuestbookConfig) -> Result<Self, GuestbookError> {
        let data: GuestbookData = serde_json::from_str(json)?;
        Self::new(data, config)
    }

    /// Load a guestbook from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P, config: GuestbookConfig) -> Result<Self, GuestbookError> {
        let path = path.as_ref();
        debug!("Reading guestbook from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_json_with_config(&contents, config)
    }

    /// Active configuration
    pub fn config(&self) -> &GuestbookConfig {
        &self.config
    }

    /// Every deceased record, in file order
    pub fn deceased(&self) -> &[ReferencePerson] {
        &self.data.deceased
    }

    /// Raw entries for a deceased, in file order
    pub fn entries_for(&self, deceased_id: PersonId) -> impl Iterator<Item = &GuestbookEntry> {
        self.data
            .entries
            .iter()
            .filter(move |entry| entry.deceased_id == deceased_id)
    }
}

fn check_unique(kind: &'static str, ids: impl Iterator<Item = PersonId>) -> Result<(), GuestbookError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(GuestbookError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

fn name_matches(person: &ReferencePerson, needle: &str) -> bool {
    person.first_name.to_lowercase().contains(needle)
        || person.last_name.to_lowercase().contains(needle)
        || person.full_name().to_lowercase().contains(needle)
}

impl AuthorSource for Guestbook {
    type Error = GuestbookError;

    fn authors_for(&self, reference: PersonId) -> Result<Vec<Person>, Self::Error> {
        let default = self.config.default_relation;
        let authors: Vec<Person> = self
            .entries_for(reference)
            .cloned()
            .map(|entry| entry.into_person(default))
            .collect();

        debug!(reference = %reference, count = authors.len(), "Fetched authors");
        Ok(authors)
    }
}

impl ReferenceDirectory for Guestbook {
    type Error = GuestbookError;

    fn get_reference(&self, id: PersonId) -> Result<Option<ReferencePerson>, Self::Error> {
        Ok(self.data.deceased.iter().find(|d| d.id == id).cloned())
    }

    fn search_references(&self, query: &str) -> Result<Vec<ReferencePerson>, Self::Error> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }

        let matches: Vec<ReferencePerson> = self
            .data
            .deceased
            .iter()
            .filter(|person| name_matches(person, &needle))
            .take(self.config.max_search_results)
            .cloned()
            .collect();

        debug!(query = %query, count = matches.len(), "Searched deceased");
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kindred_domain::RelationKind;

    fn sample() -> GuestbookData {
        let jean = ReferencePerson::new(PersonId::from_value(1), "Jean", "Dupont");
        let entries = vec![
            GuestbookEntry {
                id: PersonId::from_value(10),
                deceased_id: jean.id,
                first_name: "Marie".to_string(),
                last_name: "Dupont".to_string(),
                relation: Some("child".to_string()),
                message: None,
                created_at: None,
            },
            GuestbookEntry {
                id: PersonId::from_value(11),
                deceased_id: PersonId::from_value(2),
                first_name: "Ana".to_string(),
                last_name: "Martin".to_string(),
                relation: None,
                message: None,
                created_at: None,
            },
        ];
        GuestbookData {
            deceased: vec![jean, ReferencePerson::new(PersonId::from_value(2), "Claire", "Martin")],
            entries,
        }
    }

    #[test]
    fn test_authors_for_filters_by_deceased() {
        let guestbook = Guestbook::new(sample(), GuestbookConfig::default()).unwrap();

        let authors = guestbook.authors_for(PersonId::from_value(1)).unwrap();
        assert_eq!(authors.len(), 1);
        assert_eq!(authors[0].relation, RelationKind::Child);

        let authors = guestbook.authors_for(PersonId::from_value(2)).unwrap();
        assert_eq!(authors[0].relation, RelationKind::Other);
    }

    #[test]
    fn test_unknown_deceased_is_empty() {
        let guestbook = Guestbook::new(sample(), GuestbookConfig::default()).unwrap();
        assert!(guestbook.authors_for(PersonId::from_value(99)).unwrap().is_empty());
        assert!(guestbook.get_reference(PersonId::from_value(99)).unwrap().is_none());
    }

    #[test]
    fn test_duplicate_entry_rejected() {
        let mut data = sample();
        data.entries[1].id = data.entries[0].id;

        let err = Guestbook::new(data, GuestbookConfig::default()).unwrap_err();
        assert!(matches!(err, GuestbookError::DuplicateId { kind: "entry", .. }));
    }

    #[test]
    fn test_search() {
        let guestbook = Guestbook::new(sample(), GuestbookConfig::default()).unwrap();

        assert_eq!(guestbook.search_references("  MARTIN ").unwrap()[0].first_name, "Claire");
        assert_eq!(guestbook.search_references("jean dup").unwrap().len(), 1);
        assert!(guestbook.search_references("   ").unwrap().is_empty());
        assert!(guestbook.search_references("rossi").unwrap().is_empty());
    }

    #[test]
    fn test_search_limit() {
        let config = GuestbookConfig {
            max_search_results: 1,
            ..GuestbookConfig::default()
        };
        let guestbook = Guestbook::new(sample(), config).unwrap();

        // Both names contain an 'a'
        let found = guestbook.search_references("a").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].first_name, "Jean");
    }
}
