//! Relation vocabulary - the closed set of stated relations

use serde::{Deserialize, Serialize};
use std::fmt;

/// A relation an author can declare to the reference person
///
/// The set is closed: raw strings from older data are mapped onto it with
/// [`normalize_legacy`], never extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    /// Husband, wife or partner
    Spouse,
    /// Son or daughter
    Child,
    /// Mother or father
    Parent,
    /// Brother or sister
    Sibling,
    /// Grandmother or grandfather
    Grandparent,
    /// Grandson or granddaughter
    Grandchild,
    /// Uncle or aunt
    UncleAunt,
    /// Nephew or niece
    NephewNiece,
    /// Cousin
    Cousin,
    /// Relative by marriage
    InLaw,
    /// Friend
    Friend,
    /// Colleague
    Colleague,
    /// Neighbor
    Neighbor,
    /// Anything else
    Other,
}

impl RelationKind {
    /// Every relation kind, in declaration order
    pub const ALL: [RelationKind; 14] = [
        RelationKind::Spouse,
        RelationKind::Child,
        RelationKind::Parent,
        RelationKind::Sibling,
        RelationKind::Grandparent,
        RelationKind::Grandchild,
        RelationKind::UncleAunt,
        RelationKind::NephewNiece,
        RelationKind::Cousin,
        RelationKind::InLaw,
        RelationKind::Friend,
        RelationKind::Colleague,
        RelationKind::Neighbor,
        RelationKind::Other,
    ];

    /// The snake_case identifier of this relation
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::Spouse => "spouse",
            RelationKind::Child => "child",
            RelationKind::Parent => "parent",
            RelationKind::Sibling => "sibling",
            RelationKind::Grandparent => "grandparent",
            RelationKind::Grandchild => "grandchild",
            RelationKind::UncleAunt => "uncle_aunt",
            RelationKind::NephewNiece => "nephew_niece",
            RelationKind::Cousin => "cousin",
            RelationKind::InLaw => "in_law",
            RelationKind::Friend => "friend",
            RelationKind::Colleague => "colleague",
            RelationKind::Neighbor => "neighbor",
            RelationKind::Other => "other",
        }
    }

    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            RelationKind::Spouse => "Spouse",
            RelationKind::Child => "Child",
            RelationKind::Parent => "Parent",
            RelationKind::Sibling => "Sibling",
            RelationKind::Grandparent => "Grandparent",
            RelationKind::Grandchild => "Grandchild",
            RelationKind::UncleAunt => "Uncle / Aunt",
            RelationKind::NephewNiece => "Nephew / Niece",
            RelationKind::Cousin => "Cousin",
            RelationKind::InLaw => "In-law",
            RelationKind::Friend => "Friend",
            RelationKind::Colleague => "Colleague",
            RelationKind::Neighbor => "Neighbor",
            RelationKind::Other => "Other",
        }
    }

    /// Parse a relation from its identifier, ignoring case
    pub fn parse(s: &str) -> Option<Self> {
        let lowered = s.to_lowercase();
        Self::ALL.into_iter().find(|kind| kind.as_str() == lowered)
    }
}

/// Display label for a relation kind
pub fn label_for(kind: RelationKind) -> &'static str {
    kind.label()
}

/// Map a loosely-typed legacy relation string onto the closed set
///
/// Matching is exact against the relation identifiers, ignoring case.
/// Absent, empty, and unknown inputs all yield `None`; choosing a fallback
/// relation is the caller's job.
///
/// # Examples
///
/// ```
/// use kindred_domain::{normalize_legacy, RelationKind};
///
/// assert_eq!(normalize_legacy(Some("SPOUSE")), Some(RelationKind::Spouse));
/// assert_eq!(normalize_legacy(Some("")), None);
/// assert_eq!(normalize_legacy(None), None);
/// ```
pub fn normalize_legacy(raw: Option<&str>) -> Option<RelationKind> {
    match raw {
        Some(s) if !s.is_empty() => RelationKind::parse(s),
        _ => None,
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known relation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRelation(pub String);

impl fmt::Display for UnknownRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown relation: '{}'", self.0)
    }
}

impl std::error::Error for UnknownRelation {}

impl std::str::FromStr for RelationKind {
    type Err = UnknownRelation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownRelation(s.to_string()))
    }
}
