//! Kindred Domain Layer
//!
//! The kinship deduction engine. Given a reference person (typically someone
//! deceased) and the authors who each declared one relation to them, it
//! infers how the authors probably relate to one another.
//!
//! ## Key Concepts
//!
//! - **Relation vocabulary**: the closed set of stated relations and their labels
//! - **Pairwise deduction**: an ordered rule table, first match wins
//! - **Mesh**: every deduction across all author pairs, in `(i, j)` order
//! - **Surname groups**: authors sharing a normalized family name
//! - **Graph**: nodes and direct/deduced edges for a renderer
//!
//! ## Architecture
//!
//! Everything here is a pure, synchronous function of its inputs: no I/O,
//! no logging, no shared state. Data sources are reached through the
//! traits in [`traits`] and implemented elsewhere.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod deduction;
pub mod graph;
pub mod mesh;
pub mod person;
pub mod relation;
pub mod surname;
pub mod traits;

// Re-exports for convenience
pub use deduction::{deduce, DeducedKind, DeducedRelationship, Rule, RULES};
pub use graph::{EdgeKind, GraphEdge, GraphNode, LineStyle, NodeRole, RelationshipGraph};
pub use mesh::{build_mesh, find_deduced, pair_count};
pub use person::{Person, PersonId, ReferencePerson};
pub use relation::{label_for, normalize_legacy, RelationKind, UnknownRelation};
pub use surname::{group_by_surname, normalize_surname, SurnameGroups};
