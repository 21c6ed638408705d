//! Graph assembly - nodes and edges for rendering a family mesh
//!
//! One node for the reference person, one per author. Every author gets a
//! direct edge to the reference person labeled with their stated relation;
//! every deduction adds an edge between two authors. Node and edge endpoint
//! ids are the ids of the underlying people, so a renderer can map a clicked
//! edge back to its [`DeducedRelationship`] with [`RelationshipGraph::deduction_for`].

use crate::{build_mesh, find_deduced, DeducedKind, DeducedRelationship, Person, PersonId, ReferencePerson, RelationKind};
use serde::{Deserialize, Serialize};

/// Confidence at or above which a deduced edge is drawn dashed rather than dotted
pub const DASHED_THRESHOLD: f64 = 0.8;

/// What a node stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeRole {
    /// The reference person at the center of the mesh
    Reference,
    /// An author and their stated relation
    Author {
        /// Stated relation to the reference person
        relation: RelationKind,
    },
}

/// A person in the graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Id of the underlying person
    pub id: PersonId,
    /// Full name
    pub label: String,
    /// Reference person or author
    pub role: NodeRole,
}

/// Where an edge comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EdgeKind {
    /// Declared by the author
    Direct {
        /// The declared relation
        relation: RelationKind,
    },
    /// Inferred between two authors
    Deduced {
        /// The deduced tag
        tag: DeducedKind,
    },
}

/// Suggested stroke for an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    /// Declared relations
    Solid,
    /// Strong deductions
    Dashed,
    /// Weak deductions
    Dotted,
}

impl LineStyle {
    /// Stroke for a deduced edge of the given confidence
    pub fn for_confidence(confidence: f64) -> Self {
        if confidence >= DASHED_THRESHOLD {
            LineStyle::Dashed
        } else {
            LineStyle::Dotted
        }
    }
}

/// A connection between two people
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Source person id (the reference person for direct edges)
    pub source: PersonId,
    /// Target person id
    pub target: PersonId,
    /// Display label
    pub label: String,
    /// Declared or deduced
    pub kind: EdgeKind,
    /// 1.0 for declared relations, the rule's confidence otherwise
    pub confidence: f64,
    /// Suggested stroke
    pub style: LineStyle,
    /// Why the edge was deduced; absent on declared edges
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl GraphEdge {
    /// Whether this edge was deduced rather than declared
    pub fn is_deduced(&self) -> bool {
        matches!(self.kind, EdgeKind::Deduced { .. })
    }

    /// Whether the edge joins the two people, in either direction
    pub fn joins(&self, x: PersonId, y: PersonId) -> bool {
        (self.source == x && self.target == y) || (self.source == y && self.target == x)
    }
}

/// The full node/edge structure handed to a renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipGraph {
    /// Reference person first, then authors in input order
    pub nodes: Vec<GraphNode>,
    /// Direct edges in author order, then deduced edges in mesh order
    pub edges: Vec<GraphEdge>,
    /// The deductions behind the deduced edges, in mesh order
    #[serde(default)]
    pub mesh: Vec<DeducedRelationship>,
}

impl RelationshipGraph {
    /// Build the mesh for the authors and assemble the graph
    ///
    /// # Examples
    ///
    /// ```
    /// use kindred_domain::{Person, PersonId, ReferencePerson, RelationKind, RelationshipGraph};
    ///
    /// let jean = ReferencePerson::new(PersonId::new(), "Jean", "Dupont");
    /// let authors = vec![
    ///     Person::new(PersonId::new(), "Marie", "Dupont", RelationKind::Child, jean.id),
    ///     Person::new(PersonId::new(), "Luc", "Dupont", RelationKind::Child, jean.id),
    /// ];
    ///
    /// let graph = RelationshipGraph::assemble(&jean, &authors);
    /// assert_eq!(graph.nodes.len(), 3);
    /// assert_eq!(graph.edges.len(), 3);
    /// ```
    pub fn assemble(reference: &ReferencePerson, authors: &[Person]) -> Self {
        let mesh = build_mesh(authors, reference);
        Self::from_parts(reference, authors, mesh)
    }

    /// Assemble the graph from an already computed mesh
    pub fn from_parts(reference: &ReferencePerson, authors: &[Person], mesh: Vec<DeducedRelationship>) -> Self {
        let mut nodes = Vec::with_capacity(authors.len() + 1);
        nodes.push(GraphNode {
            id: reference.id,
            label: reference.full_name(),
            role: NodeRole::Reference,
        });
        nodes.extend(authors.iter().map(|author| GraphNode {
            id: author.id,
            label: author.full_name(),
            role: NodeRole::Author {
                relation: author.relation,
            },
        }));

        let direct = authors.iter().map(|author| GraphEdge {
            source: reference.id,
            target: author.id,
            label: author.relation.label().to_string(),
            kind: EdgeKind::Direct {
                relation: author.relation,
            },
            confidence: 1.0,
            style: LineStyle::Solid,
            explanation: None,
        });
        let deduced = mesh.iter().map(|d| GraphEdge {
            source: d.a.id,
            target: d.b.id,
            label: d.label.clone(),
            kind: EdgeKind::Deduced { tag: d.kind },
            confidence: d.confidence,
            style: LineStyle::for_confidence(d.confidence),
            explanation: Some(d.explanation.clone()),
        });
        let edges = direct.chain(deduced).collect();

        Self { nodes, edges, mesh }
    }

    /// Node for a person id
    pub fn node(&self, id: PersonId) -> Option<&GraphNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Deduced edge between two authors, in either order
    pub fn edge_between(&self, x: PersonId, y: PersonId) -> Option<&GraphEdge> {
        self.edges.iter().find(|edge| edge.is_deduced() && edge.joins(x, y))
    }

    /// The deduction behind the edge joining two authors, in either order
    pub fn deduction_for(&self, x: PersonId, y: PersonId) -> Option<&DeducedRelationship> {
        find_deduced(&self.mesh, x, y)
    }
}
