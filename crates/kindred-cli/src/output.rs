//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use kindred_domain::{
    DeducedRelationship, EdgeKind, NodeRole, ReferencePerson, RelationKind, RelationshipGraph, SurnameGroups, RULES,
};
use serde_json::json;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format search results.
    pub fn format_references(&self, references: &[ReferencePerson]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(references)?),
            OutputFormat::Quiet => Ok(join_lines(references.iter().map(|r| r.id.to_string()))),
            OutputFormat::Table => {
                if references.is_empty() {
                    return Ok(self.colorize("No deceased found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["ID", "First name", "Last name"]);
                for r in references {
                    builder.push_record([r.id.to_string(), r.first_name.clone(), r.last_name.clone()]);
                }
                Ok(render(builder))
            }
        }
    }

    /// Format a mesh of deduced relationships.
    pub fn format_mesh(&self, mesh: &[DeducedRelationship]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let items: Vec<serde_json::Value> = mesh.iter().map(deduction_json).collect();
                Ok(serde_json::to_string_pretty(&items)?)
            }
            OutputFormat::Quiet => Ok(join_lines(
                mesh.iter().map(|d| format!("{} {} {}", d.a.id, d.b.id, d.kind)),
            )),
            OutputFormat::Table => {
                if mesh.is_empty() {
                    return Ok(self.colorize("No relationships deduced.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Author", "Author", "Relationship", "Confidence", "Explanation"]);
                for d in mesh {
                    builder.push_record([
                        d.a.full_name(),
                        d.b.full_name(),
                        d.label.clone(),
                        format!("{:.2}", d.confidence),
                        d.explanation.clone(),
                    ]);
                }
                Ok(render(builder))
            }
        }
    }

    /// Format a single deduction, or its absence.
    pub fn format_deduction(&self, deduction: Option<&DeducedRelationship>) -> Result<String> {
        match (self.format, deduction) {
            (OutputFormat::Json, Some(d)) => Ok(serde_json::to_string_pretty(&deduction_json(d))?),
            (OutputFormat::Json, None) => Ok("null".to_string()),
            (OutputFormat::Quiet, Some(d)) => Ok(d.kind.to_string()),
            (OutputFormat::Quiet, None) => Ok(String::new()),
            (OutputFormat::Table, Some(d)) => Ok(format!(
                "{} ({:.2})\n{}",
                self.colorize(&d.label, "cyan"),
                d.confidence,
                d.explanation
            )),
            (OutputFormat::Table, None) => Ok(self.info("No relationship could be deduced between these authors")),
        }
    }

    /// Format surname groups.
    pub fn format_groups(&self, groups: &SurnameGroups) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value: serde_json::Map<String, serde_json::Value> = groups
                    .iter()
                    .map(|(surname, members)| {
                        let ids: Vec<String> = members.iter().map(|m| m.id.to_string()).collect();
                        (surname.clone(), json!(ids))
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Quiet => Ok(join_lines(groups.keys().cloned())),
            OutputFormat::Table => {
                if groups.is_empty() {
                    return Ok(self.colorize("No shared surnames.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Surname", "Members", "Authors"]);
                for (surname, members) in groups {
                    let names: Vec<String> = members.iter().map(|m| m.full_name()).collect();
                    builder.push_record([surname.clone(), members.len().to_string(), names.join(", ")]);
                }
                Ok(render(builder))
            }
        }
    }

    /// Format a relationship graph.
    pub fn format_graph(&self, graph: &RelationshipGraph) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(graph)?),
            OutputFormat::Quiet => Ok(join_lines(
                graph.edges.iter().map(|e| format!("{} {}", e.source, e.target)),
            )),
            OutputFormat::Table => {
                let mut nodes = Builder::default();
                nodes.push_record(["ID", "Name", "Role"]);
                for node in &graph.nodes {
                    let role = match node.role {
                        NodeRole::Reference => "Deceased".to_string(),
                        NodeRole::Author { relation } => relation.label().to_string(),
                    };
                    nodes.push_record([node.id.to_string(), node.label.clone(), role]);
                }

                let mut edges = Builder::default();
                edges.push_record(["From", "To", "Label", "Kind", "Confidence"]);
                for edge in &graph.edges {
                    let kind = match edge.kind {
                        EdgeKind::Direct { .. } => "declared",
                        EdgeKind::Deduced { .. } => "deduced",
                    };
                    edges.push_record([
                        name_of(graph, edge.source),
                        name_of(graph, edge.target),
                        edge.label.clone(),
                        kind.to_string(),
                        format!("{:.2}", edge.confidence),
                    ]);
                }

                Ok(format!("{}\n{}", render(nodes), render(edges)))
            }
        }
    }

    /// Format the relation vocabulary.
    pub fn format_relations(&self) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let items: Vec<serde_json::Value> = RelationKind::ALL
                    .iter()
                    .map(|k| json!({ "id": k.as_str(), "label": k.label() }))
                    .collect();
                Ok(serde_json::to_string_pretty(&items)?)
            }
            OutputFormat::Quiet => Ok(join_lines(RelationKind::ALL.iter().map(|k| k.as_str().to_string()))),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Relation", "Label"]);
                for kind in RelationKind::ALL {
                    builder.push_record([kind.as_str(), kind.label()]);
                }
                Ok(render(builder))
            }
        }
    }

    /// Format the deduction rule table.
    pub fn format_rules(&self) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let items: Vec<serde_json::Value> = RULES
                    .iter()
                    .enumerate()
                    .map(|(i, rule)| {
                        json!({
                            "order": i + 1,
                            "pattern": rule.name,
                            "tag": rule.kind.as_str(),
                            "confidence": rule.confidence,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&items)?)
            }
            OutputFormat::Quiet => Ok(join_lines(RULES.iter().map(|rule| rule.kind.as_str().to_string()))),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["#", "Pattern", "Deduced", "Confidence"]);
                for (i, rule) in RULES.iter().enumerate() {
                    builder.push_record([
                        (i + 1).to_string(),
                        rule.name.to_string(),
                        rule.kind.as_str().to_string(),
                        format!("{:.2}", rule.confidence),
                    ]);
                }
                Ok(render(builder))
            }
        }
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn deduction_json(d: &DeducedRelationship) -> serde_json::Value {
    json!({
        "a": { "id": d.a.id.to_string(), "name": d.a.full_name(), "relation": d.a.relation.as_str() },
        "b": { "id": d.b.id.to_string(), "name": d.b.full_name(), "relation": d.b.relation.as_str() },
        "tag": d.kind.as_str(),
        "label": d.label,
        "explanation": d.explanation,
        "confidence": d.confidence,
    })
}

fn name_of(graph: &RelationshipGraph, id: kindred_domain::PersonId) -> String {
    graph.node(id).map(|n| n.label.clone()).unwrap_or_else(|| id.to_string())
}

fn join_lines(lines: impl Iterator<Item = String>) -> String {
    lines.collect::<Vec<_>>().join("\n")
}

fn render(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}
