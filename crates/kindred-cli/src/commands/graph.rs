//! Graph command implementation.

use super::load_guestbook;
use crate::cli::DeceasedArgs;
use crate::error::Result;
use crate::output::Formatter;
use kindred_domain::RelationshipGraph;
use kindred_guestbook::Guestbook;

/// Execute the graph command.
pub fn execute_graph(args: DeceasedArgs, guestbook: &Guestbook, formatter: &Formatter) -> Result<String> {
    let (reference, authors) = load_guestbook(guestbook, args.deceased)?;
    let graph = RelationshipGraph::assemble(&reference, &authors);

    tracing::debug!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "Assembled graph"
    );
    formatter.format_graph(&graph)
}
