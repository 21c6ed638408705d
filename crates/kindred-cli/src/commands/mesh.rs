//! Mesh command implementation.

use super::load_guestbook;
use crate::cli::MeshArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use kindred_domain::{build_mesh, pair_count};
use kindred_guestbook::Guestbook;

/// Execute the mesh command.
pub fn execute_mesh(args: MeshArgs, guestbook: &Guestbook, formatter: &Formatter) -> Result<String> {
    if let Some(min) = args.min_confidence {
        if !(0.0..=1.0).contains(&min) {
            return Err(CliError::InvalidInput(
                "Confidence must be between 0.0 and 1.0".to_string(),
            ));
        }
    }

    let (reference, authors) = load_guestbook(guestbook, args.deceased)?;
    let mut mesh = build_mesh(&authors, &reference);

    tracing::debug!(
        pairs = pair_count(authors.len()),
        deduced = mesh.len(),
        "Built mesh"
    );

    if let Some(min) = args.min_confidence {
        mesh.retain(|d| d.confidence >= min);
    }

    formatter.format_mesh(&mesh)
}
