//! Command implementations.
//!
//! Each command renders its output to a string; the binary prints it.

pub mod explain;
pub mod graph;
pub mod groups;
pub mod mesh;
pub mod search;
pub mod vocabulary;

pub use self::explain::execute_explain;
pub use self::graph::execute_graph;
pub use self::groups::execute_groups;
pub use self::mesh::execute_mesh;
pub use self::search::execute_search;
pub use self::vocabulary::{execute_relations, execute_rules};

use crate::error::{CliError, Result};
use kindred_domain::traits::{AuthorSource, ReferenceDirectory};
use kindred_domain::{Person, PersonId, ReferencePerson};
use kindred_guestbook::Guestbook;

/// Fetch a deceased and the authors of their guestbook.
pub fn load_guestbook(guestbook: &Guestbook, deceased: PersonId) -> Result<(ReferencePerson, Vec<Person>)> {
    let reference = guestbook
        .get_reference(deceased)?
        .ok_or_else(|| CliError::NotFound(format!("deceased {}", deceased)))?;
    let authors = guestbook.authors_for(reference.id)?;

    tracing::info!(
        deceased = %reference.full_name(),
        authors = authors.len(),
        "Loaded guestbook"
    );

    Ok((reference, authors))
}
