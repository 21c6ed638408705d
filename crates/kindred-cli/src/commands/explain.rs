//! Explain command implementation.

use super::load_guestbook;
use crate::cli::ExplainArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use kindred_domain::{build_mesh, find_deduced};
use kindred_guestbook::Guestbook;

/// Execute the explain command.
///
/// The two authors may be given in either order.
pub fn execute_explain(args: ExplainArgs, guestbook: &Guestbook, formatter: &Formatter) -> Result<String> {
    if args.first == args.second {
        return Err(CliError::InvalidInput(
            "Two different authors are required".to_string(),
        ));
    }

    let (reference, authors) = load_guestbook(guestbook, args.deceased)?;
    for id in [args.first, args.second] {
        if !authors.iter().any(|a| a.id == id) {
            return Err(CliError::NotFound(format!(
                "author {} in the guestbook of {}",
                id,
                reference.full_name()
            )));
        }
    }

    let mesh = build_mesh(&authors, &reference);
    formatter.format_deduction(find_deduced(&mesh, args.first, args.second))
}
