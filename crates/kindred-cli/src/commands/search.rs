//! Search command implementation.

use crate::cli::SearchArgs;
use crate::error::Result;
use crate::output::Formatter;
use kindred_domain::traits::ReferenceDirectory;
use kindred_guestbook::Guestbook;

/// Execute the search command.
pub fn execute_search(args: SearchArgs, guestbook: &Guestbook, formatter: &Formatter) -> Result<String> {
    let matches = guestbook.search_references(&args.query)?;
    formatter.format_references(&matches)
}
