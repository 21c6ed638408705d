//! Groups command implementation.

use super::load_guestbook;
use crate::cli::DeceasedArgs;
use crate::error::Result;
use crate::output::Formatter;
use kindred_domain::group_by_surname;
use kindred_guestbook::Guestbook;

/// Execute the groups command.
pub fn execute_groups(args: DeceasedArgs, guestbook: &Guestbook, formatter: &Formatter) -> Result<String> {
    let (_, authors) = load_guestbook(guestbook, args.deceased)?;
    let groups = group_by_surname(&authors);

    tracing::debug!(groups = groups.len(), "Grouped authors by surname");
    formatter.format_groups(&groups)
}
