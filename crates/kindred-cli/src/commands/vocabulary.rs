//! Relations and rules listings.

use crate::error::Result;
use crate::output::Formatter;

/// Execute the relations command.
pub fn execute_relations(formatter: &Formatter) -> Result<String> {
    formatter.format_relations()
}

/// Execute the rules command.
pub fn execute_rules(formatter: &Formatter) -> Result<String> {
    formatter.format_rules()
}
