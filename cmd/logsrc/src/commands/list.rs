//! List command implementation.

use super::write_output;
use anyhow::{Context, Result};
use logsrc_compiler::StanzaTable;

/// Runs the list command.
pub fn run(json: bool) -> Result<()> {
    let table = StanzaTable::builtin();

    let output = if json {
        let definitions: Vec<_> = table.iter().collect();
        let mut out = serde_json::to_string_pretty(&definitions)
            .context("Failed to serialize stanza table")?;
        out.push('\n');
        out
    } else {
        let mut out = String::new();
        for def in table.iter() {
            out.push_str(&format!(
                "{:>4}  {:<11} {:<22} {:<20} {}\n",
                def.rank, def.source_type, def.id, def.tag, def.label
            ));
        }
        out
    };

    write_output(None, &output)
}
