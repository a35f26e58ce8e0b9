//! Explain command implementation.

use super::{write_output, SourceArgs};
use anyhow::Result;
use logsrc_compiler::{generate_source_report, Compiler};
use tracing::info;

/// Runs the explain command.
pub fn run(sources: &SourceArgs, output_path: Option<&str>) -> Result<()> {
    let enabled = sources.resolve()?;
    info!("Generating source report for: [{}]", enabled);

    let report = generate_source_report(&Compiler::new(), &enabled);
    write_output(output_path, &report)
}
