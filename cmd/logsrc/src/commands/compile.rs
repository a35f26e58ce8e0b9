//! Compile command implementation.

use super::{parse_format, write_output, SourceArgs};
use anyhow::{Context, Result};
use logsrc_compiler::{CompileOptions, Compiler, Lockfile};
use std::path::Path;
use tracing::info;

/// Runs the compile command.
pub fn run(
    sources: &SourceArgs,
    output_path: Option<&str>,
    format: &str,
    create_lockfile: bool,
) -> Result<()> {
    let enabled = sources.resolve()?;
    info!("Compiling sources: [{}]", enabled);

    let compiler = Compiler::with_options(CompileOptions {
        format: parse_format(format)?,
    });
    let stanzas = compiler
        .compile(&enabled)
        .with_context(|| "Failed to compile sources")?;
    let output = compiler
        .render(&enabled)
        .with_context(|| "Failed to render stanzas")?;

    info!("Compiled {} stanzas", stanzas.len());
    write_output(output_path, &output)?;

    if create_lockfile {
        if let Some(output_path) = output_path {
            let lockfile = Lockfile::new(&enabled, compiler.format(), &stanzas, &output)
                .with_timestamp();
            let lock_path = format!("{output_path}.lock");
            let lock_path = Path::new(&lock_path);

            lockfile
                .save(lock_path)
                .with_context(|| format!("Failed to write lockfile: {}", lock_path.display()))?;

            info!("Lockfile written to: {}", lock_path.display());
        }
    }

    Ok(())
}
