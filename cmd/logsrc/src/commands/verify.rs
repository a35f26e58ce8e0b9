//! Verify command implementation.

use super::{parse_format, SourceArgs};
use anyhow::{bail, Context, Result};
use logsrc_compiler::{Lockfile, OutputFormat};
use tracing::{info, warn};

/// Runs the verify command.
///
/// Output is re-rendered in the format recorded by the lockfile. An explicit
/// `format` must agree with it.
pub fn run(sources: &SourceArgs, lock_path: &str, format: Option<&str>) -> Result<()> {
    info!("Verifying compiled sources against lockfile: {}", lock_path);

    let enabled = sources.resolve()?;
    let lockfile = Lockfile::load(lock_path)
        .with_context(|| format!("Failed to read lockfile: {lock_path}"))?;
    check_format(lockfile.format, format)?;

    let compiler = lockfile.compiler();
    let stanzas = compiler
        .compile(&enabled)
        .with_context(|| "Failed to compile sources")?;
    let output = compiler
        .render(&enabled)
        .with_context(|| "Failed to render stanzas")?;

    if !lockfile.verify_sources(&enabled) {
        warn!(
            "Source mismatch - locked [{}], current [{}]",
            lockfile.sources.join(","),
            enabled
        );
    }

    for position in lockfile.mismatched_stanzas(&stanzas) {
        warn!("Stanza {} differs from locked version", position);
    }

    if !lockfile.verify(&enabled, &output) {
        bail!("Compiled output does not match lockfile: {lock_path}");
    }

    info!("Lockfile verified ({} stanzas)", lockfile.stanza_count());
    Ok(())
}

/// Rejects a `--format` that disagrees with the locked format.
fn check_format(locked: OutputFormat, requested: Option<&str>) -> Result<()> {
    if let Some(requested) = requested {
        let requested = parse_format(requested)?;
        if requested != locked {
            bail!("Lockfile was created with {locked:?} output, not {requested:?}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_defaults_to_locked() {
        assert!(check_format(OutputFormat::Json, None).is_ok());
        assert!(check_format(OutputFormat::Json, Some("JSON")).is_ok());
        assert!(check_format(OutputFormat::Text, Some("conf")).is_ok());
    }

    #[test]
    fn conflicting_format_is_rejected() {
        let err = check_format(OutputFormat::Json, Some("text")).unwrap_err();
        assert_eq!(err.to_string(), "Lockfile was created with Json output, not Text");
        assert!(check_format(OutputFormat::Text, Some("yaml")).is_err());
    }
}
