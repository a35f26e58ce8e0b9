//! Command implementations.

pub mod compile;
pub mod explain;
pub mod list;
pub mod verify;

use anyhow::{bail, Context, Result};
use clap::Args;
use forwarding_spec::EnabledSources;
use logsrc_compiler::OutputFormat;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Selects the enabled log sources, either directly or from a manifest.
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Comma-separated source types (app, infra, audit or logs.*)
    #[arg(short, long, env = "LOGSRC_SOURCES")]
    sources: Option<String>,

    /// Log-forwarding manifest (YAML, or JSON by .json extension); takes
    /// precedence over --sources
    #[arg(long)]
    forwarding: Option<String>,
}

impl SourceArgs {
    /// Resolves the enabled set.
    pub fn resolve(&self) -> Result<EnabledSources> {
        if let Some(path) = &self.forwarding {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read forwarding manifest: {path}"))?;

            let is_json = Path::new(path)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
            let parsed = if is_json {
                forwarding_spec::parse_json(&content)
            } else {
                forwarding_spec::parse_yaml(&content)
            };
            let spec =
                parsed.with_context(|| format!("Failed to parse forwarding manifest: {path}"))?;

            let enabled = spec.enabled_sources();
            info!("Derived sources [{}] from {}", enabled, path);
            return Ok(enabled);
        }

        match &self.sources {
            Some(list) => EnabledSources::parse_list(list)
                .with_context(|| format!("Invalid source list: {list}")),
            None => bail!("No sources selected. Pass --sources or --forwarding."),
        }
    }
}

/// Parses the `--format` flag.
pub fn parse_format(format: &str) -> Result<OutputFormat> {
    match format.to_lowercase().as_str() {
        "text" | "conf" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        _ => bail!("Unknown output format: {format}. Use 'text' or 'json'."),
    }
}

/// Writes content to a file, or to stdout when no path is given.
pub fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("Failed to write output file: {path}"))?;
            info!("Output written to: {}", path);
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .context("Failed to write to stdout")?;
            stdout.flush().context("Failed to flush stdout")?;
        }
    }
    Ok(())
}
