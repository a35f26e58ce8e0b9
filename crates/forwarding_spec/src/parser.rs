//! YAML/JSON loading of forwarding specs.
//!
//! Accepts either a bare spec or a full resource manifest carrying the spec
//! under its `spec` key. Parsed specs are validated before being returned.

use crate::error::{Error, Result};
use crate::model::LogForwardingSpec;
use serde::Deserialize;
use tracing::debug;

#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Resource { spec: LogForwardingSpec },
    Spec(LogForwardingSpec),
}

impl Document {
    fn into_spec(self) -> LogForwardingSpec {
        match self {
            Self::Resource { spec } | Self::Spec(spec) => spec,
        }
    }
}

/// Parses and validates a forwarding spec from YAML.
///
/// # Errors
///
/// Returns an error if the input is empty, is not valid YAML for the
/// model, or fails [`LogForwardingSpec::validate`].
pub fn parse_yaml(input: &str) -> Result<LogForwardingSpec> {
    ensure_not_empty(input)?;
    let document: Document = serde_yaml::from_str(input)?;
    finish(document.into_spec())
}

/// Parses and validates a forwarding spec from JSON.
///
/// # Errors
///
/// Returns an error if the input is empty, is not valid JSON for the
/// model, or fails [`LogForwardingSpec::validate`].
pub fn parse_json(input: &str) -> Result<LogForwardingSpec> {
    ensure_not_empty(input)?;
    let document: Document = serde_json::from_str(input)?;
    finish(document.into_spec())
}

/// Serializes a spec back to YAML.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_yaml(spec: &LogForwardingSpec) -> Result<String> {
    Ok(serde_yaml::to_string(spec)?)
}

fn ensure_not_empty(input: &str) -> Result<()> {
    if input.trim().is_empty() {
        return Err(Error::Validation("empty forwarding document".into()));
    }
    Ok(())
}

fn finish(spec: LogForwardingSpec) -> Result<LogForwardingSpec> {
    spec.validate()?;
    debug!(
        "Parsed forwarding spec with {} outputs and {} pipelines",
        spec.outputs.len(),
        spec.pipelines.len()
    );
    Ok(spec)
}
