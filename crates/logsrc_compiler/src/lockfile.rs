//! Lockfile for verifying compiled source configuration.
//!
//! A lockfile pins what a given enabled set compiled to:
//! - The enabled source names and the output format
//! - A hash of every emitted stanza, in order
//! - A hash of the rendered output
//!
//! Re-running the compiler and comparing against the lockfile detects any
//! drift in the emitted text.

use crate::compiler::{CompileOptions, Compiler, OutputFormat};
use crate::error::Result;
use chrono::{SecondsFormat, Utc};
use forwarding_spec::EnabledSources;
use serde::{Deserialize, Serialize};
use std::path::Path;
use xxhash_rust::xxh64::xxh64;

/// Seed for xxhash to ensure deterministic hashing.
const HASH_SEED: u64 = 0x4C4F_4753_5243; // "LOGSRC" in hex

/// Current lockfile format version.
const FORMAT_VERSION: u32 = 1;

/// A source configuration lockfile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lockfile {
    /// Version of the lockfile format.
    pub version: u32,
    /// Enabled source type names, in sorted order.
    pub sources: Vec<String>,
    /// Format the output was rendered in.
    #[serde(default)]
    pub format: OutputFormat,
    /// Hash of each emitted stanza, in emission order.
    pub stanza_hashes: Vec<String>,
    /// Hash of the rendered output.
    pub compiled_hash: String,
    /// Timestamp when the lock was created (RFC 3339, UTC).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Lockfile {
    /// Creates a lockfile from an enabled set, the output format, its
    /// stanzas and the rendered output.
    #[must_use]
    pub fn new(
        enabled: &EnabledSources,
        format: OutputFormat,
        stanzas: &[String],
        rendered: &str,
    ) -> Self {
        Self {
            version: FORMAT_VERSION,
            sources: source_names(enabled),
            format,
            stanza_hashes: stanzas.iter().map(|s| hash_content(s)).collect(),
            compiled_hash: hash_content(rendered),
            created_at: None,
        }
    }

    /// Stamps the lockfile with the current time.
    #[must_use]
    pub fn with_timestamp(mut self) -> Self {
        self.created_at = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        self
    }

    /// A built-in compiler rendering in the locked format.
    #[must_use]
    pub fn compiler(&self) -> Compiler {
        Compiler::with_options(CompileOptions {
            format: self.format,
        })
    }

    /// Number of stanzas pinned by the lockfile.
    #[must_use]
    pub fn stanza_count(&self) -> usize {
        self.stanza_hashes.len()
    }

    /// Verifies that the enabled set and rendered output match the lockfile.
    ///
    /// Returns `true` if both match.
    #[must_use]
    pub fn verify(&self, enabled: &EnabledSources, rendered: &str) -> bool {
        self.verify_sources(enabled) && self.verify_compiled(rendered)
    }

    /// Verifies only the enabled set.
    #[must_use]
    pub fn verify_sources(&self, enabled: &EnabledSources) -> bool {
        self.sources == source_names(enabled)
    }

    /// Verifies only the rendered output hash.
    #[must_use]
    pub fn verify_compiled(&self, rendered: &str) -> bool {
        self.compiled_hash == hash_content(rendered)
    }

    /// Returns the positions of stanzas that differ from the lockfile.
    ///
    /// Positions beyond either list's length count as mismatches.
    #[must_use]
    pub fn mismatched_stanzas(&self, stanzas: &[String]) -> Vec<usize> {
        let len = self.stanza_hashes.len().max(stanzas.len());
        (0..len)
            .filter(|&i| {
                let locked = self.stanza_hashes.get(i);
                let current = stanzas.get(i).map(|s| hash_content(s));
                locked != current.as_ref()
            })
            .collect()
    }

    /// Loads a lockfile from a path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Saves the lockfile to a path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = self.to_json()?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// Serializes the lockfile to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a lockfile from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

fn source_names(enabled: &EnabledSources) -> Vec<String> {
    enabled.iter().map(|t| t.as_str().to_string()).collect()
}

/// Computes a deterministic hash of content.
fn hash_content(content: &str) -> String {
    let hash = xxh64(content.as_bytes(), HASH_SEED);
    format!("{hash:016x}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use forwarding_spec::LogSourceType;

    fn locked_as(
        enabled: &EnabledSources,
        format: OutputFormat,
    ) -> (Lockfile, Vec<String>, String) {
        let compiler = Compiler::with_options(CompileOptions { format });
        let stanzas = compiler.compile(enabled).unwrap();
        let rendered = compiler.render(enabled).unwrap();
        (
            Lockfile::new(enabled, format, &stanzas, &rendered),
            stanzas,
            rendered,
        )
    }

    fn locked(enabled: &EnabledSources) -> (Lockfile, Vec<String>, String) {
        locked_as(enabled, OutputFormat::Text)
    }

    #[test]
    fn hash_is_deterministic() {
        assert_eq!(hash_content("test content"), hash_content("test content"));
        assert_ne!(hash_content("content a"), hash_content("content b"));
    }

    #[test]
    fn lockfile_creation() {
        let enabled = EnabledSources::all();
        let (lockfile, _, _) = locked(&enabled);

        assert_eq!(lockfile.version, 1);
        assert_eq!(lockfile.sources, ["logs.app", "logs.infra", "logs.audit"]);
        assert_eq!(lockfile.stanza_count(), 5);
        assert_eq!(lockfile.compiled_hash.len(), 16);
    }

    #[test]
    fn lockfile_verification() {
        let enabled: EnabledSources = [LogSourceType::Audit].into_iter().collect();
        let (lockfile, _, rendered) = locked(&enabled);

        assert!(lockfile.verify(&enabled, &rendered));

        let other: EnabledSources = [LogSourceType::App].into_iter().collect();
        assert!(!lockfile.verify(&other, &rendered));
        assert!(!lockfile.verify(&enabled, "different"));
    }

    #[test]
    fn mismatched_stanzas_reports_positions() {
        let enabled: EnabledSources = [LogSourceType::Audit].into_iter().collect();
        let (lockfile, mut stanzas, _) = locked(&enabled);

        assert!(lockfile.mismatched_stanzas(&stanzas).is_empty());

        stanzas[1].push_str("# drift\n");
        assert_eq!(lockfile.mismatched_stanzas(&stanzas), [1]);

        stanzas.truncate(1);
        assert_eq!(lockfile.mismatched_stanzas(&stanzas), [1, 2]);
    }

    #[test]
    fn lockfile_roundtrip() {
        let (lockfile, _, _) = locked(&EnabledSources::all());

        let json = lockfile.to_json().unwrap();
        let parsed = Lockfile::from_json(&json).unwrap();

        assert_eq!(lockfile, parsed);
    }

    #[test]
    fn timestamp_generation() {
        let (lockfile, _, _) = locked(&EnabledSources::new());
        let lockfile = lockfile.with_timestamp();

        let ts = lockfile.created_at.unwrap();
        assert!(ts.contains('T'));
        assert!(ts.ends_with('Z'));
    }

    #[test]
    fn json_lock_roundtrip_verifies_in_locked_format() {
        let enabled: EnabledSources = [LogSourceType::App, LogSourceType::Audit]
            .into_iter()
            .collect();
        let (lockfile, _, rendered) = locked_as(&enabled, OutputFormat::Json);

        let json = lockfile.to_json().unwrap();
        assert!(json.contains("\"format\": \"json\""));
        let parsed = Lockfile::from_json(&json).unwrap();
        assert_eq!(parsed.format, OutputFormat::Json);

        let compiler = parsed.compiler();
        let stanzas = compiler.compile(&enabled).unwrap();
        let rerendered = compiler.render(&enabled).unwrap();
        assert_eq!(rerendered, rendered);
        assert!(parsed.verify(&enabled, &rerendered));
        assert!(parsed.mismatched_stanzas(&stanzas).is_empty());

        let as_text = Compiler::new().render(&enabled).unwrap();
        assert!(!parsed.verify(&enabled, &as_text));
    }

    #[test]
    fn lock_without_format_defaults_to_text() {
        let json = r#"{
  "version": 1,
  "sources": ["logs.infra"],
  "stanza_hashes": [],
  "compiled_hash": "0000000000000000"
}"#;
        let parsed = Lockfile::from_json(json).unwrap();
        assert_eq!(parsed.format, OutputFormat::Text);
        assert_eq!(parsed.compiler().format(), OutputFormat::Text);
    }
}
