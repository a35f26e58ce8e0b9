//! Main compiler implementation.

use crate::error::Result;
use crate::stanza::StanzaTable;
use forwarding_spec::{EnabledSources, LogSourceType};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Output format for rendered stanzas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Stanzas as fluentd text, separated by newlines (default).
    #[default]
    Text,
    /// A JSON array of stanza strings.
    Json,
}

/// Compilation options.
#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    /// Output format used by [`Compiler::render`].
    pub format: OutputFormat,
}

/// Compiles an enabled set of log source types into fluentd `<source>`
/// stanzas.
///
/// This compiler is **pure and deterministic**:
/// - No I/O, no environment lookups
/// - Output order comes from the table's ranks only
/// - Same input always produces byte-identical output
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    table: StanzaTable,
    options: CompileOptions,
}

impl Compiler {
    /// Creates a compiler over the built-in table with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a compiler over the built-in table with the given options.
    #[must_use]
    pub fn with_options(options: CompileOptions) -> Self {
        Self {
            table: StanzaTable::builtin(),
            options,
        }
    }

    /// Creates a compiler over an explicitly built table.
    #[must_use]
    pub fn with_table(table: StanzaTable) -> Self {
        Self {
            table,
            options: CompileOptions::default(),
        }
    }

    /// The table this compiler emits from.
    #[must_use]
    pub const fn table(&self) -> &StanzaTable {
        &self.table
    }

    /// The format [`Compiler::render`] produces.
    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        self.options.format
    }

    /// Compiles the enabled set to an ordered list of stanzas.
    ///
    /// One stanza is emitted per table definition whose source type is
    /// enabled, in rank order. An empty set yields an empty list.
    ///
    /// # Errors
    ///
    /// Never fails for tables built through [`StanzaTable::new`] or the
    /// built-in table; the `Result` carries table failures for callers that
    /// compose construction and compilation.
    pub fn compile(&self, enabled: &EnabledSources) -> Result<Vec<String>> {
        let stanzas: Vec<String> = self
            .table
            .iter()
            .filter(|def| enabled.contains(def.source_type))
            .map(|def| {
                debug!("Emitting stanza '{}' (rank {})", def.id, def.rank);
                def.render()
            })
            .collect();

        debug!("Compiled {} stanzas for [{}]", stanzas.len(), enabled);
        Ok(stanzas)
    }

    /// Compiles and renders the stanzas in the configured output format.
    ///
    /// # Errors
    ///
    /// Returns an error if compilation or JSON serialization fails.
    pub fn render(&self, enabled: &EnabledSources) -> Result<String> {
        let stanzas = self.compile(enabled)?;

        match self.options.format {
            OutputFormat::Text => Ok(stanzas.join("\n")),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&stanzas)?),
        }
    }

    /// Number of stanzas a source type contributes when enabled.
    #[must_use]
    pub fn stanza_count(&self, source_type: LogSourceType) -> usize {
        self.table.definitions_for(source_type).count()
    }
}
