//! Stanza definitions and the rank-ordered stanza table.

use crate::error::{Error, Result};
use crate::templates;
use forwarding_spec::LogSourceType;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

/// Parser block carried by a stanza.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParserKind {
    /// No `<parse>` block; records pass through as read.
    None,
    /// `multi_format`: JSON first, regexp on the CRI line format as fallback.
    MultiFormat,
    /// `viaq_host_audit` structured host audit parser.
    HostAudit,
    /// JSON keyed on `requestReceivedTimestamp`.
    Json,
}

impl ParserKind {
    /// Short human-readable description.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::None => "none (raw passthrough)",
            Self::MultiFormat => "multi_format (json, regexp fallback)",
            Self::HostAudit => "viaq_host_audit",
            Self::Json => "json (time_key requestReceivedTimestamp)",
        }
    }
}

impl fmt::Display for ParserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.describe())
    }
}

/// One emittable `<source>` stanza.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StanzaDefinition {
    /// Category that owns this stanza.
    pub source_type: LogSourceType,
    /// Global emission rank (ascending).
    pub rank: u32,
    /// The stanza's `@id`.
    pub id: Cow<'static, str>,
    /// Tag attached to matched records.
    pub tag: Cow<'static, str>,
    /// Label records are routed to, or empty when none.
    pub label: Cow<'static, str>,
    /// Parser block kind.
    pub parser: ParserKind,
    /// Literal stanza text.
    pub template: Cow<'static, str>,
}

impl StanzaDefinition {
    /// Creates a definition with no routing metadata.
    #[must_use]
    pub fn new(
        source_type: LogSourceType,
        rank: u32,
        id: impl Into<Cow<'static, str>>,
        template: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            source_type,
            rank,
            id: id.into(),
            tag: Cow::Borrowed(""),
            label: Cow::Borrowed(""),
            parser: ParserKind::None,
            template: template.into(),
        }
    }

    /// Sets the tag and label metadata.
    #[must_use]
    pub fn routed(
        mut self,
        tag: impl Into<Cow<'static, str>>,
        label: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.tag = tag.into();
        self.label = label.into();
        self
    }

    /// Sets the parser metadata.
    #[must_use]
    pub const fn with_parser(mut self, parser: ParserKind) -> Self {
        self.parser = parser;
        self
    }

    /// Renders the stanza. Templates are emitted verbatim.
    #[must_use]
    pub fn render(&self) -> String {
        self.template.to_string()
    }
}

/// All stanza definitions, sorted ascending by rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StanzaTable {
    definitions: Cow<'static, [StanzaDefinition]>,
}

impl StanzaTable {
    /// The built-in table shared by every default compiler.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            definitions: Cow::Borrowed(&templates::BUILTIN),
        }
    }

    /// Builds a table from arbitrary definitions, ordering them by rank.
    ///
    /// # Errors
    ///
    /// Returns an error if a template is blank, or if two definitions
    /// share a rank or an id.
    pub fn new(mut definitions: Vec<StanzaDefinition>) -> Result<Self> {
        let mut ids = HashSet::new();
        for def in &definitions {
            if def.template.trim().is_empty() {
                return Err(Error::EmptyTemplate {
                    id: def.id.to_string(),
                });
            }
            if !ids.insert(def.id.clone()) {
                return Err(Error::DuplicateId(def.id.to_string()));
            }
        }

        definitions.sort_by_key(|def| def.rank);
        if let Some(pair) = definitions.windows(2).find(|w| w[0].rank == w[1].rank) {
            return Err(Error::DuplicateRank {
                rank: pair[0].rank,
                first: pair[0].id.to_string(),
                second: pair[1].id.to_string(),
            });
        }

        debug!("Built stanza table with {} definitions", definitions.len());
        Ok(Self {
            definitions: Cow::Owned(definitions),
        })
    }

    /// Iterates definitions in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &StanzaDefinition> {
        self.definitions.iter()
    }

    /// Definitions owned by one source type, in rank order.
    pub fn definitions_for(
        &self,
        source_type: LogSourceType,
    ) -> impl Iterator<Item = &StanzaDefinition> {
        self.iter().filter(move |def| def.source_type == source_type)
    }

    /// Number of definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns true if the table holds no definitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for StanzaTable {
    fn default() -> Self {
        Self::builtin()
    }
}
