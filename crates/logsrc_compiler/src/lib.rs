//! Log source category to fluentd `<source>` stanza compiler.
//!
//! This crate is **pure and deterministic**:
//! - No I/O (outside explicit lockfile load/save)
//! - No environment lookups; deferred `#{ENV[...]}` expressions are emitted
//!   as literal text for the agent to resolve
//! - Same enabled set always produces byte-identical stanzas
//!
//! # Example
//!
//! ```rust,ignore
//! use forwarding_spec::{EnabledSources, LogSourceType};
//! use logsrc_compiler::Compiler;
//!
//! let enabled: EnabledSources = [LogSourceType::App, LogSourceType::Infra].into_iter().collect();
//! let stanzas = Compiler::new().compile(&enabled)?;
//! assert_eq!(stanzas.len(), 2);
//! ```

#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::format_push_string)]
#![allow(clippy::uninlined_format_args)]

pub mod compiler;
pub mod error;
pub mod lockfile;
pub mod report;
pub mod stanza;
pub mod templates;

pub use compiler::{CompileOptions, Compiler, OutputFormat};
pub use error::{Error, Result};
pub use lockfile::Lockfile;
pub use report::generate_source_report;
pub use stanza::{ParserKind, StanzaDefinition, StanzaTable};
