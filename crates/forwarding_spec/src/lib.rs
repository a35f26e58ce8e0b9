//! Log-forwarding model for logsrc.
//!
//! This crate provides:
//! - The closed set of log source categories ([`LogSourceType`])
//! - The enabled-set type handed to the compiler ([`EnabledSources`])
//! - A typed subset of the log-forwarding resource, with YAML/JSON parsing
//!   and validation
//!
//! # Example
//!
//! ```rust,ignore
//! use forwarding_spec::{parse_yaml, LogSourceType};
//!
//! let input = r#"
//! disableDefaultForwarding: true
//! outputs:
//!   - name: store
//!     type: elasticsearch
//!     endpoint: es.svc:9200
//! pipelines:
//!   - name: audit-logs
//!     inputSource: logs.audit
//!     outputRefs: [store]
//! "#;
//!
//! let spec = parse_yaml(input)?;
//! assert!(spec.enabled_sources().contains(LogSourceType::Audit));
//! ```

#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod model;
pub mod parser;
pub mod source;

pub use error::{Error, Result};
pub use model::{LogForwardingSpec, OutputSpec, PipelineSpec};
pub use parser::{parse_json, parse_yaml, to_yaml};
pub use source::{EnabledSources, LogSourceType};
