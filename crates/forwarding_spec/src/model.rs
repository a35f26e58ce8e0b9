//! Typed log-forwarding model.
//!
//! Only the parts of the resource spec that decide which log sources are
//! collected are modelled here.

use crate::error::{Error, Result};
use crate::source::{EnabledSources, LogSourceType};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Desired forwarding state of a log-forwarding resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogForwardingSpec {
    /// When false, every source is also shipped to the default log store.
    #[serde(default)]
    pub disable_default_forwarding: bool,
    /// Named destinations.
    #[serde(default)]
    pub outputs: Vec<OutputSpec>,
    /// Routes from a source category to outputs.
    #[serde(default)]
    pub pipelines: Vec<PipelineSpec>,
}

/// A forwarding destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputSpec {
    /// Unique output name referenced by pipelines.
    pub name: String,
    /// Output kind (`elasticsearch`, `forward`, `syslog`, ...).
    #[serde(rename = "type")]
    pub output_type: String,
    /// Destination address.
    pub endpoint: String,
    /// Secret holding TLS material for the destination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<OutputSecretSpec>,
}

/// Reference to a secret in the operator namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSecretSpec {
    /// Secret name.
    pub name: String,
}

/// Routes one log source category to one or more outputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineSpec {
    /// Unique pipeline name.
    pub name: String,
    /// Source category collected by this pipeline.
    pub input_source: LogSourceType,
    /// Names of outputs receiving the records.
    #[serde(default)]
    pub output_refs: Vec<String>,
}

impl LogForwardingSpec {
    /// Creates a spec with default forwarding enabled and no pipelines.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            disable_default_forwarding: false,
            outputs: Vec::new(),
            pipelines: Vec::new(),
        }
    }

    /// Disables forwarding to the default log store.
    #[must_use]
    pub const fn without_default_forwarding(mut self) -> Self {
        self.disable_default_forwarding = true;
        self
    }

    /// Adds an output.
    #[must_use]
    pub fn with_output(mut self, output: OutputSpec) -> Self {
        self.outputs.push(output);
        self
    }

    /// Adds a pipeline.
    #[must_use]
    pub fn with_pipeline(mut self, pipeline: PipelineSpec) -> Self {
        self.pipelines.push(pipeline);
        self
    }

    /// Derives the set of source categories that must be collected.
    ///
    /// With default forwarding on, all categories are collected regardless
    /// of pipelines; otherwise only the pipelines' input sources are.
    #[must_use]
    pub fn enabled_sources(&self) -> EnabledSources {
        if !self.disable_default_forwarding {
            return EnabledSources::all();
        }
        self.pipelines.iter().map(|p| p.input_source).collect()
    }

    /// Checks naming and reference consistency.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if an output or pipeline name is empty
    /// or duplicated, or a pipeline references an undeclared output.
    pub fn validate(&self) -> Result<()> {
        let mut outputs = HashSet::new();
        for output in &self.outputs {
            if output.name.trim().is_empty() {
                return Err(Error::Validation("output name must not be empty".into()));
            }
            if !outputs.insert(output.name.as_str()) {
                return Err(Error::Validation(format!(
                    "duplicate output name '{}'",
                    output.name
                )));
            }
        }

        let mut pipelines = HashSet::new();
        for pipeline in &self.pipelines {
            if pipeline.name.trim().is_empty() {
                return Err(Error::Validation("pipeline name must not be empty".into()));
            }
            if !pipelines.insert(pipeline.name.as_str()) {
                return Err(Error::Validation(format!(
                    "duplicate pipeline name '{}'",
                    pipeline.name
                )));
            }
            if let Some(missing) = pipeline
                .output_refs
                .iter()
                .find(|name| !outputs.contains(name.as_str()))
            {
                return Err(Error::Validation(format!(
                    "pipeline '{}' references unknown output '{}'",
                    pipeline.name, missing
                )));
            }
        }

        Ok(())
    }
}

impl OutputSpec {
    /// Creates an output without a secret.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        output_type: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            output_type: output_type.into(),
            endpoint: endpoint.into(),
            secret: None,
        }
    }
}

impl PipelineSpec {
    /// Creates a pipeline.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        input_source: LogSourceType,
        output_refs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            input_source,
            output_refs: output_refs.into_iter().map(Into::into).collect(),
        }
    }
}
