//! Log source categories and the enabled set.
//!
//! [`LogSourceType`] is closed: every value a caller can hand to the
//! compiler is one of its variants, so no runtime validation of members is
//! needed once an [`EnabledSources`] exists.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A class of logs a user can enable for forwarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LogSourceType {
    /// Container logs of application workloads.
    #[serde(rename = "logs.app")]
    App,
    /// Node journal logs.
    #[serde(rename = "logs.infra")]
    Infra,
    /// Host, Kubernetes API server and `OpenShift` API server audit logs.
    #[serde(rename = "logs.audit")]
    Audit,
}

impl LogSourceType {
    /// Every source type.
    pub const ALL: [Self; 3] = [Self::App, Self::Infra, Self::Audit];

    /// Returns the resource wire name (`logs.app`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::App => "logs.app",
            Self::Infra => "logs.infra",
            Self::Audit => "logs.audit",
        }
    }
}

impl fmt::Display for LogSourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for LogSourceType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "logs.app" | "app" | "application" => Ok(Self::App),
            "logs.infra" | "infra" | "infrastructure" => Ok(Self::Infra),
            "logs.audit" | "audit" => Ok(Self::Audit),
            _ => Err(Error::UnknownSourceType(s.trim().to_string())),
        }
    }
}

/// The set of source types enabled for compilation.
///
/// Membership only: building the set from `[App, Infra]` or `[Infra, App]`
/// yields equal values, and duplicates collapse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnabledSources(BTreeSet<LogSourceType>);

impl EnabledSources {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Creates a set with every source type enabled.
    #[must_use]
    pub fn all() -> Self {
        LogSourceType::ALL.into_iter().collect()
    }

    /// Parses a comma-separated list such as `app,infra` or `logs.audit`.
    ///
    /// Blank entries are skipped, so an empty string yields an empty set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSourceType`] for an unrecognized entry.
    pub fn parse_list(list: &str) -> Result<Self> {
        list.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(LogSourceType::from_str)
            .collect()
    }

    /// Returns true if the source type is enabled.
    #[must_use]
    pub fn contains(&self, source_type: LogSourceType) -> bool {
        self.0.contains(&source_type)
    }

    /// Number of enabled source types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing is enabled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the enabled types in enum order.
    pub fn iter(&self) -> impl Iterator<Item = LogSourceType> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<LogSourceType> for EnabledSources {
    fn from_iter<I: IntoIterator<Item = LogSourceType>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for EnabledSources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = self.iter().map(LogSourceType::as_str).collect();
        f.write_str(&names.join(","))
    }
}
