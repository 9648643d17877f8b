#![forbid(unsafe_code)]

//! Panel-set configuration.
//!
//! A [`PanelSetConfig`] is the one input the model accepts: the ordered item
//! list (required, non-empty), the open policy, whether panels start open, and
//! the filter palette offered to the user. With the `serde` feature the whole
//! configuration deserializes from JSON/YAML-derived values, including filter
//! conditions in their declarative string form.

use crate::filter::Filter;
use crate::item::Item;
use crate::state::OpenPolicy;
use std::fmt;

/// Fatal configuration errors, raised synchronously at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The configuration supplied no items.
    NoItems,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoItems => write!(f, "panel set configuration requires at least one item"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Configuration for a panel set.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanelSetConfig {
    /// The ordered items; order is identity and never changes at runtime.
    pub items: Vec<Item>,
    /// Open policy; classic single-open accordion behavior by default.
    #[cfg_attr(feature = "serde", serde(default))]
    pub policy: OpenPolicy,
    /// Whether panels start open (subject to the policy's tie-break).
    #[cfg_attr(
        feature = "serde",
        serde(default, alias = "always_open_at_start")
    )]
    pub open_at_start: bool,
    /// Filter palette presented to the user, in configured order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub filters: Vec<Filter>,
}

impl PanelSetConfig {
    /// Create a configuration with the given items and all defaults.
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            policy: OpenPolicy::default(),
            open_at_start: false,
            filters: Vec::new(),
        }
    }

    /// Set the open policy.
    #[must_use]
    pub fn policy(mut self, policy: OpenPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Start with panels open instead of closed.
    #[must_use]
    pub fn open_at_start(mut self, open: bool) -> Self {
        self.open_at_start = open;
        self
    }

    /// Set the filter palette.
    #[must_use]
    pub fn filters(mut self, filters: Vec<Filter>) -> Self {
        self.filters = filters;
        self
    }

    /// Validate the configuration.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.items.is_empty() {
            return Err(ConfigError::NoItems);
        }
        Ok(())
    }
}
