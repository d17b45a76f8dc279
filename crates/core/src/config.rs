//! Ordering rules for [`SignalSequence`](crate::SignalSequence).

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configures which orderings a [`SignalSequence`](crate::SignalSequence)
/// accepts.
///
/// Can be built in code or loaded from TOML; missing keys take their
/// defaults.
///
/// ```
/// use sigtrace_core::SequenceConfig;
///
/// let config = SequenceConfig::from_toml_str("max_inputs = 3").unwrap();
/// assert!(config.require_subscription);
/// assert_eq!(config.max_inputs, Some(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SequenceConfig {
    /// Reject input and completion signals that arrive before a subscription.
    /// When false, the first such signal implicitly starts the stream, and a
    /// subscription arriving after that is rejected as
    /// [`Error::LateSubscription`].
    pub require_subscription: bool,
    /// Upper bound on the number of input signals, if any.
    pub max_inputs: Option<usize>,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            require_subscription: true,
            max_inputs: None,
        }
    }
}

impl SequenceConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_require_subscription(mut self, require: bool) -> Self {
        self.require_subscription = require;
        self
    }

    #[must_use]
    pub const fn with_max_inputs(mut self, limit: usize) -> Self {
        self.max_inputs = Some(limit);
        self
    }

    /// Parse a configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] if the document is not valid TOML or
    /// contains unknown keys or mistyped values.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| Error::config_parse(e.to_string()))
    }
}
