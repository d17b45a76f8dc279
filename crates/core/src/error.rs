//! Error types for sequence validation and configuration.
//!
//! A single [`Signal`](crate::Signal) never fails to construct or compare.
//! These errors only come from the opt-in pieces layered on top of it:
//! [`SignalSequence`](crate::SignalSequence) ordering checks and
//! [`SequenceConfig`](crate::SequenceConfig) parsing.

use thiserror::Error;

/// Result type alias for sigtrace operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for sigtrace operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // Ordering violations
    #[error("{kind} signal received before subscription")]
    NotSubscribed { kind: &'static str },

    #[error("subscription signal received twice")]
    DuplicateSubscription,

    #[error("subscription signal received after the stream started without one")]
    LateSubscription,

    #[error("{kind} signal received after completion")]
    AfterCompletion { kind: &'static str },

    #[error("input limit of {limit} exceeded")]
    InputLimitExceeded { limit: usize },

    // Configuration errors
    #[error("TOML parse error: {reason}")]
    ConfigParse { reason: String },
}

impl Error {
    /// Create a not-subscribed error for a signal of the given kind.
    #[must_use]
    pub const fn not_subscribed(kind: &'static str) -> Self {
        Self::NotSubscribed { kind }
    }

    /// Create an after-completion error for a signal of the given kind.
    #[must_use]
    pub const fn after_completion(kind: &'static str) -> Self {
        Self::AfterCompletion { kind }
    }

    /// Create an input limit error.
    #[must_use]
    pub const fn input_limit_exceeded(limit: usize) -> Self {
        Self::InputLimitExceeded { limit }
    }

    /// Create a configuration parse error.
    pub fn config_parse(reason: impl Into<String>) -> Self {
        Self::ConfigParse {
            reason: reason.into(),
        }
    }

    /// Whether this error is an ordering violation rather than a config problem.
    #[must_use]
    pub const fn is_ordering_violation(&self) -> bool {
        !matches!(self, Self::ConfigParse { .. })
    }
}
