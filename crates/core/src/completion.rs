//! Terminal outcome of a stream.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a stream ended: normally, or with a typed failure.
///
/// Carried by [`Signal::Completion`](crate::Signal::Completion). The failure
/// value is stored as-is; nothing here inspects or wraps it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Completion<F> {
    /// The stream ended normally.
    Finished,
    /// The stream ended with an error.
    Failed(F),
}

impl<F> Completion<F> {
    /// Check if the stream ended normally.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self, Self::Finished)
    }

    /// Check if the stream ended with an error.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Borrow the failure, if any.
    #[must_use]
    pub const fn failure(&self) -> Option<&F> {
        match self {
            Self::Finished => None,
            Self::Failed(error) => Some(error),
        }
    }

    /// Transform the failure while keeping the outcome.
    pub fn map_failure<G>(self, f: impl FnOnce(F) -> G) -> Completion<G> {
        match self {
            Self::Finished => Completion::Finished,
            Self::Failed(error) => Completion::Failed(f(error)),
        }
    }

    /// Convert into a `Result`, with `Finished` as `Ok(())`.
    ///
    /// # Errors
    ///
    /// Returns the stored failure when the stream ended with an error.
    pub fn into_result(self) -> Result<(), F> {
        match self {
            Self::Finished => Ok(()),
            Self::Failed(error) => Err(error),
        }
    }
}

impl<F> From<Result<(), F>> for Completion<F> {
    fn from(result: Result<(), F>) -> Self {
        match result {
            Ok(()) => Self::Finished,
            Err(error) => Self::Failed(error),
        }
    }
}

impl<F: PartialEq> PartialEq for Completion<F> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Finished, Self::Finished) => true,
            (Self::Failed(lhs), Self::Failed(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

impl<F: Eq> Eq for Completion<F> {}

impl<F: fmt::Display> fmt::Display for Completion<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finished => write!(f, "finished"),
            Self::Failed(error) => write!(f, "failed: {error}"),
        }
    }
}
