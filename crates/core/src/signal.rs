//! The lifecycle signal of a stream.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::completion::Completion;

/// One observed moment in a stream's lifecycle.
///
/// A well-formed stream produces one [`Signal::Subscription`], then any
/// number of [`Signal::Input`], then at most one [`Signal::Completion`]. A
/// `Signal` is a single event in isolation and does not check that order;
/// use [`SignalSequence`](crate::SignalSequence) when it matters.
///
/// Equality is only available when both payload types have it:
///
/// ```
/// use sigtrace_core::{Completion, Signal};
///
/// let a: Signal<i32, String> = Signal::input(5);
/// assert_eq!(a, Signal::input(5));
/// assert_ne!(a, Signal::input(6));
/// assert_ne!(a, Signal::subscription());
/// assert_ne!(Signal::<i32, String>::finished(), Signal::failed("boom".to_string()));
/// assert_eq!(
///     Signal::<i32, String>::completion(Completion::Finished),
///     Signal::finished()
/// );
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal<I, F> {
    /// A consumer has begun observing the stream.
    Subscription,
    /// The stream produced a value.
    Input(I),
    /// The stream ended.
    Completion(Completion<F>),
}

impl<I, F> Signal<I, F> {
    /// Create a subscription signal.
    #[must_use]
    pub const fn subscription() -> Self {
        Self::Subscription
    }

    /// Create an input signal carrying `value`.
    pub const fn input(value: I) -> Self {
        Self::Input(value)
    }

    /// Create a completion signal from a terminal outcome.
    pub const fn completion(result: Completion<F>) -> Self {
        Self::Completion(result)
    }

    /// Create a normal completion signal.
    #[must_use]
    pub const fn finished() -> Self {
        Self::Completion(Completion::Finished)
    }

    /// Create a failed completion signal.
    pub const fn failed(error: F) -> Self {
        Self::Completion(Completion::Failed(error))
    }

    /// Short variant name, for logs and mismatch reports.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Subscription => "subscription",
            Self::Input(_) => "input",
            Self::Completion(_) => "completion",
        }
    }

    #[must_use]
    pub const fn is_subscription(&self) -> bool {
        matches!(self, Self::Subscription)
    }

    #[must_use]
    pub const fn is_input(&self) -> bool {
        matches!(self, Self::Input(_))
    }

    #[must_use]
    pub const fn is_completion(&self) -> bool {
        matches!(self, Self::Completion(_))
    }

    /// Borrow the input value, if this is an input signal.
    #[must_use]
    pub const fn as_input(&self) -> Option<&I> {
        match self {
            Self::Input(value) => Some(value),
            _ => None,
        }
    }

    /// Borrow the terminal outcome, if this is a completion signal.
    #[must_use]
    pub const fn as_completion(&self) -> Option<&Completion<F>> {
        match self {
            Self::Completion(result) => Some(result),
            _ => None,
        }
    }

    /// Take the input value, if this is an input signal.
    pub fn into_input(self) -> Option<I> {
        match self {
            Self::Input(value) => Some(value),
            _ => None,
        }
    }

    /// Transform the input payload, keeping the variant.
    pub fn map_input<J>(self, f: impl FnOnce(I) -> J) -> Signal<J, F> {
        match self {
            Self::Subscription => Signal::Subscription,
            Self::Input(value) => Signal::Input(f(value)),
            Self::Completion(result) => Signal::Completion(result),
        }
    }

    /// Transform the failure payload, keeping the variant.
    pub fn map_failure<G>(self, f: impl FnOnce(F) -> G) -> Signal<I, G> {
        match self {
            Self::Subscription => Signal::Subscription,
            Self::Input(value) => Signal::Input(value),
            Self::Completion(result) => Signal::Completion(result.map_failure(f)),
        }
    }
}

impl<I: PartialEq, F: PartialEq> PartialEq for Signal<I, F> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Subscription, Self::Subscription) => true,
            (Self::Input(lhs), Self::Input(rhs)) => lhs == rhs,
            (Self::Completion(lhs), Self::Completion(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

impl<I: Eq, F: Eq> Eq for Signal<I, F> {}

/// Check whether two signals describe the same lifecycle event.
///
/// Same as `lhs == rhs`; useful as a function value when comparing
/// recordings element by element.
///
/// Both payload types must support equality:
///
/// ```compile_fail
/// use sigtrace_core::{signals_match, Signal};
///
/// struct Opaque;
///
/// let a: Signal<Opaque, String> = Signal::input(Opaque);
/// let b: Signal<Opaque, String> = Signal::input(Opaque);
/// signals_match(&a, &b);
/// ```
///
/// ```compile_fail
/// use sigtrace_core::Signal;
///
/// struct Opaque;
///
/// let a: Signal<u8, Opaque> = Signal::failed(Opaque);
/// let b: Signal<u8, Opaque> = Signal::failed(Opaque);
/// let _ = a == b;
/// ```
#[must_use]
pub fn signals_match<I: PartialEq, F: PartialEq>(lhs: &Signal<I, F>, rhs: &Signal<I, F>) -> bool {
    lhs == rhs
}

impl<I: fmt::Display, F: fmt::Display> fmt::Display for Signal<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Subscription => write!(f, "subscription"),
            Self::Input(value) => write!(f, "input({value})"),
            Self::Completion(result) => write!(f, "completion({result})"),
        }
    }
}

impl<I, F> From<Completion<F>> for Signal<I, F> {
    fn from(result: Completion<F>) -> Self {
        Self::Completion(result)
    }
}
