//! Element-by-element comparison of recorded signal sequences.

use std::fmt;

use itertools::{EitherOrBoth, Itertools};

use crate::convertible::SignalConvertible;
use crate::signal::Signal;

/// The first point where an observed sequence departs from the expected one.
#[derive(Debug, PartialEq, Eq)]
pub enum Divergence<'a, I, F> {
    /// Both sequences have a signal at `index`, and they differ.
    Mismatch {
        index: usize,
        expected: &'a Signal<I, F>,
        actual: &'a Signal<I, F>,
    },
    /// The observed sequence ended before `index`.
    Missing {
        index: usize,
        expected: &'a Signal<I, F>,
    },
    /// The observed sequence has an extra signal at `index`.
    Unexpected {
        index: usize,
        actual: &'a Signal<I, F>,
    },
}

impl<I, F> Clone for Divergence<'_, I, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I, F> Copy for Divergence<'_, I, F> {}

impl<I, F> Divergence<'_, I, F> {
    /// Position of the first differing signal.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Mismatch { index, .. }
            | Self::Missing { index, .. }
            | Self::Unexpected { index, .. } => *index,
        }
    }
}

impl<I: fmt::Debug, F: fmt::Debug> fmt::Display for Divergence<'_, I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mismatch {
                index,
                expected,
                actual,
            } => write!(f, "signal {index}: expected {expected:?}, got {actual:?}"),
            Self::Missing { index, expected } => {
                write!(f, "signal {index}: expected {expected:?}, got end of sequence")
            }
            Self::Unexpected { index, actual } => {
                write!(f, "signal {index}: expected end of sequence, got {actual:?}")
            }
        }
    }
}

/// Find the first index where `actual` differs from `expected`.
///
/// Items are compared by their canonical [`Signal`] projection, so a timed
/// recording can be checked against bare expectations. Returns `None` when
/// both sequences have the same length and every pair is equal.
///
/// ```
/// use sigtrace_core::{first_divergence, Signal};
///
/// #[derive(Debug, PartialEq, thiserror::Error)]
/// #[error("timed out")]
/// struct Timeout;
///
/// let expected: [Signal<i32, Timeout>; 2] = [Signal::subscription(), Signal::finished()];
/// let actual: [Signal<i32, Timeout>; 2] = [Signal::subscription(), Signal::failed(Timeout)];
///
/// let divergence = first_divergence(&expected, &actual);
/// assert_eq!(divergence.map(|d| d.index()), Some(1));
/// ```
///
/// Payloads without equality cannot be compared:
///
/// ```compile_fail
/// use sigtrace_core::{first_divergence, Signal};
///
/// #[derive(Debug)]
/// struct Opaque;
///
/// #[derive(Debug, PartialEq, thiserror::Error)]
/// #[error("timed out")]
/// struct Timeout;
///
/// let signals: [Signal<Opaque, Timeout>; 1] = [Signal::input(Opaque)];
/// let _ = first_divergence(&signals, &signals);
/// ```
pub fn first_divergence<'a, A, B>(
    expected: &'a [A],
    actual: &'a [B],
) -> Option<Divergence<'a, A::Input, A::Failure>>
where
    A: SignalConvertible,
    B: SignalConvertible<Input = A::Input, Failure = A::Failure>,
    A::Input: PartialEq,
    A::Failure: PartialEq,
{
    expected
        .iter()
        .zip_longest(actual)
        .enumerate()
        .find_map(|(index, pair)| match pair {
            EitherOrBoth::Both(lhs, rhs) => {
                let (expected, actual) = (lhs.signal(), rhs.signal());
                (expected != actual).then_some(Divergence::Mismatch {
                    index,
                    expected,
                    actual,
                })
            }
            EitherOrBoth::Left(lhs) => Some(Divergence::Missing {
                index,
                expected: lhs.signal(),
            }),
            EitherOrBoth::Right(rhs) => Some(Divergence::Unexpected {
                index,
                actual: rhs.signal(),
            }),
        })
}
