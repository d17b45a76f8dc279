//! Two-way conversion to and from the canonical [`Signal`] shape.

use crate::signal::Signal;

/// A type that can be built from, and projected to, a [`Signal`].
///
/// Richer event wrappers (for example [`TimedSignal`](crate::TimedSignal),
/// which adds a virtual timestamp) implement this so consumers that only
/// care about the bare lifecycle event can work with them generically.
/// `Signal` itself implements it as the identity.
pub trait SignalConvertible {
    /// Element type of the stream.
    type Input;
    /// Error type the stream can fail with.
    type Failure: std::error::Error;

    /// Construct from the canonical shape.
    fn from_signal(signal: Signal<Self::Input, Self::Failure>) -> Self;

    /// Borrow the canonical shape.
    fn signal(&self) -> &Signal<Self::Input, Self::Failure>;

    /// Consume into the canonical shape.
    fn into_signal(self) -> Signal<Self::Input, Self::Failure>;
}

impl<I, F: std::error::Error> SignalConvertible for Signal<I, F> {
    type Input = I;
    type Failure = F;

    #[inline]
    fn from_signal(signal: Signal<I, F>) -> Self {
        signal
    }

    #[inline]
    fn signal(&self) -> &Signal<I, F> {
        self
    }

    #[inline]
    fn into_signal(self) -> Signal<I, F> {
        self
    }
}

/// Compare two convertibles by their canonical projections.
///
/// Extra metadata on either side is ignored, so a timed recording can be
/// checked against bare expected signals.
#[must_use]
pub fn same_signal<A, B>(lhs: &A, rhs: &B) -> bool
where
    A: SignalConvertible,
    B: SignalConvertible<Input = A::Input, Failure = A::Failure>,
    A::Input: PartialEq,
    A::Failure: PartialEq,
{
    lhs.signal() == rhs.signal()
}
