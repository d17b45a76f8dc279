//! Signals stamped with the virtual instant they were observed at.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::completion::Completion;
use crate::convertible::SignalConvertible;
use crate::signal::Signal;

/// A point on a virtual clock, in ticks.
///
/// The clock itself belongs to whatever scheduler drives the stream; this
/// type only stores and orders the readings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VirtualTime(u64);

impl VirtualTime {
    /// The start of virtual time.
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn new(ticks: u64) -> Self {
        Self(ticks)
    }

    /// Get the raw tick count.
    #[must_use]
    pub const fn ticks(self) -> u64 {
        self.0
    }

    /// Advance by `ticks`, clamping at the end of the clock.
    #[must_use]
    pub const fn saturating_add(self, ticks: u64) -> Self {
        Self(self.0.saturating_add(ticks))
    }
}

impl From<u64> for VirtualTime {
    fn from(ticks: u64) -> Self {
        Self(ticks)
    }
}

impl fmt::Display for VirtualTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// A [`Signal`] recorded at a [`VirtualTime`].
///
/// Equal to another `TimedSignal` only if both the time and the signal
/// match. Use [`same_signal`](crate::same_signal) to compare the bare events
/// and ignore timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimedSignal<I, F> {
    /// When the signal was observed.
    pub time: VirtualTime,
    /// What was observed.
    pub signal: Signal<I, F>,
}

impl<I, F> TimedSignal<I, F> {
    pub const fn new(time: VirtualTime, signal: Signal<I, F>) -> Self {
        Self { time, signal }
    }

    /// Subscription observed at `time`.
    #[must_use]
    pub const fn subscription(time: VirtualTime) -> Self {
        Self::new(time, Signal::Subscription)
    }

    /// Input observed at `time`.
    pub const fn input(time: VirtualTime, value: I) -> Self {
        Self::new(time, Signal::Input(value))
    }

    /// Completion observed at `time`.
    pub const fn completion(time: VirtualTime, result: Completion<F>) -> Self {
        Self::new(time, Signal::Completion(result))
    }
}

impl<I: PartialEq, F: PartialEq> PartialEq for TimedSignal<I, F> {
    fn eq(&self, other: &Self) -> bool {
        self.time == other.time && self.signal == other.signal
    }
}

impl<I: Eq, F: Eq> Eq for TimedSignal<I, F> {}

impl<I, F: std::error::Error> SignalConvertible for TimedSignal<I, F> {
    type Input = I;
    type Failure = F;

    /// Stamps the signal at [`VirtualTime::ZERO`].
    fn from_signal(signal: Signal<I, F>) -> Self {
        Self::new(VirtualTime::ZERO, signal)
    }

    fn signal(&self) -> &Signal<I, F> {
        &self.signal
    }

    fn into_signal(self) -> Signal<I, F> {
        self.signal
    }
}

impl<I: fmt::Display, F: fmt::Display> fmt::Display for TimedSignal<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.signal, self.time)
    }
}
