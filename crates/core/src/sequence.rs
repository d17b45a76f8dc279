//! Ordered recording of one stream's signals.
//!
//! [`SignalSequence`] only accepts signals in a legal lifecycle order:
//!
//! ```text
//! AwaitingSubscription ──Subscription──► Active ──Completion──► Completed
//!                                         │  ▲
//!                                         └──┘ Input
//! ```
//!
//! Anything after `Completed` is rejected, as is a second subscription.
//! A rejected push leaves the recording untouched.

use std::fmt;

use tracing::{debug, trace};

use crate::completion::Completion;
use crate::config::SequenceConfig;
use crate::error::{Error, Result};
use crate::signal::Signal;

/// Where a stream is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamPhase {
    /// No subscription yet.
    AwaitingSubscription,
    /// Subscribed; inputs may arrive.
    Active,
    /// Terminal: finished or failed.
    Completed,
}

impl StreamPhase {
    /// Check if this is the terminal phase.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for StreamPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::AwaitingSubscription => "awaiting_subscription",
            Self::Active => "active",
            Self::Completed => "completed",
        };
        write!(f, "{s}")
    }
}

/// A legally-ordered list of signals for a single stream.
#[derive(Debug, Clone)]
pub struct SignalSequence<I, F> {
    config: SequenceConfig,
    phase: StreamPhase,
    input_count: usize,
    subscribed: bool,
    signals: Vec<Signal<I, F>>,
}

impl<I, F> SignalSequence<I, F> {
    /// Create an empty sequence with the default rules.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SequenceConfig::default())
    }

    /// Create an empty sequence with the given rules.
    #[must_use]
    pub const fn with_config(config: SequenceConfig) -> Self {
        Self {
            config,
            phase: StreamPhase::AwaitingSubscription,
            input_count: 0,
            subscribed: false,
            signals: Vec::new(),
        }
    }

    /// Validate a whole recording under the default rules.
    ///
    /// # Errors
    ///
    /// Returns the first ordering violation found.
    pub fn from_signals(signals: impl IntoIterator<Item = Signal<I, F>>) -> Result<Self> {
        Self::from_signals_with_config(signals, SequenceConfig::default())
    }

    /// Validate a whole recording under the given rules.
    ///
    /// # Errors
    ///
    /// Returns the first ordering violation found.
    pub fn from_signals_with_config(
        signals: impl IntoIterator<Item = Signal<I, F>>,
        config: SequenceConfig,
    ) -> Result<Self> {
        signals
            .into_iter()
            .try_fold(Self::with_config(config), |mut sequence, signal| {
                sequence.push(signal)?;
                Ok(sequence)
            })
    }

    /// Append a signal if it is legal in the current phase.
    ///
    /// # Errors
    ///
    /// - [`Error::NotSubscribed`] for input or completion before a
    ///   subscription, when subscriptions are required
    /// - [`Error::DuplicateSubscription`] for a second subscription
    /// - [`Error::LateSubscription`] for a subscription after the stream
    ///   started implicitly
    /// - [`Error::AfterCompletion`] for anything after completion
    /// - [`Error::InputLimitExceeded`] when the configured input limit is hit
    pub fn push(&mut self, signal: Signal<I, F>) -> Result<()> {
        let kind = signal.kind();
        let next = self.next_phase(&signal).inspect_err(|e| {
            debug!(phase = %self.phase, kind, error = %e, "Rejected signal");
        })?;

        match signal {
            Signal::Subscription => self.subscribed = true,
            Signal::Input(_) => self.input_count = self.input_count.saturating_add(1),
            Signal::Completion(_) => {}
        }
        trace!(from = %self.phase, to = %next, kind, "Accepted signal");
        self.phase = next;
        self.signals.push(signal);
        Ok(())
    }

    fn next_phase(&self, signal: &Signal<I, F>) -> Result<StreamPhase> {
        let kind = signal.kind();
        match (self.phase, signal) {
            (StreamPhase::Completed, _) => Err(Error::after_completion(kind)),
            (StreamPhase::AwaitingSubscription, Signal::Subscription) => Ok(StreamPhase::Active),
            (StreamPhase::Active, Signal::Subscription) if self.subscribed => {
                Err(Error::DuplicateSubscription)
            }
            (StreamPhase::Active, Signal::Subscription) => Err(Error::LateSubscription),
            (StreamPhase::AwaitingSubscription, _) if self.config.require_subscription => {
                Err(Error::not_subscribed(kind))
            }
            (_, Signal::Input(_)) => self.check_input_limit().map(|()| StreamPhase::Active),
            (_, Signal::Completion(_)) => Ok(StreamPhase::Completed),
        }
    }

    fn check_input_limit(&self) -> Result<()> {
        match self.config.max_inputs {
            Some(limit) if self.input_count >= limit => Err(Error::input_limit_exceeded(limit)),
            _ => Ok(()),
        }
    }

    /// Get the current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> StreamPhase {
        self.phase
    }

    /// Get the rules this sequence enforces.
    #[must_use]
    pub const fn config(&self) -> &SequenceConfig {
        &self.config
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.signals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    /// Number of input signals recorded so far.
    #[must_use]
    pub const fn input_count(&self) -> usize {
        self.input_count
    }

    /// Whether a completion has been recorded.
    #[must_use]
    pub const fn is_terminated(&self) -> bool {
        self.phase.is_terminal()
    }

    /// The recorded signals, in order.
    #[must_use]
    pub fn signals(&self) -> &[Signal<I, F>] {
        &self.signals
    }

    /// The terminal outcome, once recorded.
    #[must_use]
    pub fn completion(&self) -> Option<&Completion<F>> {
        self.signals.last().and_then(Signal::as_completion)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Signal<I, F>> {
        self.signals.iter()
    }

    /// Give up the recording.
    #[must_use]
    pub fn into_signals(self) -> Vec<Signal<I, F>> {
        self.signals
    }
}

impl<I, F> Default for SignalSequence<I, F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, I, F> IntoIterator for &'a SignalSequence<I, F> {
    type Item = &'a Signal<I, F>;
    type IntoIter = std::slice::Iter<'a, Signal<I, F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<I, F> IntoIterator for SignalSequence<I, F> {
    type Item = Signal<I, F>;
    type IntoIter = std::vec::IntoIter<Signal<I, F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.signals.into_iter()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    type TestSignal = Signal<u32, &'static str>;
    type TestSequence = SignalSequence<u32, &'static str>;

    #[test]
    fn test_new_sequence_awaits_subscription() {
        let sequence = TestSequence::new();
        assert_eq!(sequence.phase(), StreamPhase::AwaitingSubscription);
        assert!(sequence.is_empty());
        assert_eq!(sequence.completion(), None);
    }

    #[test]
    fn test_full_lifecycle() {
        let mut sequence = TestSequence::new();
        sequence.push(TestSignal::subscription()).unwrap();
        assert_eq!(sequence.phase(), StreamPhase::Active);

        sequence.push(TestSignal::input(1)).unwrap();
        sequence.push(TestSignal::input(2)).unwrap();
        assert_eq!(sequence.input_count(), 2);
        assert_eq!(sequence.phase(), StreamPhase::Active);

        sequence.push(TestSignal::finished()).unwrap();
        assert!(sequence.is_terminated());
        assert_eq!(sequence.completion(), Some(&Completion::Finished));
        assert_eq!(sequence.len(), 4);
    }

    #[test]
    fn test_input_before_subscription_rejected() {
        let mut sequence = TestSequence::new();
        let result = sequence.push(TestSignal::input(1));
        assert_eq!(result, Err(Error::not_subscribed("input")));
        assert!(sequence.is_empty());
        assert_eq!(sequence.phase(), StreamPhase::AwaitingSubscription);
    }

    #[test]
    fn test_completion_before_subscription_rejected() {
        let mut sequence = TestSequence::new();
        let result = sequence.push(TestSignal::finished());
        assert_eq!(result, Err(Error::not_subscribed("completion")));
        assert!(sequence.is_empty());
        assert_eq!(sequence.phase(), StreamPhase::AwaitingSubscription);
    }

    #[test]
    fn test_subscription_after_implicit_start_rejected() {
        let config = SequenceConfig::new().with_require_subscription(false);
        let mut sequence = TestSequence::with_config(config);
        sequence.push(TestSignal::input(1)).unwrap();
        assert_eq!(sequence.phase(), StreamPhase::Active);

        assert_eq!(
            sequence.push(TestSignal::subscription()),
            Err(Error::LateSubscription)
        );
        assert_eq!(sequence.len(), 1);
        assert_eq!(sequence.phase(), StreamPhase::Active);
    }

    #[test]
    fn test_duplicate_subscription_rejected() {
        let mut sequence = TestSequence::new();
        sequence.push(TestSignal::subscription()).unwrap();
        assert_eq!(
            sequence.push(TestSignal::subscription()),
            Err(Error::DuplicateSubscription)
        );
        assert_eq!(sequence.len(), 1);
    }

    #[test]
    fn test_nothing_after_completion() {
        let mut sequence =
            TestSequence::from_signals([TestSignal::subscription(), TestSignal::failed("boom")])
                .unwrap();

        for signal in [
            TestSignal::subscription(),
            TestSignal::input(1),
            TestSignal::finished(),
        ] {
            let kind = signal.kind();
            assert_eq!(sequence.push(signal), Err(Error::after_completion(kind)));
        }
        assert_eq!(sequence.len(), 2);
        assert_eq!(sequence.completion(), Some(&Completion::Failed("boom")));
    }

    #[test]
    fn test_implicit_subscription_when_not_required() {
        let config = SequenceConfig::new().with_require_subscription(false);
        let sequence = TestSequence::from_signals_with_config(
            [TestSignal::input(1), TestSignal::finished()],
            config,
        )
        .unwrap();
        assert!(sequence.is_terminated());
        assert_eq!(sequence.input_count(), 1);
    }

    #[test]
    fn test_completion_without_inputs() {
        let sequence =
            TestSequence::from_signals([TestSignal::subscription(), TestSignal::finished()])
                .unwrap();
        assert_eq!(sequence.input_count(), 0);
        assert!(sequence.is_terminated());
    }

    #[test]
    fn test_input_limit() {
        let config = SequenceConfig::new().with_max_inputs(1);
        let mut sequence = TestSequence::with_config(config);
        sequence.push(TestSignal::subscription()).unwrap();
        sequence.push(TestSignal::input(1)).unwrap();
        assert_eq!(
            sequence.push(TestSignal::input(2)),
            Err(Error::input_limit_exceeded(1))
        );
        assert_eq!(sequence.input_count(), 1);
        assert_eq!(sequence.len(), 2);
        assert_eq!(sequence.phase(), StreamPhase::Active);
        sequence.push(TestSignal::finished()).unwrap();
    }

    #[test]
    fn test_iteration_in_order() {
        let signals = vec![
            TestSignal::subscription(),
            TestSignal::input(5),
            TestSignal::finished(),
        ];
        let sequence = TestSequence::from_signals(signals.clone()).unwrap();
        assert_eq!(sequence.iter().count(), 3);
        assert_eq!((&sequence).into_iter().collect::<Vec<_>>(), signals.iter().collect::<Vec<_>>());
        assert_eq!(sequence.into_signals(), signals);
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(StreamPhase::AwaitingSubscription.to_string(), "awaiting_subscription");
        assert_eq!(StreamPhase::Active.to_string(), "active");
        assert_eq!(StreamPhase::Completed.to_string(), "completed");
    }
}
