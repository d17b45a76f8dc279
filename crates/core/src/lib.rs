//! Lifecycle signals for observable streams.
//!
//! A stream's life is a subscription, zero or more inputs, and at most one
//! completion (finished, or failed with a typed error). This crate models
//! each of those moments as a [`Signal`] so test harnesses and recorders can
//! capture and compare what a producer emitted, independent of the stream
//! implementation.
//!
//! - **Signals**: [`Signal`] and its terminal outcome [`Completion`]
//! - **Conversion**: [`SignalConvertible`] for wrappers such as [`TimedSignal`]
//! - **Ordering**: [`SignalSequence`] accepts only legally-ordered recordings
//! - **Comparison**: [`first_divergence`] locates where two recordings differ
//!
//! # Example
//!
//! ```
//! use sigtrace_core::{first_divergence, Signal, SignalSequence};
//!
//! #[derive(Debug, Clone, PartialEq, thiserror::Error)]
//! #[error("timed out")]
//! struct Timeout;
//!
//! let recorded = SignalSequence::<i32, Timeout>::from_signals([
//!     Signal::subscription(),
//!     Signal::input(1),
//!     Signal::input(2),
//!     Signal::finished(),
//! ])?;
//!
//! let expected: [Signal<i32, Timeout>; 4] = [
//!     Signal::subscription(),
//!     Signal::input(1),
//!     Signal::input(2),
//!     Signal::finished(),
//! ];
//! assert_eq!(first_divergence(&expected, recorded.signals()), None);
//! # Ok::<(), sigtrace_core::Error>(())
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod completion;
pub mod config;
pub mod convertible;
pub mod divergence;
pub mod error;
pub mod sequence;
pub mod signal;
pub mod timed;

pub use completion::Completion;
pub use config::SequenceConfig;
pub use convertible::{same_signal, SignalConvertible};
pub use divergence::{first_divergence, Divergence};
pub use error::{Error, Result};
pub use sequence::{SignalSequence, StreamPhase};
pub use signal::{signals_match, Signal};
pub use timed::{TimedSignal, VirtualTime};
