//! Homework Notifier Library
//!
//! Exposes the poll loop and its components for the binary and for tests.

pub mod config;
pub mod formatters;
pub mod logging;
pub mod notifier;
pub mod poller;

pub use config::{Config, NotifyFailurePolicy};
pub use notifier::Notifier;
pub use poller::{PollState, Poller, TickOutcome};
