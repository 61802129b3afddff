//! Poll loop: fetch, validate, format, notify, sleep, repeat.
//!
//! All state lives in [`PollState`], owned by the [`Poller`] and threaded
//! through iterations. The loop never exits on a runtime error.

use chrono::Utc;
use homework_rust_core::clients::{HomeworkSource, MessageSink};
use homework_rust_core::models::response::{check_response, current_date};
use homework_rust_core::HomeworkResult;
use log::{debug, error, info};
use std::time::Duration;

use crate::config::{Config, NotifyFailurePolicy};
use crate::formatters::{format_failure, parse_status};
use crate::notifier::Notifier;

/// Mutable loop state carried between iterations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollState {
    /// Lower bound (Unix seconds) of the next query window
    pub cursor: i64,
    /// Most recently delivered notification text
    pub last_message: String,
}

impl PollState {
    pub fn new(cursor: i64) -> Self {
        Self {
            cursor,
            last_message: String::new(),
        }
    }
}

/// Result of a single iteration, mostly for logging and tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Response had no homeworks
    NoUpdates,
    /// Formatted message equals the last one sent
    Unchanged,
    /// Status message delivered
    Notified,
    /// Status message could not be delivered
    NotDelivered,
    /// Iteration failed with the given error kind
    Failed(&'static str),
}

/// Cursor for the first poll: now minus the configured lookback
pub fn initial_cursor(lookback_secs: i64) -> i64 {
    Utc::now().timestamp().saturating_sub(lookback_secs)
}

pub struct Poller<H, S> {
    source: H,
    notifier: Notifier<S>,
    retry_period: Duration,
    policy: NotifyFailurePolicy,
    state: PollState,
}

impl<H: HomeworkSource, S: MessageSink> Poller<H, S> {
    pub fn new(
        source: H,
        sink: S,
        retry_period: Duration,
        policy: NotifyFailurePolicy,
        cursor: i64,
    ) -> Self {
        Self {
            source,
            notifier: Notifier::new(sink),
            retry_period,
            policy,
            state: PollState::new(cursor),
        }
    }

    pub fn from_config(cfg: &Config, source: H, sink: S) -> Self {
        Self::new(
            source,
            sink,
            cfg.retry_period,
            cfg.notify_failure_policy,
            initial_cursor(cfg.lookback_secs),
        )
    }

    pub fn state(&self) -> &PollState {
        &self.state
    }

    pub fn source(&self) -> &H {
        &self.source
    }

    pub fn sink(&self) -> &S {
        self.notifier.sink()
    }

    /// Poll forever, sleeping `retry_period` after every iteration.
    pub async fn run(&mut self) {
        info!(
            "Polling homework statuses every {}s starting from_date={}",
            self.retry_period.as_secs(),
            self.state.cursor
        );
        loop {
            let outcome = self.tick().await;
            debug!("Iteration finished: {:?}", outcome);
            tokio::time::sleep(self.retry_period).await;
        }
    }

    /// One iteration. Errors are reported to the user and swallowed.
    pub async fn tick(&mut self) -> TickOutcome {
        match self.poll_once().await {
            Ok(outcome) => outcome,
            Err(err) => {
                let message = format_failure(&err);
                error!("{} (kind={})", message, err.kind());

                if message != self.state.last_message {
                    let delivered = self.notifier.notify(&message).await;
                    if delivered || self.policy == NotifyFailurePolicy::Drop {
                        self.state.last_message = message;
                    }
                }
                TickOutcome::Failed(err.kind())
            }
        }
    }

    async fn poll_once(&mut self) -> HomeworkResult<TickOutcome> {
        let response = self.source.get_api_answer(self.state.cursor).await?;
        let homeworks = check_response(&response)?;

        let Some(homework) = homeworks.first() else {
            debug!("No new homework statuses since {}", self.state.cursor);
            return Ok(TickOutcome::NoUpdates);
        };

        let message = parse_status(homework)?;
        if message == self.state.last_message {
            debug!("Status unchanged, nothing to send");
            return Ok(TickOutcome::Unchanged);
        }

        let delivered = self.notifier.notify(&message).await;
        if !delivered && self.policy == NotifyFailurePolicy::RetryNextCycle {
            return Ok(TickOutcome::NotDelivered);
        }

        self.state.last_message = message;
        if let Some(ts) = current_date(&response) {
            self.state.cursor = ts;
        }

        Ok(if delivered {
            TickOutcome::Notified
        } else {
            TickOutcome::NotDelivered
        })
    }
}
