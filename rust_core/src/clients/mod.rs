//! Remote service clients.
//!
//! The notifier only talks to two services: the homework review API it polls
//! and the Telegram Bot API it reports to. Both sit behind a trait so the
//! poll loop can be driven by in-memory fakes.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::HomeworkResult;

pub mod practicum;
pub mod telegram;

#[cfg(test)]
pub(crate) mod test_server;

pub use practicum::PracticumClient;
pub use telegram::TelegramClient;

/// Source of homework review statuses
#[async_trait]
pub trait HomeworkSource: Send + Sync {
    /// Fetch statuses changed since `from_date` (Unix seconds).
    ///
    /// Returns the decoded body unchecked; shape validation is the caller's job.
    async fn get_api_answer(&self, from_date: i64) -> HomeworkResult<Value>;
}

/// Destination for outgoing text notifications
#[async_trait]
pub trait MessageSink: Send + Sync {
    async fn send_message(&self, text: &str) -> HomeworkResult<()>;
}
