use anyhow::{anyhow, Context, Result};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use homework_rust_core::clients::{practicum, telegram};
use homework_rust_core::HomeworkError;

/// Credentials that must be present for the process to start
pub const REQUIRED_TOKENS: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

/// Default poll window lookback at startup (one month)
pub const ONE_MONTH_SECS: i64 = 2_629_743;

pub const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;

pub const DEFAULT_LOG_FILE: &str = "homework.log";

/// What to do with a message the sink failed to deliver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyFailurePolicy {
    /// Leave it unrecorded so the next cycle sends it again
    RetryNextCycle,
    /// Record it as sent anyway
    Drop,
}

#[derive(Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,

    pub practicum_endpoint: String,
    pub telegram_api_base_url: String,

    pub retry_period: Duration,
    pub lookback_secs: i64,
    pub notify_failure_policy: NotifyFailurePolicy,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("practicum_endpoint", &self.practicum_endpoint)
            .field("telegram_api_base_url", &self.telegram_api_base_url)
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("retry_period", &self.retry_period)
            .field("lookback_secs", &self.lookback_secs)
            .field("notify_failure_policy", &self.notify_failure_policy)
            .finish_non_exhaustive()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let missing: Vec<String> = REQUIRED_TOKENS
            .iter()
            .filter(|key| non_empty(&lookup, key).is_none())
            .map(|key| key.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(HomeworkError::CredentialMissing(missing).into());
        }

        let practicum_token = non_empty(&lookup, "PRACTICUM_TOKEN").unwrap_or_default();
        let telegram_token = non_empty(&lookup, "TELEGRAM_TOKEN").unwrap_or_default();
        let telegram_chat_id = non_empty(&lookup, "TELEGRAM_CHAT_ID").unwrap_or_default();

        let practicum_endpoint = non_empty(&lookup, "PRACTICUM_ENDPOINT")
            .unwrap_or_else(|| practicum::DEFAULT_ENDPOINT.to_string());
        let telegram_api_base_url = non_empty(&lookup, "TELEGRAM_API_BASE_URL")
            .unwrap_or_else(|| telegram::DEFAULT_API_BASE_URL.to_string());

        let retry_secs = parse_u64(&lookup, "RETRY_PERIOD_SECS", DEFAULT_RETRY_PERIOD_SECS)
            .context("RETRY_PERIOD_SECS")?;
        let lookback_raw = parse_u64(&lookup, "POLL_LOOKBACK_SECS", ONE_MONTH_SECS as u64)
            .context("POLL_LOOKBACK_SECS")?;
        let lookback_secs = i64::try_from(lookback_raw).with_context(|| {
            format!("Invalid POLL_LOOKBACK_SECS: {lookback_raw} (at most {})", i64::MAX)
        })?;

        let notify_failure_policy = parse_policy(&lookup, "NOTIFY_FAILURE_POLICY")?;

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            practicum_endpoint,
            telegram_api_base_url,
            retry_period: Duration::from_secs(retry_secs),
            lookback_secs,
            notify_failure_policy,
        })
    }
}

/// Log file location, read before the rest of the config so startup errors get logged.
pub fn log_file_from_env() -> PathBuf {
    env::var("LOG_FILE")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string())
        .into()
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|v| !v.trim().is_empty())
}

fn parse_u64<F>(lookup: &F, key: &str, default: u64) -> Result<u64>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = non_empty(lookup, key).unwrap_or_else(|| default.to_string());
    raw.trim()
        .parse::<u64>()
        .with_context(|| format!("Invalid {key}: {raw} (expected integer seconds)"))
}

fn parse_policy<F>(lookup: &F, key: &str) -> Result<NotifyFailurePolicy>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = non_empty(lookup, key).unwrap_or_else(|| "retry".to_string());
    match raw.trim().to_lowercase().as_str() {
        "retry" => Ok(NotifyFailurePolicy::RetryNextCycle),
        "drop" => Ok(NotifyFailurePolicy::Drop),
        other => Err(anyhow!("Invalid {key}: {other} (expected retry|drop)")),
    }
}
