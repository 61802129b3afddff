//! Telegram Bot API transport (`sendMessage` only).

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::MessageSink;
use crate::error::{HomeworkError, HomeworkResult};

pub const DEFAULT_API_BASE_URL: &str = "https://api.telegram.org";

#[derive(Clone)]
pub struct TelegramClient {
    http: Client,
    base_url: String,
    bot_token: String,
    chat_id: String,
}

impl fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramClient")
            .field("base_url", &self.base_url)
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct TgResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

impl TelegramClient {
    pub fn new(base_url: String, bot_token: String, chat_id: String) -> Self {
        Self {
            http: Client::new(),
            base_url,
            bot_token,
            chat_id,
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{}",
            self.base_url.trim_end_matches('/'),
            self.bot_token,
            method
        )
    }
}

#[async_trait]
impl MessageSink for TelegramClient {
    async fn send_message(&self, text: &str) -> HomeworkResult<()> {
        let body = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
        };

        // The URL embeds the bot token, keep it out of error text.
        let resp = self
            .http
            .post(self.method_url("sendMessage"))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                HomeworkError::NotifyFailure(format!(
                    "Telegram API request failed: {}",
                    e.without_url()
                ))
            })?;

        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();

        match serde_json::from_str::<TgResponse>(&text) {
            Ok(parsed) if parsed.ok && status.is_success() => Ok(()),
            Ok(parsed) => Err(HomeworkError::NotifyFailure(
                parsed
                    .description
                    .unwrap_or_else(|| format!("Telegram API returned {status}")),
            )),
            Err(_) => Err(HomeworkError::NotifyFailure(format!(
                "Telegram API non-2xx: {status} body={text}"
            ))),
        }
    }
}
