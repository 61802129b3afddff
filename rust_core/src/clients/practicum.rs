//! Practicum homework statuses API client.

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::fmt;
use tracing::debug;

use super::HomeworkSource;
use crate::error::{HomeworkError, HomeworkResult};

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

#[derive(Clone)]
pub struct PracticumClient {
    http: Client,
    endpoint: String,
    token: String,
}

impl fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl PracticumClient {
    pub fn new(endpoint: String, token: String) -> Self {
        Self {
            http: Client::new(),
            endpoint,
            token,
        }
    }
}

#[async_trait]
impl HomeworkSource for PracticumClient {
    async fn get_api_answer(&self, from_date: i64) -> HomeworkResult<Value> {
        debug!("Requesting homework statuses from_date={}", from_date);

        let resp = self
            .http
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| HomeworkError::ConnectionFailure(e.to_string()))?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(HomeworkError::BadStatus(status.as_u16()));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| HomeworkError::ConnectionFailure(e.to_string()))?;

        let value: Value = serde_json::from_str(&body)?;
        Ok(value)
    }
}
