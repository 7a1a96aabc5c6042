use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::error::FetchError;

use super::{Fetched, MeteoSource};

pub const OPEN_METEO_BASE: &str = "https://api.open-meteo.com/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    base_url: String,
    http: Client,
}

impl OpenMeteoClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client for Open-Meteo")?;

        Ok(Self { base_url: base_url.into().trim_end_matches('/').to_string(), http })
    }

    async fn fetch(&self, url: &str, query: &[(String, String)]) -> Result<Value, FetchError> {
        let res = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|source| FetchError::Transport { url: url.to_string(), source })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| FetchError::Transport { url: url.to_string(), source })?;

        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body)
            .map_err(|e| FetchError::Body { url: url.to_string(), reason: e.to_string() })
    }
}

#[async_trait]
impl MeteoSource for OpenMeteoClient {
    async fn get(&self, path: &str, query: &[(String, String)]) -> Fetched {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        tracing::debug!(%url, params = query.len(), "GET Open-Meteo");

        match self.fetch(&url, query).await {
            Ok(Value::Object(map)) => Fetched::Success(map),
            Ok(other) => Fetched::Failure(FetchError::Body {
                url,
                reason: format!("expected a JSON object, got {}", json_kind(&other)),
            }),
            Err(err) => {
                tracing::warn!(error = %err, "Open-Meteo request failed");
                Fetched::Failure(err)
            }
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}
