//! # Saavn Upstream Module
//!
//! Everything that talks to the provider's `api.php` endpoint lives here.
//!
//! ```text
//! Route handlers (api)
//!          ↓
//! SaavnClient::call ── query::build_query, language cookie
//!          ↓
//! retry::execute_with_policy ── RetryPolicy
//!          ↓
//! reqwest ── https://www.jiosaavn.com/api.php
//! ```
//!
//! - [`endpoints`] - internal `__call` names
//! - [`query`] - fixed protocol parameters and overrides
//! - [`retry`] - retry policy and the generic retry loop
//! - [`models`] - raw upstream response shapes
//! - [`de`] - tolerant field deserializers used by the models
//!
//! The client is cheap to clone; it shares one connection pool.

use std::time::Duration;

use reqwest::{
    Client, StatusCode,
    header::{self, HeaderMap, HeaderValue},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::config::Settings;

pub mod de;
pub mod endpoints;
pub mod models;
pub mod query;
pub mod retry;

use query::{ApiVersion, build_query, language_cookie};
use retry::{RetryPolicy, Retryable, execute_with_policy};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const ORIGIN: &str = "https://www.jiosaavn.com";
const REFERER: &str = "https://www.jiosaavn.com/";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("upstream responded with {status} for {url}")]
    Status { status: StatusCode, url: String },
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream returned an empty result")]
    Empty,
    #[error("upstream response could not be decoded: {0}")]
    Decode(String),
}

impl Retryable for FetchError {
    fn is_retryable(&self) -> bool {
        match self {
            FetchError::Status { status, .. } => {
                *status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
            }
            FetchError::Transport(_) | FetchError::Empty => true,
            FetchError::Decode(_) => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SaavnClient {
    http: Client,
    base_url: String,
    retry: RetryPolicy,
}

impl SaavnClient {
    pub fn new(
        base_url: impl Into<String>,
        retry: RetryPolicy,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let http = Client::builder()
            .default_headers(browser_headers())
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            retry,
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, FetchError> {
        Self::new(
            settings.base_url.clone(),
            settings.retry.clone(),
            settings.upstream_timeout,
        )
    }

    /// Issues one logical upstream call, retrying per the client's policy.
    ///
    /// Returns the parsed JSON document. `null`, `[]` and `{}` count as
    /// [`FetchError::Empty`] and are retried like transient failures.
    pub async fn call(
        &self,
        call: &str,
        overrides: &[(&str, String)],
        version: ApiVersion,
    ) -> Result<Value, FetchError> {
        let params = build_query(call, overrides, version);
        let cookie = format!(
            "L={}; gdpr_acceptance=true; DL=english",
            language_cookie(&params)
        );

        execute_with_policy(&self.retry, |attempt| {
            let params = &params;
            let cookie = &cookie;
            async move {
                tracing::debug!(call, attempt, "calling upstream");
                self.fetch_once(params, cookie).await
            }
        })
        .await
    }

    async fn fetch_once(
        &self,
        params: &[(String, String)],
        cookie: &str,
    ) -> Result<Value, FetchError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(params)
            .header(header::COOKIE, cookie)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: response.url().to_string(),
            });
        }

        let body = response.text().await?;
        let value: Value =
            serde_json::from_str(body.trim()).map_err(|e| FetchError::Decode(e.to_string()))?;

        if is_empty(&value) {
            return Err(FetchError::Empty);
        }
        Ok(value)
    }
}

fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        HeaderValue::from_static("application/json, text/plain, */*"),
    );
    headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
    headers.insert(header::ORIGIN, HeaderValue::from_static(ORIGIN));
    headers.insert(header::REFERER, HeaderValue::from_static(REFERER));
    headers.insert(
        header::ACCEPT_LANGUAGE,
        HeaderValue::from_static("en-US,en;q=0.9"),
    );
    headers
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Converts an upstream document into one of the raw [`models`].
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, FetchError> {
    serde_json::from_value(value).map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_documents_are_detected() {
        assert!(is_empty(&Value::Null));
        assert!(is_empty(&json!([])));
        assert!(is_empty(&json!({})));
        assert!(!is_empty(&json!({ "songs": [] })));
        assert!(!is_empty(&json!("text")));
    }

    #[test]
    fn retryable_conditions() {
        let status = |code: u16| FetchError::Status {
            status: StatusCode::from_u16(code).unwrap(),
            url: String::new(),
        };
        assert!(status(429).is_retryable());
        assert!(status(500).is_retryable());
        assert!(status(503).is_retryable());
        assert!(!status(404).is_retryable());
        assert!(!status(400).is_retryable());
        assert!(FetchError::Empty.is_retryable());
        assert!(!FetchError::Decode("x".into()).is_retryable());
    }
}
