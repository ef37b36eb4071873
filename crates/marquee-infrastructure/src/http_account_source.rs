//! HTTP implementation of `AccountSource`.
//!
//! Talks to the account API: `GET {base}/api/account/get-all-accounts/{userId}`
//! answering `{ "data": Account[] }`.

use std::time::Duration;

use async_trait::async_trait;
use marquee_core::account::{Account, AccountSource, AccountsEnvelope};
use marquee_core::config::ApiConfig;
use marquee_core::navigation::validate_segment;
use marquee_core::{MarqueeError, Result};
use reqwest::Client;

const ACCOUNTS_PATH: &str = "/api/account/get-all-accounts";

/// Account source backed by the remote account API.
#[derive(Clone)]
pub struct HttpAccountSource {
    client: Client,
    base_url: String,
    timeout: Option<Duration>,
}

impl HttpAccountSource {
    /// Creates a source for the given origin, without a request timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        let source = Self::new(config.base_url.clone());
        match config.request_timeout_secs {
            Some(secs) => source.with_timeout(Duration::from_secs(secs)),
            None => source,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the account list for `user_id`.
    pub fn accounts_url(&self, user_id: &str) -> Result<String> {
        let user_id = validate_segment(user_id)?;
        Ok(format!("{}{}/{}", self.base_url, ACCOUNTS_PATH, user_id))
    }
}

#[async_trait]
impl AccountSource for HttpAccountSource {
    async fn list_accounts(&self, user_id: &str) -> Result<Vec<Account>> {
        let url = self.accounts_url(user_id)?;
        tracing::debug!(%url, "Fetching accounts");

        let mut request = self.client.get(&url);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .map_err(|e| MarqueeError::transport(format!("Failed to fetch accounts: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(MarqueeError::http(status.as_u16(), error_text));
        }

        let body = response.bytes().await?;
        let envelope: AccountsEnvelope = serde_json::from_slice(&body)?;
        Ok(envelope.into_accounts())
    }
}
