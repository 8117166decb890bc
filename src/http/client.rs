use anyhow::{Context, Result};
use chrono::Utc;
use reqwest::Client;
use std::time::Duration;

use crate::config::settings::SyncSettings;
use crate::domain::ScoreData;

/// HTTP client for the shared remote document endpoint (a function URL
/// that GETs and POSTs the whole JSON document). Last writer wins; the
/// endpoint keeps no history.
pub struct SyncClient {
    client: Client,
    base_url: String,
}

impl SyncClient {
    pub fn new(base_url: &str, settings: &SyncSettings) -> Result<Self> {
        let client = Self::build_client(settings)?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn build_client(settings: &SyncSettings) -> Result<Client> {
        Client::builder()
            .user_agent(settings.user_agent)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    /// Fetch the current remote document. The timestamp query defeats any
    /// cache in front of the endpoint.
    pub async fn fetch_document(&self) -> Result<ScoreData> {
        let url = format!("{}?t={}", self.base_url, Utc::now().timestamp_millis());
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch from: {}", self.base_url))?
            .error_for_status()
            .context("Remote returned an error status")?;
        response
            .json()
            .await
            .context("Failed to parse remote document")
    }

    /// Replace the remote document wholesale.
    pub async fn push_document(&self, data: &ScoreData) -> Result<()> {
        self.client
            .post(&self.base_url)
            .json(data)
            .send()
            .await
            .with_context(|| format!("Failed to post to: {}", self.base_url))?
            .error_for_status()
            .context("Remote rejected the document")?;
        Ok(())
    }
}
