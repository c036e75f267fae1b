//! Outbound client for the file-storage gateway.
//!
//! Handlers never touch the network directly; this client owns the
//! `reqwest::Client` and every URL the façade calls.

use crate::config::GatewaySettings;
use anyhow::Result;
use reqwest::{Client, header};

pub struct GatewayClient {
    client: Client,
    settings: GatewaySettings,
}

impl GatewayClient {
    pub fn new(settings: GatewaySettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.settings.base_url
    }

    /// GET the listing endpoint. The raw query string is appended untouched,
    /// preserving the caller's encoding byte for byte.
    pub async fn list(&self, raw_query: Option<&str>) -> Result<reqwest::Response> {
        let url = match raw_query {
            Some(query) if !query.is_empty() => format!("{}?{}", self.settings.base_url, query),
            _ => self.settings.base_url.clone(),
        };

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!("Failed to send GET request to {}: {}", url, e);
            anyhow::anyhow!("HTTP request failed: {}", e)
        })?;

        Ok(response)
    }

    /// POST raw file bytes to the upload endpoint with the declared
    /// content type.
    pub async fn upload(&self, content_type: &str, data: Vec<u8>) -> Result<reqwest::Response> {
        let url = &self.settings.base_url;

        let response = self
            .client
            .post(url)
            .header(header::CONTENT_TYPE, content_type)
            .body(data)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send POST request to {}: {}", url, e);
                anyhow::anyhow!("HTTP request failed: {}", e)
            })?;

        Ok(response)
    }

    /// GET a single stored object at `<base>/<id>`.
    pub async fn fetch(&self, id: &str) -> Result<reqwest::Response> {
        let url = format!("{}/{}", self.settings.base_url, id);

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!("Failed to send GET request to {}: {}", url, e);
            anyhow::anyhow!("HTTP request failed: {}", e)
        })?;

        Ok(response)
    }
}
