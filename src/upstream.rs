use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, ClientBuilder};
use std::time::Instant;
use tracing::{debug, warn};

use crate::config::UpstreamConfig;
use crate::error::{AppError, Result};

/// Raw page handed back by the upstream service.
#[derive(Debug)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}

/// Posts target URLs to the upstream extraction form, one attempt per call.
#[derive(Clone)]
pub struct UpstreamClient {
    client: Client,
    config: UpstreamConfig,
}

impl UpstreamClient {
    pub fn new(config: UpstreamConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| AppError::Config(format!("Invalid upstream header name {}: {}", name, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| AppError::Config(format!("Invalid value for header {}: {}", name, e)))?;
            headers.insert(name, value);
        }

        // The timeout covers connect, send and reading the body.
        let client = ClientBuilder::new()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Form fields in the order the upstream page submits them.
    pub fn form<'a>(&'a self, target_url: &'a str) -> [(&'static str, &'a str); 3] {
        [
            ("id", target_url),
            ("locale", self.config.locale.as_str()),
            ("tt", self.config.token.as_str()),
        ]
    }

    pub async fn fetch(&self, target_url: &str) -> Result<UpstreamResponse> {
        let start = Instant::now();
        debug!(endpoint = %self.config.endpoint, "posting to upstream");

        let response = self
            .client
            .post(&self.config.endpoint)
            .form(&self.form(target_url))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), elapsed = ?start.elapsed(), "upstream rejected request");
            return Err(AppError::UpstreamStatus(status.as_u16()));
        }

        let body = response.text().await?;
        debug!(
            status = status.as_u16(),
            bytes = body.len(),
            elapsed = ?start.elapsed(),
            "upstream responded"
        );

        Ok(UpstreamResponse {
            status: status.as_u16(),
            body,
        })
    }
}
