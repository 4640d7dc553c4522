use std::time::Instant;
use tracing::{info, warn};
use url::Url;

use crate::error::{AppError, Result};
use crate::extractor::{extract_fields, ExtractionResult};
use crate::upstream::UpstreamClient;

/// A target URL that has passed the well-formedness check. The string is
/// kept exactly as typed; that is what gets forwarded upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRequest {
    target_url: String,
}

impl ExtractionRequest {
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Err(AppError::InvalidInput("URL is required".to_string()));
        }

        Url::parse(raw).map_err(|_| AppError::InvalidInput("Invalid URL format".to_string()))?;

        Ok(Self {
            target_url: raw.to_string(),
        })
    }

    pub fn target_url(&self) -> &str {
        &self.target_url
    }
}

/// Validate, fetch the upstream page once, and read every field from it.
/// Either the whole record comes back or an error does.
pub async fn extract(upstream: &UpstreamClient, target_url: &str) -> Result<ExtractionResult> {
    let request = ExtractionRequest::parse(target_url)?;
    info!(url = request.target_url(), "processing extraction request");
    let start = Instant::now();

    let response = upstream.fetch(request.target_url()).await.map_err(|err| {
        warn!(url = request.target_url(), error = %err, elapsed = ?start.elapsed(), "upstream call failed");
        err
    })?;

    let result = extract_fields(&response.body);
    info!(
        url = request.target_url(),
        status = response.status,
        has_video = !result.without_watermark_link.is_empty(),
        has_audio = !result.mp3_download_link.is_empty(),
        elapsed = ?start.elapsed(),
        "extraction finished"
    );

    Ok(result)
}
