use serde::Deserialize;

/// Body of `POST /download`. `url` is optional here so that a missing field
/// is reported as "URL is required" rather than a deserialization failure.
#[derive(Deserialize)]
pub struct DownloadRequest {
    #[serde(default)]
    pub url: Option<String>,
}
