use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use crate::error::{AppError, Result};

const DEFAULT_ENDPOINT: &str = "https://ssstik.io/abc?url=dl";
const DEFAULT_LOCALE: &str = "id";
// Opaque value the upstream form expects. Its lifetime is unknown and it may
// stop being accepted when the upstream site changes.
const DEFAULT_TOKEN: &str = "cG9WcXBl";
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/110.0.0.0 Safari/537.36";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Clone)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub static_dir: PathBuf,
    pub allowed_origins: Vec<String>,
    pub upstream: UpstreamConfig,
}

/// Fixed description of the upstream extraction endpoint and the browser
/// session it expects to see.
#[derive(Clone, Debug)]
pub struct UpstreamConfig {
    pub endpoint: String,
    pub locale: String,
    pub token: String,
    pub user_agent: String,
    pub headers: Vec<(&'static str, String)>,
    pub timeout: Duration,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            token: DEFAULT_TOKEN.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            headers: vec![
                ("accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8".to_string()),
                ("accept-language", "en-US,en;q=0.5".to_string()),
                ("origin", "https://ssstik.io".to_string()),
                ("referer", "https://ssstik.io/".to_string()),
                ("upgrade-insecure-requests", "1".to_string()),
                ("sec-fetch-dest", "document".to_string()),
                ("sec-fetch-mode", "navigate".to_string()),
                ("sec-fetch-site", "same-origin".to_string()),
            ],
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl UpstreamConfig {
    /// Same protocol values, different endpoint. Used to aim the client at a
    /// local stand-in.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        let server_addr = parse_server_addr(&host, &port)?;

        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("public"));

        let extra_origins = env::var("ALLOWED_ORIGINS").unwrap_or_default();
        let allowed_origins = allowed_origins(server_addr.port(), &extra_origins);

        Ok(Config {
            server_addr,
            static_dir,
            allowed_origins,
            upstream: UpstreamConfig::default(),
        })
    }
}

fn parse_server_addr(host: &str, port: &str) -> Result<SocketAddr> {
    let port = port.parse::<u16>().map_err(|e| AppError::Config(format!("Invalid port: {}", e)))?;
    let ip = IpAddr::from_str(host).map_err(|e| AppError::Config(format!("Invalid host address: {}", e)))?;
    Ok(SocketAddr::new(ip, port))
}

/// Local origins for the bound port and the default port, followed by any
/// comma-separated extras. Trailing slashes are dropped so `https://a.b/`
/// and `https://a.b` compare equal against an `Origin` header.
pub fn allowed_origins(port: u16, extra: &str) -> Vec<String> {
    let mut origins = Vec::new();
    for p in [port, 3000] {
        for host in ["localhost", "127.0.0.1"] {
            let origin = format!("http://{}:{}", host, p);
            if !origins.contains(&origin) {
                origins.push(origin);
            }
        }
    }

    for origin in extra.split(',') {
        let origin = origin.trim().trim_end_matches('/');
        if !origin.is_empty() && !origins.iter().any(|o| o == origin) {
            origins.push(origin.to_string());
        }
    }

    origins
}
