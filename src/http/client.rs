//! HTTP client for CSV exports
//!
//! A single-shot GET that buffers the whole body:
//! - Scheme check before any connection is made
//! - Only `200 OK` counts as success; redirects are not followed
//! - No timeout and no retry

use crate::error::{Error, Result};
use reqwest::{redirect, Client, StatusCode};
use tracing::debug;
use url::Url;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("{}/{}", crate::NAME, crate::VERSION),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// HTTP client that fetches a URL as text
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .redirect(redirect::Policy::none())
            .build()?;

        Ok(Self { client, config })
    }

    /// GET `url` and return the body as text.
    ///
    /// Fails with [`Error::HttpStatus`] for anything other than `200 OK`,
    /// and with [`Error::Http`] when the transport itself fails.
    pub async fn fetch_text(&self, url: &str) -> Result<String> {
        let url = parse_http_url(url)?;

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if status != StatusCode::OK {
            return Err(Error::http_status(
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown Status"),
            ));
        }

        let body = response.text().await?;
        debug!("GET {} -> {} bytes", url, body.len());
        Ok(body)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Parse a URL and require an http(s) scheme
pub fn parse_http_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::InvalidScheme {
            url: raw.to_string(),
            scheme: other.to_string(),
        }),
    }
}
