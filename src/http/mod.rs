//! HTTP client module
//!
//! Fetches published CSV exports over HTTP or HTTPS.
//!
//! # Behaviour
//!
//! - **Single shot**: one GET per call, body buffered in full
//! - **Strict status**: only `200 OK` succeeds; redirects are errors
//! - **No retries or timeouts**: a failed fetch fails the caller

mod client;

pub use client::{parse_http_url, HttpClient, HttpClientConfig, HttpClientConfigBuilder};

#[cfg(test)]
mod tests;
