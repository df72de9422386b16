//! Execution engine module
//!
//! Runs every configured source through fetch, decode and write.
//!
//! # Overview
//!
//! - Sources are processed one at a time, in fixed order
//! - A source without a URL is skipped with a warning
//! - The first failure stops the run; later sources are not attempted and
//!   the error carries the report of the sources handled so far

mod types;

pub use types::{SourceReport, SourceStatus, SyncReport};

use crate::config::SyncConfig;
use crate::decode::CsvDecoder;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::output::write_records;
use crate::types::{Source, SourceKind};
use std::time::Instant;
use tracing::{error, info, warn};

/// Sync engine: spreadsheets in, JSON files out
pub struct SheetSync {
    /// HTTP client
    client: HttpClient,
    /// CSV decoder
    decoder: CsvDecoder,
    /// Run configuration
    config: SyncConfig,
}

impl SheetSync {
    /// Create an engine with a default HTTP client
    pub fn new(config: SyncConfig) -> Result<Self> {
        Ok(Self::with_client(config, HttpClient::new()?))
    }

    /// Create an engine with a specific HTTP client
    pub fn with_client(config: SyncConfig, client: HttpClient) -> Self {
        Self {
            client,
            decoder: CsvDecoder::new(),
            config,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Sync all configured sources.
    ///
    /// Fails before any request if nothing is configured.
    pub async fn run(&self) -> Result<SyncReport> {
        let start = Instant::now();

        let configured = self.config.configured_count();
        if configured == 0 {
            let vars = SourceKind::ALL
                .iter()
                .map(|k| k.env_var())
                .collect::<Vec<_>>()
                .join(", ");
            error!("No source URLs configured");
            return Err(Error::NoSourcesConfigured { vars });
        }

        info!(
            "Syncing {} of {} sources into {}",
            configured,
            SourceKind::ALL.len(),
            self.config.output_dir.display()
        );

        let mut report = SyncReport::new();
        for source in self.config.sources() {
            let Some(url) = source.url.as_deref() else {
                warn!("Skipping {}: {} not set", source.name(), source.kind.env_var());
                report.push(SourceReport::skipped(source.kind));
                continue;
            };

            match self.sync_source(&source, url).await {
                Ok(outcome) => report.push(outcome),
                Err(e) => {
                    error!("Sync aborted at {}: {}", source.name(), e);
                    report.push(SourceReport::failed(source.kind, e.to_string()));
                    report.set_duration(elapsed_ms(start));
                    return Err(e.aborted(source.name(), report));
                }
            }
        }

        report.set_duration(elapsed_ms(start));

        info!(
            "Sync complete: {} synced, {} skipped, {} records in {}ms",
            report.synced_count(),
            report.skipped_count(),
            report.total_records(),
            report.duration_ms
        );

        Ok(report)
    }

    /// Fetch, decode and write a single source
    pub async fn sync_source(&self, source: &Source, url: &str) -> Result<SourceReport> {
        info!("Fetching {}", source.name());
        let body = self.client.fetch_text(url).await?;

        let decoded = self.decoder.decode(&body);
        for warning in &decoded.warnings {
            warn!("{}: {}", source.name(), warning);
        }

        let count = write_records(&source.output_path, &decoded.records)?;
        info!(
            "Wrote {} records to {}",
            count,
            source.output_path.display()
        );

        Ok(SourceReport::synced(
            source.kind,
            count,
            decoded.warnings.len(),
            source.output_path.clone(),
        ))
    }
}

#[allow(clippy::cast_possible_truncation)]
fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

impl std::fmt::Debug for SheetSync {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetSync")
            .field("config", &self.config)
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}
