//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::SyncConfig;
use crate::engine::{SheetSync, SourceStatus, SyncReport};
use crate::error::Result;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.cli.sync_config();
        match self.cli.command() {
            Commands::Sync => self.sync(config).await,
            Commands::Sources => {
                print!("{}", render_sources(&config));
                Ok(())
            }
        }
    }

    async fn sync(&self, config: SyncConfig) -> Result<()> {
        let engine = SheetSync::new(config)?;
        match engine.run().await {
            Ok(report) => {
                print!("{}", render_summary(&report));
                Ok(())
            }
            Err(e) => {
                if let Some(report) = e.partial_report() {
                    print!("{}", render_summary(report));
                }
                Err(e)
            }
        }
    }
}

/// One line per source: name, state, output path
pub fn render_sources(config: &SyncConfig) -> String {
    let mut out = String::new();
    for source in config.sources() {
        let state = if source.is_configured() {
            "configured"
        } else {
            "not set"
        };
        out.push_str(&format!(
            "{:<14} {:<11} {:<22} -> {}\n",
            source.name(),
            state,
            source.kind.env_var(),
            source.output_path.display()
        ));
    }
    out
}

/// Human-readable run summary
pub fn render_summary(report: &SyncReport) -> String {
    let mut out = String::from("=== Sheet sync summary ===\n");
    for source in &report.sources {
        let line = match &source.status {
            SourceStatus::Synced {
                records,
                warnings,
                path,
            } => {
                let mut line = format!("  OK    {:<14} {records} records -> {}", source.kind, path.display());
                if *warnings > 0 {
                    line.push_str(&format!(" ({warnings} warnings)"));
                }
                line
            }
            SourceStatus::Skipped => format!("  SKIP  {:<14} not configured", source.kind),
            SourceStatus::Failed { message } => format!("  FAIL  {:<14} {message}", source.kind),
        };
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str(&format!(
        "{} synced, {} skipped",
        report.synced_count(),
        report.skipped_count()
    ));
    let failed = report.failed_count();
    if failed > 0 {
        out.push_str(&format!(", {failed} failed"));
    }
    out.push_str(&format!(
        ", {} records in {}ms\n",
        report.total_records(),
        report.duration_ms
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SourceReport;
    use crate::types::SourceKind;

    #[test]
    fn test_render_sources_lists_all_five() {
        let config = SyncConfig::new().with_url(SourceKind::Matches, "https://example.com/m.csv");
        let text = render_sources(&config);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("matches"));
        assert!(lines[0].contains("configured"));
        assert!(lines[4].contains("not set"));
        assert!(lines[4].contains("FAMILY_PHOTOS_CSV_URL"));
        assert!(lines[4].contains("family.json"));
    }

    #[test]
    fn test_render_summary() {
        let mut report = SyncReport::new();
        report.push(SourceReport::synced(
            SourceKind::Matches,
            2,
            1,
            "data/matches.json".into(),
        ));
        report.push(SourceReport::skipped(SourceKind::Highlights));
        report.set_duration(42);

        let text = render_summary(&report);

        assert!(text.contains("OK    matches"));
        assert!(text.contains("2 records -> data/matches.json (1 warnings)"));
        assert!(text.contains("SKIP  highlights"));
        assert!(text.ends_with("1 synced, 1 skipped, 2 records in 42ms\n"));
    }

    #[test]
    fn test_render_summary_of_aborted_run() {
        let mut report = SyncReport::new();
        report.push(SourceReport::synced(
            SourceKind::Matches,
            3,
            0,
            "data/matches.json".into(),
        ));
        report.push(SourceReport::failed(
            SourceKind::Highlights,
            "HTTP 404 Not Found",
        ));
        report.set_duration(7);

        let text = render_summary(&report);

        assert!(text.contains("OK    matches        3 records -> data/matches.json\n"));
        assert!(text.contains("FAIL  highlights     HTTP 404 Not Found\n"));
        assert!(!text.contains("announcements"));
        assert!(text.ends_with("1 synced, 0 skipped, 1 failed, 3 records in 7ms\n"));
    }
}
