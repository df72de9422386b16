//! JSON file writer
//!
//! Writes records as an indented JSON array, replacing the target file.

use crate::decode::Record;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Serialize records to the JSON text that goes on disk.
///
/// Two-space indentation with a trailing newline.
pub fn render_records(records: &[Record]) -> Result<String> {
    let mut text = serde_json::to_string_pretty(records)?;
    text.push('\n');
    Ok(text)
}

/// Write records to `path`, creating parent directories as needed.
///
/// The file is written next to the target and renamed into place, so the
/// previous contents survive a failed write. Returns the record count.
pub fn write_records(path: impl AsRef<Path>, records: &[Record]) -> Result<usize> {
    let path = path.as_ref();
    let text = render_records(records)?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| {
            Error::output(
                path.display().to_string(),
                format!("Failed to create directory {}: {e}", dir.display()),
            )
        })?;
    }

    let tmp = temp_path(path);
    if let Err(e) = fs::write(&tmp, text.as_bytes()) {
        // Best effort; the write error is what matters
        let _ = fs::remove_file(&tmp);
        return Err(Error::output(
            path.display().to_string(),
            format!("Failed to write temp file: {e}"),
        ));
    }

    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(Error::output(
            path.display().to_string(),
            format!("Failed to replace file: {e}"),
        ));
    }

    debug!("Wrote {} records ({} bytes) to {}", records.len(), text.len(), path.display());
    Ok(records.len())
}

/// Sibling path used while writing, e.g. `data/.team.json.tmp`
fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.tmp"))
}
