//! Persisting report lines.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::PrintConfig;
use crate::error::ReportError;

/// Write lines to `path`, one newline-terminated line each.
///
/// Missing parent directories are created. An existing file is truncated
/// and rewritten in full.
pub fn write_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<(), ReportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.is_dir() {
            fs::create_dir_all(parent).map_err(|e| ReportError::io(parent, e))?;
        }
    }

    let file = File::create(path).map_err(|e| ReportError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line.as_ref()).map_err(|e| ReportError::io(path, e))?;
    }
    writer.flush().map_err(|e| ReportError::io(path, e))?;

    Ok(())
}

/// Write a report to the location named by the configuration.
///
/// Returns the path that was written.
pub fn write_report<S: AsRef<str>>(
    config: &PrintConfig,
    lines: &[S],
) -> Result<PathBuf, ReportError> {
    let path = config.output_path();
    write_lines(&path, lines)?;

    if config.verbose {
        tracing::info!("Report has been printed into: {}", path.display());
    }

    Ok(path)
}
