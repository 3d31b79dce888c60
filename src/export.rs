//! Saving reports outside the program.
//!
//! Reports go either to a named file (`-` meaning stdout) or to a freshly
//! named file in a directory, which is what the terminal viewer uses.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

/// Prefix of files created by [`export_to_dir`].
pub const EXPORT_PREFIX: &str = "seqanalyzer_results";

/// Attempts before giving up on finding an unused file name.
const MAX_NAME_ATTEMPTS: usize = 16;

/// Errors that can occur while exporting a report.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write report: {0}")]
    IoError(#[from] io::Error),

    #[error("No free file name in {0}")]
    NoFreeName(PathBuf),
}

/// Where a report is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    Stdout,
    File(PathBuf),
}

impl ExportTarget {
    /// Interprets a command-line value; `-` selects stdout.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            ExportTarget::Stdout
        } else {
            ExportTarget::File(PathBuf::from(arg))
        }
    }
}

/// Random file name such as `prefix-1a2b3c4d.ext`.
pub fn unique_file_name(prefix: &str, extension: &str) -> String {
    format!("{}-{:08x}.{}", prefix, rand::random::<u32>(), extension)
}

/// Writes the report followed by a newline.
pub fn write_report(text: &str, target: &ExportTarget) -> Result<(), ExportError> {
    match target {
        ExportTarget::Stdout => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", text)?;
        }
        ExportTarget::File(path) => {
            let mut file = File::create(path)?;
            writeln!(file, "{}", text)?;
            info!(path = %path.display(), "report written");
        }
    }
    Ok(())
}

/// Writes the report to a new file in `dir` and returns its path.
///
/// Existing files are never overwritten.
pub fn export_to_dir<P: AsRef<Path>>(text: &str, dir: P) -> Result<PathBuf, ExportError> {
    let dir = dir.as_ref();
    for _ in 0..MAX_NAME_ATTEMPTS {
        let path = dir.join(unique_file_name(EXPORT_PREFIX, "txt"));
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                writeln!(file, "{}", text)?;
                info!(path = %path.display(), "report exported");
                return Ok(path);
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Err(ExportError::NoFreeName(dir.to_path_buf()))
}
