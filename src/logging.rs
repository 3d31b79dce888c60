//! Logging set-up.
//!
//! `RUST_LOG` takes precedence; otherwise the level follows the number of
//! `-v` flags. The terminal UI owns the screen, so it logs to a file.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

use crate::export::unique_file_name;

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    /// A fresh `seqanalyzer-<random>.log` in the system temp directory.
    pub fn temp_file() -> Self {
        LogTarget::File(std::env::temp_dir().join(unique_file_name("seqanalyzer", "log")))
    }
}

/// Default filter directive for a verbosity count.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Installs the global subscriber.
pub fn init_logging(verbosity: u8, target: &LogTarget) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));
    let builder = fmt().with_env_filter(filter).with_target(false);

    let installed = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("Cannot create log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };
    installed.map_err(|e| anyhow!("Cannot install logger: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(5), "debug");
    }

    #[test]
    fn test_temp_file_target() {
        match LogTarget::temp_file() {
            LogTarget::File(path) => {
                assert!(path.starts_with(std::env::temp_dir()));
                assert_eq!(path.extension().and_then(|e| e.to_str()), Some("log"));
            }
            other => panic!("unexpected target: {:?}", other),
        }
    }
}
