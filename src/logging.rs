//! File logging. The terminal belongs to the UI, so all output goes to
//! `{config_dir}/hn-pager.log` through a non-blocking writer.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "HN_PAGER_LOG";

fn default_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level(verbose)))
}

/// Install the global subscriber. Keep the returned guard alive until exit
/// or buffered lines are lost.
pub fn init(log_path: &Path, verbose: bool) -> Result<WorkerGuard> {
    let dir = log_path
        .parent()
        .context("Log path has no parent directory")?;
    let file_name = log_path
        .file_name()
        .context("Log path has no file name")?;
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose))
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {e}"))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_default_level() {
        assert_eq!(default_level(false), "info");
        assert_eq!(default_level(true), "debug");
    }

    #[test]
    fn init_creates_log_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("nested").join("hn-pager.log");

        // Another test may already own the global subscriber; the directory
        // is created before that matters.
        let _ = init(&path, false);

        assert!(path.parent().unwrap().is_dir());
    }
}
