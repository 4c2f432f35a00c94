//! Per-session file logging.
//!
//! The console belongs to the game, so log output only goes to a file under
//! `<log dir>/<session id>/maze.log`. The log dir defaults to
//! [`log_directory`] and can be overridden with `MAZE_LOG_DIR`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOG_FILE_NAME: &str = "maze.log";

/// Installs the global subscriber. Keep the returned guard alive until exit
/// or buffered lines are lost.
pub fn setup_logging(log_dir: Option<&Path>, session_id: &str) -> Result<WorkerGuard> {
    let log_dir = log_dir.map(Path::to_path_buf).unwrap_or_else(log_directory);

    let session_log_dir = log_dir.join(session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "Failed to create log directory {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, LOG_FILE_NAME);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!(
        "Log file: {}",
        session_log_dir.join(LOG_FILE_NAME).display()
    );

    Ok(guard)
}

/// Session directory name for a start time in seconds.
pub fn session_id(timestamp: u64) -> String {
    format!("session_{}", timestamp)
}

/// Application directory created under the platform cache root.
pub const APP_DIR_NAME: &str = "maze";
/// Subdirectory holding one folder per session.
pub const LOGS_DIR_NAME: &str = "logs";

/// `<cache root>/maze/logs`, falling back to the system temp directory.
pub fn log_directory() -> PathBuf {
    cache_root()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
        .join(LOGS_DIR_NAME)
}

/// Per-user cache root: `~/Library/Caches` on macOS, `$XDG_CACHE_HOME` or
/// `~/.cache` on Linux, `%LOCALAPPDATA%` on Windows.
fn cache_root() -> Option<PathBuf> {
    let var = |key: &str| std::env::var_os(key).map(PathBuf::from);

    if cfg!(target_os = "macos") {
        var("HOME").map(|home| home.join("Library").join("Caches"))
    } else if cfg!(target_os = "windows") {
        var("LOCALAPPDATA")
    } else {
        var("XDG_CACHE_HOME").or_else(|| var("HOME").map(|home| home.join(".cache")))
    }
}
