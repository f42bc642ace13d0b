//! Tracing setup.
//!
//! The interactive session owns the terminal, so its logs go to a file.
//! Replays log to stderr, which keeps stdout clean for JSON.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Application directory name under the user's cache dir.
const APP_DIR: &str = "tictactoe-history";

const LOG_FILE_NAME: &str = "session.log";

/// `<cache dir>/tictactoe-history/session.log`, or the temp dir when the
/// platform has no cache dir.
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
        .join(LOG_FILE_NAME)
}

/// Create (truncate) the log file, making parent directories as needed.
pub fn open_log_file(path: &Path) -> Result<File, AppError> {
    let to_error = |source| AppError::LogFile {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_error)?;
    }
    File::create(path).map_err(to_error)
}

/// `RUST_LOG` if set, otherwise `default`.
fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Route tracing output to a file. Returns the path actually used.
pub fn init_file_logging(path: Option<&Path>) -> Result<PathBuf, AppError> {
    let path = path.map_or_else(default_log_path, Path::to_path_buf);
    let file = open_log_file(&path)?;

    // Already-initialized is fine (tests, repeated calls)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();

    Ok(path)
}

/// Route tracing output to stderr, warnings and above by default.
pub fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_writer(std::io::stderr)
        .try_init();
}

// ============================================================================
// TESTS
// ============================================================================
