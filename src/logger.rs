use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOG_FILE_NAME: &str = "operator-quiz.log";
const DEFAULT_FILTER: &str = "operator_quiz=info";

/// Keeps the background log writer alive; logs are flushed when this is dropped.
pub struct LoggingGuard {
    _guard: WorkerGuard,
}

pub fn default_log_dir() -> PathBuf {
    let home_var = if cfg!(target_os = "windows") {
        "USERPROFILE"
    } else {
        "HOME"
    };
    match std::env::var_os(home_var) {
        Some(home) => PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("operator-quiz")
            .join("logs"),
        None => std::env::temp_dir().join("operator-quiz").join("logs"),
    }
}

fn ensure_log_dir(preferred: Option<&Path>) -> Option<PathBuf> {
    let dir = preferred.map(Path::to_path_buf).unwrap_or_else(default_log_dir);
    if std::fs::create_dir_all(&dir).is_ok() {
        return Some(dir);
    }
    let fallback = std::env::temp_dir().join("operator-quiz").join("logs");
    std::fs::create_dir_all(&fallback).ok()?;
    Some(fallback)
}

/// Installs a file-backed tracing subscriber. Returns `None` when no log
/// directory is writable or a subscriber is already installed; the app then
/// runs without logs.
pub fn init(log_dir: Option<&Path>) -> Option<LoggingGuard> {
    let log_dir = ensure_log_dir(log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true),
    );

    if subscriber.try_init().is_err() {
        return None;
    }

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");

    Some(LoggingGuard { _guard: guard })
}
