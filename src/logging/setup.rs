use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use super::formatter::BracketedFormatter;

/// Install the global tracing subscriber.
///
/// Logs go to stdout and, when the `logs/` directory is writable, to a
/// timestamped file as well. Returns the log file path when one was created.
pub fn setup_logging() -> Option<PathBuf> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match create_log_file() {
        Some((log_path, file)) => {
            let stdout_layer = fmt::layer()
                .event_format(BracketedFormatter)
                .with_writer(std::io::stdout);

            let file_layer = fmt::layer()
                .event_format(BracketedFormatter)
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false); // Disable ANSI colors in file

            tracing_subscriber::registry()
                .with(filter)
                .with(file_layer)
                .with(stdout_layer)
                .init();

            info!("Log file created at: {:?}", log_path);
            Some(log_path)
        }
        None => {
            let stdout_layer = fmt::layer()
                .event_format(BracketedFormatter)
                .with_writer(std::io::stdout);

            tracing_subscriber::registry()
                .with(filter)
                .with(stdout_layer)
                .init();
            None
        }
    }
}

fn create_log_file() -> Option<(PathBuf, fs::File)> {
    let log_dir = std::env::current_dir().ok()?.join("logs");
    fs::create_dir_all(&log_dir).ok()?;

    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let log_filename = format!("prepare_bovine_dataset_{}.log", timestamp);
    let log_path = log_dir.join(&log_filename);

    let file = fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_path)
        .ok()?;

    Some((log_path, file))
}
