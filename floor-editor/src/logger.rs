//! Logging Infrastructure
//!
//! Structured logging setup for embedders of the editor core.

use std::path::Path;

/// Initialize the logger at `info` level on stdout
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with optional file output
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // Add file output if log_dir is provided
    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.exists() {
            let file_appender = tracing_appender::rolling::daily(log_path, "floor-editor");
            let _ = subscriber.with_writer(file_appender).try_init();
            return;
        }
    }

    let _ = subscriber.try_init();
}

/// Initialize the logger from an [`EditorConfig`](crate::config::EditorConfig)
pub fn init_from_config(config: &crate::config::EditorConfig) {
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
}
