//! Append-only request log file.
//!
//! One line per event: `[YYYY-MM-DD HH:MM:SS] [LEVEL] message`. The file is
//! opened in append mode on every write and created on first use, so a
//! long-lived process and a one-shot CLI produce the same log shape. Write
//! failures degrade to a tracing warning; they never fail the scrape.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::warn;

/// Severity tag written into each log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

impl LogLevel {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Error => "ERROR",
        }
    }
}

/// Append-only, timestamped operation log.
///
/// Constructed with a destination path, or [`RequestLog::disabled`] for a
/// no-op log (the default).
#[derive(Debug, Clone, Default)]
pub struct RequestLog {
    path: Option<PathBuf>,
}

impl RequestLog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// A log that drops every write.
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn info(&self, message: &str) {
        self.write(LogLevel::Info, message);
    }

    pub fn error(&self, message: &str) {
        self.write(LogLevel::Error, message);
    }

    fn write(&self, level: LogLevel, message: &str) {
        let Some(path) = &self.path else { return };
        let line = format_line(level, message);
        if let Err(error) = append_line(path, &line) {
            warn!(path = %path.display(), %error, "request log write failed");
        }
    }
}

fn format_line(level: LogLevel, message: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!("[{timestamp}] [{}] {message}\n", level.as_str())
}

fn append_line(path: &Path, line: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(line.as_bytes())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use regex::Regex;
    use tempfile::TempDir;

    #[test]
    fn test_log_line_format() {
        let line_re =
            Regex::new(r"^\[\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\] \[INFO\] hello world\n$")
                .unwrap();
        let line = format_line(LogLevel::Info, "hello world");
        assert!(line_re.is_match(&line), "unexpected line format: {line:?}");
    }

    #[test]
    fn test_log_appends_across_writes() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("app.log");
        let log = RequestLog::new(&path);

        log.info("first");
        log.error("second");

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("[INFO] first"));
        assert!(lines[1].ends_with("[ERROR] second"));
    }

    #[test]
    fn test_disabled_log_writes_nothing() {
        let log = RequestLog::disabled();
        // No path, no file, no panic.
        log.info("dropped");
        log.error("dropped");
    }

    #[test]
    fn test_log_write_failure_does_not_panic() {
        let temp = TempDir::new().unwrap();
        // Directory path cannot be opened as a file; write must degrade.
        let log = RequestLog::new(temp.path());
        log.info("goes nowhere");
    }
}
