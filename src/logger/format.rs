//! Access log format module
//!
//! One line per handled request, prefixed with the client address the
//! way the original mock printed it:
//! `[127.0.0.1:52122] [07/Aug/2026:14:03:11] "POST /scanner/quick-analyze/" 200`

use chrono::Local;

/// Access log entry for a single handled request
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// Client socket address
    pub remote_addr: String,
    /// Request timestamp
    pub time: chrono::DateTime<Local>,
    /// HTTP method (POST, OPTIONS, ...)
    pub method: String,
    /// Request URI path
    pub path: String,
    /// Response status code
    pub status: u16,
}

impl AccessLogEntry {
    /// Create a new access log entry with current timestamp
    pub fn new(remote_addr: String, method: String, path: String, status: u16) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            path,
            status,
        }
    }

    /// Render the `[client] [time] "request" status` line
    #[must_use]
    pub fn format(&self) -> String {
        format!(
            "[{}] [{}] \"{} {}\" {}",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S"),
            self.method,
            self.path,
            self.status,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_leads_with_client_address() {
        let entry = AccessLogEntry::new(
            "127.0.0.1:52122".to_string(),
            "POST".to_string(),
            "/scanner/quick-analyze/".to_string(),
            200,
        );
        let line = entry.format();
        assert!(line.starts_with("[127.0.0.1:52122] "));
        assert!(line.contains("\"POST /scanner/quick-analyze/\""));
        assert!(line.ends_with(" 200"));
    }

    #[test]
    fn test_format_includes_status_for_errors() {
        let entry = AccessLogEntry::new(
            "127.0.0.1:40000".to_string(),
            "POST".to_string(),
            "/nope".to_string(),
            404,
        );
        assert!(entry.format().ends_with(" 404"));
    }
}
