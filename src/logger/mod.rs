//! Logger module
//!
//! Console logging for the mock server: startup banner, per-request
//! access lines, error/warning lines, and the shutdown message. Output
//! goes to stdout/stderr; these lines are observational and not part of
//! the functional contract.

mod format;

pub use format::AccessLogEntry;

use crate::config::Config;
use std::net::SocketAddr;

/// Write to info/access output
fn write_info(message: &str) {
    println!("{message}");
}

/// Write to error output
fn write_error(message: &str) {
    eprintln!("{message}");
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info(&format!("Mock API server running on http://{addr}"));
    write_info(&format!(
        "Endpoint available at: {}",
        config.endpoint_url()
    ));
    write_info("Press Ctrl+C to stop the server");
}

/// Log one handled request
pub fn log_access(entry: &AccessLogEntry) {
    write_info(&entry.format());
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

pub fn log_shutdown() {
    write_info("\nServer stopped.");
}
