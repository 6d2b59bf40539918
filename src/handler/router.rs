//! Request routing dispatch module
//!
//! Entry point for HTTP request processing. The mock understands exactly
//! two methods: `OPTIONS` answers the CORS preflight on any path, and
//! `POST` hits the analyze endpoint. Everything else is a terse error
//! response; no error ever crashes the connection loop.

use crate::config::Config;
use crate::handler::analyze;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Path of the analyze endpoint
pub const ANALYZE_PATH: &str = "/scanner/quick-analyze/";

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    peer_addr: SocketAddr,
    config: Arc<Config>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = dispatch(req, &method, &path, &config).await;

    if config.logging.access_log {
        logger::log_access(&logger::AccessLogEntry::new(
            peer_addr.to_string(),
            method.to_string(),
            path,
            response.status().as_u16(),
        ));
    }

    Ok(response)
}

/// Dispatch on HTTP method
async fn dispatch(
    req: Request<hyper::body::Incoming>,
    method: &Method,
    path: &str,
    config: &Config,
) -> Response<Full<Bytes>> {
    match method {
        &Method::OPTIONS => http::build_preflight_response(),
        &Method::POST => handle_post(req, path, config).await,
        _ => {
            logger::log_warning(&format!("Unsupported method: {method}"));
            http::build_501_response()
        }
    }
}

/// Route a POST request: only the analyze path exists
async fn handle_post(
    req: Request<hyper::body::Incoming>,
    path: &str,
    config: &Config,
) -> Response<Full<Bytes>> {
    if path != ANALYZE_PATH {
        return http::build_404_response();
    }

    if let Some(resp) = check_body_size(&req, config.http.max_body_size) {
        return resp;
    }

    // Single error boundary: anything that goes wrong while reading,
    // parsing, or dispatching becomes the 500 response.
    match analyze::handle(req).await {
        Ok(resp) => resp,
        Err(e) => http::build_server_error_response(&e.to_string()),
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(
    req: &Request<hyper::body::Incoming>,
    max_body_size: u64,
) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_path_is_exact() {
        assert_eq!(ANALYZE_PATH, "/scanner/quick-analyze/");
        // the trailing slash is part of the contract
        assert!(ANALYZE_PATH.ends_with('/'));
    }
}
