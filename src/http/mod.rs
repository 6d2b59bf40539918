//! HTTP protocol layer module
//!
//! Response builders for the mock API, decoupled from routing and
//! business logic.

pub mod response;

// Re-export commonly used builders
pub use response::{
    build_404_response, build_413_response, build_501_response, build_json_response,
    build_preflight_response, build_server_error_response,
};
