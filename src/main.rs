//! Mock analysis API server for testing the SafeRead browser extension.
//!
//! Serves three hardcoded analysis payloads (privacy / terms / legal)
//! from `POST /scanner/quick-analyze/` so the extension can be developed
//! against a stable, offline backend.

use std::sync::Arc;
use tokio::sync::Notify;

mod analysis;
mod config;
mod handler;
mod http;
mod logger;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;

    // One developer, one browser: a current-thread runtime keeps the
    // whole server on a single OS thread.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;
    let listener = server::create_reusable_listener(addr)?;

    let config = Arc::new(cfg);
    let shutdown = Arc::new(Notify::new());

    logger::log_server_start(&addr, &config);
    server::signal::start_signal_handler(Arc::clone(&shutdown));

    // LocalSet so connections can be served with spawn_local
    let local = tokio::task::LocalSet::new();
    local
        .run_until(server::run_accept_loop(listener, config, shutdown))
        .await;

    Ok(())
}
