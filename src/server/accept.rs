// Accept loop module
// Accepts connections until a shutdown signal arrives.

use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::serve_connection;
use crate::config::Config;
use crate::logger;

/// Run the accept loop until shutdown.
///
/// Each accepted connection is served as a local task; accept errors
/// are logged and the loop keeps going. On shutdown the listener is
/// dropped, which closes the socket. In-flight requests are not
/// drained.
pub async fn run_accept_loop(listener: TcpListener, config: Arc<Config>, shutdown: Arc<Notify>) {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        serve_connection(stream, peer_addr, Arc::clone(&config));
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.notified() => {
                logger::log_shutdown();
                break;
            }
        }
    }

    drop(listener);
}
