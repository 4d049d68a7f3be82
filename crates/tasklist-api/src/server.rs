//! HTTP server lifecycle.
//!
//! [`serve`] takes an already-resolved [`SocketAddr`] -- turning host and
//! port strings into an address is the binary's configuration concern --
//! binds a listener, and runs the router until the process is terminated.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::router::build_router;
use crate::state::AppState;

/// Run the API server on `addr` until the process is terminated.
///
/// Binds the TCP listener, builds the router around the given state, and
/// serves requests. Returns `Ok(())` only on clean shutdown.
///
/// # Errors
///
/// Returns [`ServerError::Bind`] when the listener cannot bind to `addr`
/// (typically because the port is already in use) and
/// [`ServerError::Serve`] on a fatal I/O error in the accept loop.
pub async fn serve(addr: SocketAddr, state: Arc<AppState>) -> Result<(), ServerError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    let router = build_router(state);

    info!(%addr, "Tasklist API server listening");

    axum::serve(listener, router)
        .await
        .map_err(|source| ServerError::Serve { source })?;

    Ok(())
}

/// Errors that can occur while running the API server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Could not bind the TCP listener.
    #[error("could not bind {addr}")]
    Bind {
        /// The address the bind was attempted on.
        addr: SocketAddr,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The accept loop hit a fatal I/O error.
    #[error("server I/O failure")]
    Serve {
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bind_failure_names_the_address() {
        // Hold a listener so the port is taken, then try to serve on it.
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = taken.local_addr().unwrap();

        let err = serve(addr, Arc::new(AppState::new())).await.unwrap_err();

        assert!(matches!(err, ServerError::Bind { .. }));
        assert!(err.to_string().contains(&addr.to_string()));
    }
}
