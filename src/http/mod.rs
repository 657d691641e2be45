//! HTTP(S) transport layer for the Model Context Protocol
//!
//! Provides the external API routing, including the `/mcp` listener, and the plain/TLS
//! listeners with graceful shutdown on Ctrl+C or SIGTERM.

pub mod handlers;

use std::{io, net::SocketAddr, time::Duration};

use axum::Router;
use axum_server::{tls_rustls::RustlsConfig, Handle};
use tracing::{info, warn};

use crate::config::TlsPaths;

const SHUTDOWN_GRACE_PERIOD: Duration = Duration::from_secs(5);

/// Serves `app` on `addr`, over TLS when `tls` is given, until a shutdown signal arrives.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound or the TLS material cannot be read.
pub async fn serve(addr: SocketAddr, tls: Option<&TlsPaths>, app: Router) -> io::Result<()> {
    match tls {
        None => {
            let listener = tokio::net::TcpListener::bind(addr).await?;
            axum::serve(listener, app.into_make_service())
                .with_graceful_shutdown(shutdown_signal())
                .await
        }
        Some(tls) => {
            info!(cert = %tls.cert.display(), key = %tls.key.display(), "loading TLS material");
            let rustls_config = RustlsConfig::from_pem_file(&tls.cert, &tls.key).await?;

            let handle = Handle::new();
            let shutdown_handle = handle.clone();
            tokio::spawn(async move {
                shutdown_signal().await;
                shutdown_handle.graceful_shutdown(Some(SHUTDOWN_GRACE_PERIOD));
            });

            axum_server::bind_rustls(addr, rustls_config)
                .handle(handle)
                .serve(app.into_make_service())
                .await
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to listen for ctrl+c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutting down server");
}
