//! Shutdown Signal
//!
//! Resolves when the process is asked to stop (SIGINT or SIGTERM on unix,
//! ctrl-c elsewhere).

/// Wait for an interrupt or terminate signal
///
/// If a signal handler cannot be installed the future never resolves on that
/// signal; the other one still works.
pub async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut sigterm = match signal(SignalKind::terminate()) {
            Ok(s) => Some(s),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to register SIGTERM handler");
                None
            }
        };

        let terminate = async {
            match sigterm.as_mut() {
                Some(s) => {
                    s.recv().await;
                }
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!(signal = "SIGINT", "Shutdown signal received");
            }
            _ = terminate => {
                tracing::info!(signal = "SIGTERM", "Shutdown signal received");
            }
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
        tracing::info!(signal = "ctrl-c", "Shutdown signal received");
    }
}
