//! `roster serve`

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Args;
use roster_api::{build_router, AppState};
use roster_upstream::UpstreamClient;
use tracing::{error, info};

use crate::config::RosterConfig;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Listen address, overriding configuration
    #[arg(long)]
    pub bind: Option<String>,
}

pub async fn execute(
    args: ServeArgs,
    config: &RosterConfig,
    upstream: Arc<dyn UpstreamClient>,
) -> anyhow::Result<()> {
    let bind = args.bind.unwrap_or_else(|| config.server.bind_addr.clone());
    let addr: SocketAddr = bind
        .parse()
        .with_context(|| format!("invalid bind address '{}'", bind))?;

    let app = build_router(AppState::new(upstream));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;

    info!(
        address = %addr,
        upstream = %config.upstream.base_url,
        "roster started"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("roster stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "unable to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                error!(error = %err, "unable to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
