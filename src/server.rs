//! HTTP server initialization and runtime setup.
//!
//! Builds the upstream clients, serves the router, reloads routing on
//! `SIGHUP`, and shuts down gracefully on `SIGINT`/`SIGTERM`.

use crate::application::routing_store::RoutingStore;
use crate::config::Config;
use crate::domain::gateways::ChatPlatform;
use crate::infrastructure::http::{GitHubClient, MattermostClient};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - An upstream client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let chat = Arc::new(MattermostClient::new(
        &config.mattermost_url,
        &config.mattermost_site_url,
        &config.mattermost_token,
    )?);
    let tracker = Arc::new(GitHubClient::new(
        &config.github_api_url,
        &config.github_token,
    )?);

    if !chat.ping().await {
        tracing::warn!("Mattermost is not reachable yet; requests will fail until it is");
    }

    let routing = RoutingStore::new(config.routing());
    spawn_reload_listener(routing.clone());

    let state = AppState::new(chat, tracker, routing);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Re-reads the environment (and `.env`) and swaps in the new routing.
///
/// An invalid configuration is logged and the current routing kept.
pub fn reload_routing(store: &RoutingStore) {
    dotenvy::dotenv_override().ok();

    match crate::config::load_from_env() {
        Ok(config) => {
            let routing = config.routing();
            tracing::info!(
                routed = ?routing.routed_categories(),
                labels = ?routing.labels().as_slice(),
                "Routing configuration reloaded"
            );
            store.replace(routing);
        }
        Err(e) => {
            tracing::error!("Configuration reload rejected, keeping current routing: {:#}", e);
        }
    }
}

#[cfg(unix)]
fn spawn_reload_listener(store: RoutingStore) {
    use tokio::signal::unix::{SignalKind, signal};

    tokio::spawn(async move {
        let mut hangups = match signal(SignalKind::hangup()) {
            Ok(stream) => stream,
            Err(e) => {
                tracing::warn!("SIGHUP reload disabled: {}", e);
                return;
            }
        };
        while hangups.recv().await.is_some() {
            reload_routing(&store);
        }
    });
}

#[cfg(not(unix))]
fn spawn_reload_listener(_store: RoutingStore) {}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutdown signal received");
}
