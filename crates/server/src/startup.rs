use std::net::SocketAddr;

use axum::Router;
use configs::{AppConfig, SeedConfig};
use rand::{rngs::StdRng, SeedableRng};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Fresh stores, filled with dummy records when seeding is enabled.
pub async fn build_state(seed: &SeedConfig) -> ServerState {
    let state = ServerState::default();
    if seed.enabled {
        let mut rng = StdRng::from_entropy();
        state.users.seed(seed.users, &mut rng).await;
        state.movies.seed(seed.movies, &mut rng).await;
    }
    state
}

pub fn build_app(state: ServerState) -> Router {
    routes::build_router(state, build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
}

/// Serve until Ctrl+C using an already loaded configuration.
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg.seed).await;
    let app = build_app(state);

    let addr: SocketAddr = cfg.server.bind_addr().parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, seeded = cfg.seed.enabled, "starting server crate");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
