//! HTTP server startup and shutdown

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::core::{Config, Result, ServerState};

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    /// Build the full application router
    ///
    /// Cross-origin requests are only allowed in development; in
    /// production the frontend is served same-origin.
    pub fn build_router(state: ServerState) -> Router {
        let cors = if state.config.is_development() {
            CorsLayer::permissive()
        } else {
            CorsLayer::new()
        };
        Router::new()
            .merge(api::health::router())
            .merge(api::zones::router())
            .merge(api::seats::router())
            .merge(api::sessions::router())
            .merge(api::quarters::router())
            .merge(api::exceptions::router())
            .merge(api::restrictions::router())
            .merge(api::calendar::router())
            .merge(api::bookings::router())
            .merge(api::activity::router())
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .with_state(state)
    }

    pub async fn run(&self) -> Result<()> {
        let app = Self::build_router(self.state.clone());

        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        tracing::info!("Reserve Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
                tracing::info!("Shutting down...");
            })
            .await?;

        Ok(())
    }
}
