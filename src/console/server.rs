use std::future::Future;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::console::routes::{self, AppState};
use crate::console::websocket;

/// HTTP + WebSocket surface through which operators watch the dashboard
/// and issue commands.
pub struct ConsoleServer {
    state: AppState,
    bind_addr: String,
}

impl ConsoleServer {
    pub fn new(state: AppState, bind_addr: String) -> Self {
        Self { state, bind_addr }
    }

    pub fn router(state: AppState) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/", get(routes::get_page))
            .route("/api/view", get(routes::get_view))
            .route("/api/live", get(websocket::live_view_handler))
            .route("/api/unblock", post(routes::unblock))
            .route("/api/clear_alerts", post(routes::clear_alerts))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(cors),
            )
            .with_state(state)
    }

    /// Bind the console listener. Failing here is fatal to startup.
    pub async fn bind(&self) -> Result<TcpListener> {
        let listener = TcpListener::bind(&self.bind_addr)
            .await
            .with_context(|| format!("Failed to bind console on {}", self.bind_addr))?;
        info!("Console listening on {}", self.bind_addr);
        Ok(listener)
    }

    /// Serve on `listener` until `shutdown` resolves.
    pub async fn run(
        &self,
        listener: TcpListener,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> Result<()> {
        let app = Self::router(self.state.clone());

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .context("Console server failed")?;

        Ok(())
    }
}
