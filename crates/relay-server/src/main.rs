//! HTTP server entry point and Axum router setup.
//!
//! Builds the upstream greeting client from configuration, wires it into
//! the shared state, and serves the gateway routes.

mod config;
mod error;
mod handlers;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::routing::get;
use axum::Router;
use relay_client::RestHelloClient;
use relay_core::HelloClient;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;

/// Shared server state accessible from all handlers.
///
/// The upstream client handle is supplied once at construction and never
/// reassigned; handlers share it read-only.
pub struct ServerState {
    pub hello: Arc<dyn HelloClient>,
}

impl ServerState {
    /// Creates the state around an already-constructed client handle.
    pub fn new(hello: Arc<dyn HelloClient>) -> Self {
        Self { hello }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .compact()
        .init();

    let config = ServerConfig::from_env();
    info!("Upstream greeting service at {}", config.upstream_url);

    let client = Arc::new(RestHelloClient::new(&config.upstream_url));
    let state = Arc::new(ServerState::new(client));
    let app = app(state);

    info!("Starting server on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the gateway router around the given state.
fn app(state: Arc<ServerState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    let logged_routes = Router::new()
        .route("/ft/client", get(handlers::client::get))
        .layer(trace_layer);

    Router::new()
        .merge(logged_routes)
        .route("/health", get(handlers::health))
        .layer(cors)
        .with_state(state)
}
