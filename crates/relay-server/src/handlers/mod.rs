//! HTTP route handlers for the gateway server.

pub mod client;

/// Health check endpoint.
pub async fn health() -> &'static str {
    "OK"
}
