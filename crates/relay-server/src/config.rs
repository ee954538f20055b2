//! Environment-driven server configuration.

/// Runtime configuration for the gateway server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Base URL of the upstream greeting service.
    pub upstream_url: String,
}

impl ServerConfig {
    /// Reads configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("RELAY_BIND_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8000".into()),
            upstream_url: std::env::var("RELAY_UPSTREAM_URL")
                .unwrap_or_else(|_| "http://localhost:8001".into()),
        }
    }
}
