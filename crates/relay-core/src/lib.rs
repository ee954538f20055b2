//! Core contract shared between the gateway and its upstream client.
//!
//! This crate defines the injection seam of the system: the [`HelloClient`]
//! trait the server consumes, and the [`ClientError`] taxonomy its
//! implementations report.

use async_trait::async_trait;
use thiserror::Error;

/// Errors reported by a greeting client implementation.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never produced a response (connect failure, DNS, etc.).
    #[error("upstream request failed: {0}")]
    Request(String),

    /// The upstream answered with a non-success status.
    #[error("upstream returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response arrived but its body could not be read.
    #[error("failed to read upstream response: {0}")]
    Body(String),
}

/// Client for the upstream greeting service.
///
/// The server holds one implementation behind an `Arc` for the lifetime of
/// the process. Implementations must tolerate concurrent calls; any retry,
/// timeout, or circuit-breaking policy is theirs, not the caller's.
#[async_trait]
pub trait HelloClient: Send + Sync {
    /// Fetches the greeting from the upstream service.
    async fn hello(&self) -> Result<String, ClientError>;
}
