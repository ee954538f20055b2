//! Delegating endpoint that forwards to the upstream greeting client.

use std::sync::Arc;

use axum::extract::State;

use crate::error::AppError;
use crate::ServerState;

/// Returns the upstream greeting verbatim.
///
/// Makes exactly one call on the injected client per request and performs
/// no recovery of its own; failures surface through [`AppError`].
pub async fn get(State(state): State<Arc<ServerState>>) -> Result<String, AppError> {
    let greeting = state.hello.hello().await?;
    Ok(greeting)
}
