//! Root status endpoint.
//!
//! Acts as the liveness probe: it returns a fixed message and touches no state.

use axum::Json;
use serde::Serialize;

use crate::config::STATUS_MESSAGE;

#[derive(Debug, Serialize)]
pub struct StatusMessage {
    pub message: &'static str,
}

/// GET / handler.
pub async fn root() -> Json<StatusMessage> {
    Json(StatusMessage {
        message: STATUS_MESSAGE,
    })
}
