//! Serves the OpenAPI document built at startup.

use axum::{extract::State, Json};
use serde_json::Value;

use crate::state::AppState;

/// GET /openapi.json handler.
pub async fn document(State(state): State<AppState>) -> Json<Value> {
    Json(state.openapi.as_ref().clone())
}
