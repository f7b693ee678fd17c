//! Shared application state for request handlers.

use std::sync::Arc;

use serde_json::Value;

use crate::config::AppConfig;
use crate::memory::MemoryLog;
use crate::openapi::build_document;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Created once at startup and dropped after the server shuts down; the
/// memory log it owns lives exactly that long.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub memory: MemoryLog,
    pub openapi: Arc<Value>,
}

impl AppState {
    /// Creates a new application state with an empty memory log.
    pub fn new(config: AppConfig) -> Self {
        let openapi = build_document(&config.openapi);
        Self {
            config: Arc::new(config),
            memory: MemoryLog::new(),
            openapi: Arc::new(openapi),
        }
    }
}
