//! Dave-PMEA: a single-turn prompt improvement service.
//!
//! Exposes a status root, a `/dave` endpoint that wraps the caller's text in a
//! fixed improvement template and records the exchange in an in-memory log,
//! and the service's OpenAPI document.

pub mod config;
pub mod error;
pub mod http;
pub mod improve;
pub mod memory;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
