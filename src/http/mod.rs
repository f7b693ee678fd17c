//! HTTP server module.
//!
//! Serves the router over plain HTTP (TLS is expected to terminate at the
//! hosting platform's proxy) and drains connections on SIGTERM/SIGINT.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
