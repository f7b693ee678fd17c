//! HTTP server startup logic.

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum_server::Handle;

use crate::config::HttpServerConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind or serve: {0}")]
    Bind(#[from] std::io::Error),

    #[error("Invalid http.host or http.port: {0}")]
    Address(#[from] std::net::AddrParseError),
}

/// Resolve the listen address from configuration.
pub fn listen_addr(config: &HttpServerConfig) -> Result<SocketAddr, ServerError> {
    Ok(format!("{}:{}", config.host, config.port).parse()?)
}

/// Start the HTTP server.
///
/// This function blocks until the server shuts down and all connections have
/// drained or the grace period has elapsed.
pub async fn start_server(app: Router, config: &HttpServerConfig) -> Result<(), ServerError> {
    let addr = listen_addr(config)?;
    let handle = Handle::new();

    tracing::info!(%addr, "Starting HTTP server");

    shutdown::setup_shutdown_handler(
        handle.clone(),
        Duration::from_secs(config.shutdown_grace_seconds),
    );

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listen_addr_from_config() {
        let config = HttpServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
            shutdown_grace_seconds: 1,
        };
        assert_eq!(listen_addr(&config).unwrap().to_string(), "127.0.0.1:8000");
    }

    #[test]
    fn test_listen_addr_rejects_hostname() {
        let config = HttpServerConfig {
            host: "not a host".to_string(),
            port: 8000,
            shutdown_grace_seconds: 1,
        };
        assert!(matches!(listen_addr(&config), Err(ServerError::Address(_))));
    }

    #[tokio::test]
    async fn test_port_in_use_is_bind_error() {
        let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let config = HttpServerConfig {
            host: "127.0.0.1".to_string(),
            port: taken.local_addr().unwrap().port(),
            shutdown_grace_seconds: 1,
        };

        let result = start_server(Router::new(), &config).await;
        assert!(matches!(result, Err(ServerError::Bind(_))));
    }
}
