//! Web server implementation
//!
//! Provides the main server struct, its configuration, and the run loop with
//! graceful shutdown.

use axum::Router;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;

use super::routes::{api_routes, AppState};
use super::{DEFAULT_BIND, DEFAULT_BODY_LIMIT, DEFAULT_PDF_PATH, DEFAULT_PDF_URL, DEFAULT_PORT};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on
    pub port: u16,
    /// Address to bind to
    pub bind: String,
    /// Backing file served by the download endpoint
    pub pdf_path: PathBuf,
    /// Placeholder URL returned by the generate endpoint
    pub pdf_url: String,
    /// Maximum request body size in bytes
    pub body_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind: DEFAULT_BIND.to_string(),
            pdf_path: PathBuf::from(DEFAULT_PDF_PATH),
            pdf_url: DEFAULT_PDF_URL.to_string(),
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl ServerConfig {
    /// Create a new server config with the given port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Create a new server config with the given bind address
    pub fn with_bind(mut self, bind: impl Into<String>) -> Self {
        self.bind = bind.into();
        self
    }

    /// Create a new server config with the given backing file path
    pub fn with_pdf_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.pdf_path = path.into();
        self
    }

    /// Create a new server config with the given placeholder URL
    pub fn with_pdf_url(mut self, url: impl Into<String>) -> Self {
        self.pdf_url = url.into();
        self
    }

    /// Create a new server config with the given request body limit
    pub fn with_body_limit(mut self, limit: usize) -> Self {
        self.body_limit = limit;
        self
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.bind, self.port).parse()
    }
}

/// Web server instance
pub struct WebServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl WebServer {
    /// Create a new web server with default configuration
    pub fn new() -> Self {
        Self::with_config(ServerConfig::default())
    }

    /// Create a new web server with the given configuration
    pub fn with_config(config: ServerConfig) -> Self {
        let state = Arc::new(AppState::new(
            config.pdf_url.clone(),
            config.pdf_path.clone(),
        ));
        Self { config, state }
    }

    /// Get the server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router
    pub fn router(&self) -> Router {
        api_routes()
            .layer(CorsLayer::permissive())
            .layer(RequestBodyLimitLayer::new(self.config.body_limit))
            .with_state(self.state.clone())
    }

    /// Run the server until a shutdown signal arrives
    pub async fn run(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let addr = self.config.socket_addr()?;
        let router = self.router();

        println!("Starting server on http://{}", addr);
        println!("API endpoints:");
        println!("  POST /generate_pdf - Accept a generation request");
        println!("  GET  /download_pdf - Download the rendered PDF");

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("server stopped");
        Ok(())
    }
}

impl Default for WebServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve when SIGTERM or SIGINT is received
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to setup SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to setup SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 5000);
        assert_eq!(config.bind, "0.0.0.0");
        assert_eq!(config.pdf_path, PathBuf::from("/path/to/generated_pdf.pdf"));
        assert_eq!(
            config.pdf_url,
            "http://example.com/path/to/generated_pdf.pdf"
        );
        assert_eq!(config.body_limit, 2 * 1024 * 1024);
    }

    #[test]
    fn test_server_config_builder() {
        let config = ServerConfig::default()
            .with_port(3000)
            .with_bind("127.0.0.1")
            .with_pdf_path("/srv/pdfs/out.pdf")
            .with_pdf_url("https://files.internal/out.pdf")
            .with_body_limit(1024);

        assert_eq!(config.port, 3000);
        assert_eq!(config.bind, "127.0.0.1");
        assert_eq!(config.pdf_path, PathBuf::from("/srv/pdfs/out.pdf"));
        assert_eq!(config.pdf_url, "https://files.internal/out.pdf");
        assert_eq!(config.body_limit, 1024);
    }

    #[test]
    fn test_server_config_socket_addr() {
        let config = ServerConfig::default();
        let addr = config.socket_addr().unwrap();
        assert_eq!(addr.port(), 5000);
        assert_eq!(addr.ip().to_string(), "0.0.0.0");
    }

    #[test]
    fn test_server_config_socket_addr_invalid_bind() {
        let config = ServerConfig::default().with_bind("not an address");
        assert!(config.socket_addr().is_err());
    }

    #[test]
    fn test_web_server_new() {
        let server = WebServer::new();
        assert_eq!(server.config().port, 5000);
    }

    #[test]
    fn test_web_server_with_config() {
        let config = ServerConfig::default().with_port(9000);
        let server = WebServer::with_config(config);
        assert_eq!(server.config().port, 9000);
    }

    #[test]
    fn test_web_server_router_builds() {
        let server = WebServer::new();
        let _router = server.router();
    }
}
