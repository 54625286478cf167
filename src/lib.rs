//! pdfsmith - PDF generation web service
//!
//! A small HTTP service with two endpoints: `POST /generate_pdf` accepts a
//! generation request and returns the URL of the produced document, and
//! `GET /download_pdf` streams the configured PDF back as a file
//! attachment.
//!
//! Generation is currently a stub that returns a placeholder URL without
//! inspecting the request body. The download endpoint serves a single
//! configured file.
//!
//! # Example
//!
//! ```no_run
//! use pdfsmith::{ServerConfig, WebServer};
//!
//! # async fn serve() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! let config = ServerConfig::default().with_port(5000);
//! let server = WebServer::with_config(config);
//! server.run().await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod web;

pub use cli::{Cli, Commands, ServeArgs};
pub use config::{CliOverrides, Config, ConfigError};
pub use web::{ServerConfig, WebServer};

/// Standard exit codes
pub mod exit_codes {
    /// Successful completion
    pub const SUCCESS: i32 = 0;
    /// General error
    pub const GENERAL_ERROR: i32 = 1;
    /// Configuration error
    pub const CONFIG_ERROR: i32 = 2;
}
