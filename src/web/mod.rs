//! Web server module for pdfsmith
//!
//! Provides the REST API of the placeholder PDF service.
//!
//! # Endpoints
//!
//! - `POST /generate_pdf` - accept a generation request, answer with the
//!   placeholder URL
//! - `GET /download_pdf` - download the pre-rendered PDF
//!
//! # Usage
//!
//! ```bash
//! pdfsmith serve --port 5000
//! ```

mod routes;
mod server;

pub use server::{ServerConfig, WebServer};

/// Default server port
pub const DEFAULT_PORT: u16 = 5000;

/// Default bind address
pub const DEFAULT_BIND: &str = "0.0.0.0";

/// Default placeholder URL returned by the generate endpoint
pub const DEFAULT_PDF_URL: &str = "http://example.com/path/to/generated_pdf.pdf";

/// Default backing file served by the download endpoint
pub const DEFAULT_PDF_PATH: &str = "/path/to/generated_pdf.pdf";

/// Default request body limit in bytes (2 MiB)
pub const DEFAULT_BODY_LIMIT: usize = 2 * 1024 * 1024;

#[cfg(test)]
mod tests {
    use super::*;

    // TC-WEB-001: Server config defaults
    #[test]
    fn test_default_constants() {
        assert_eq!(DEFAULT_PORT, 5000);
        assert_eq!(DEFAULT_BIND, "0.0.0.0");
        assert_eq!(DEFAULT_PDF_URL, "http://example.com/path/to/generated_pdf.pdf");
        assert_eq!(DEFAULT_PDF_PATH, "/path/to/generated_pdf.pdf");
        assert_eq!(DEFAULT_BODY_LIMIT, 2 * 1024 * 1024);
    }
}
