//! REST API routes for the placeholder PDF service
//!
//! Two handlers: a generate endpoint that returns a fixed placeholder URL
//! without looking at the request body, and a download endpoint that serves
//! the pre-rendered backing file as an attachment.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

use super::{DEFAULT_PDF_PATH, DEFAULT_PDF_URL};

/// Fallback attachment filename when the backing path has no usable name
const FALLBACK_FILENAME: &str = "generated_pdf.pdf";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// URL returned by the generate endpoint
    pub pdf_url: String,
    /// Backing file served by the download endpoint
    pub pdf_path: PathBuf,
}

impl AppState {
    pub fn new(pdf_url: impl Into<String>, pdf_path: impl Into<PathBuf>) -> Self {
        Self {
            pdf_url: pdf_url.into(),
            pdf_path: pdf_path.into(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_PDF_URL, DEFAULT_PDF_PATH)
    }
}

/// Build the API router
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/generate_pdf", post(generate_pdf))
        .route("/download_pdf", get(download_pdf))
}

/// Generate endpoint response
#[derive(Debug, Serialize)]
pub struct GeneratePdfResponse {
    pub pdf_url: String,
}

/// Accept a generation request
///
/// The body is read into memory and discarded; no schema is enforced, so
/// malformed JSON and empty bodies succeed like any other payload. The
/// response carries the configured placeholder URL regardless of input.
async fn generate_pdf(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Json<GeneratePdfResponse> {
    tracing::debug!(bytes = body.len(), "generate_pdf request");

    Json(GeneratePdfResponse {
        pdf_url: state.pdf_url.clone(),
    })
}

/// Download response struct
///
/// Carries the file bytes plus the attachment headers that make clients save
/// the body instead of rendering it.
#[derive(Debug)]
pub struct PdfAttachment {
    data: Vec<u8>,
    filename: String,
}

impl PdfAttachment {
    pub fn new(data: Vec<u8>, filename: impl Into<String>) -> Self {
        Self {
            data,
            filename: filename.into(),
        }
    }
}

impl IntoResponse for PdfAttachment {
    fn into_response(self) -> axum::response::Response {
        let disposition = format!("attachment; filename=\"{}\"", self.filename);
        (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "application/pdf".to_string()),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            self.data,
        )
            .into_response()
    }
}

/// Serve the backing PDF as a downloadable attachment
///
/// The path is operator configuration, never derived from the request. The
/// file is read in one blocking call; a missing file maps to 404, any other
/// I/O failure to 500.
async fn download_pdf(State(state): State<Arc<AppState>>) -> Result<PdfAttachment, AppError> {
    let data = std::fs::read(&state.pdf_path).map_err(|e| {
        tracing::warn!(
            path = %state.pdf_path.display(),
            error = %e,
            "download_pdf read failed"
        );
        match e.kind() {
            std::io::ErrorKind::NotFound => AppError::NotFound(format!(
                "Backing file not found: {}",
                state.pdf_path.display()
            )),
            _ => AppError::Internal(format!("Failed to read backing file: {}", e)),
        }
    })?;

    let filename = state
        .pdf_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(FALLBACK_FILENAME)
        .to_string();

    Ok(PdfAttachment::new(data, filename))
}

/// API error type
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: String,
        }

        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
