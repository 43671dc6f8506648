//! Error types for the Analytics Pro dashboard
//!
//! `ApiError` covers everything that can go wrong talking to the backend,
//! `ReportError` covers the PDF export pipeline.

use thiserror::Error;

// =============================================================================
// API Errors
// =============================================================================

/// API error type.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub status_code: Option<u16>,
}

impl ApiError {
    /// Error for a request that never produced a response (network, CORS, parse).
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: None,
        }
    }

    /// Error for a non-success HTTP status.
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: Some(status),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::transport(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::transport(format!("Invalid response body: {}", err))
    }
}

// =============================================================================
// Report Errors
// =============================================================================

/// Errors raised while assembling or saving a PDF report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A data fetch failed; the export is aborted.
    #[error("failed to fetch report data: {0}")]
    Fetch(#[from] ApiError),

    /// The data the report is built from has not been loaded.
    #[error("{0}")]
    MissingData(String),

    /// A chart could not be captured. Never aborts an export on its own.
    #[error("chart snapshot unavailable: {0}")]
    Snapshot(String),

    /// The PDF backend failed to encode the document.
    #[error("pdf error: {0}")]
    Pdf(String),

    /// The browser refused the download.
    #[error("download failed: {0}")]
    Download(String),
}

impl ReportError {
    /// Message shown to the user in the alert that ends a failed export.
    pub fn user_message(&self) -> String {
        match self {
            ReportError::MissingData(msg) => msg.clone(),
            ReportError::Fetch(_) => "Error generating the PDF".to_string(),
            other => format!("Error generating the PDF: {}", other),
        }
    }
}
