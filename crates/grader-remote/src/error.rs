//! Remote service error types.

use thiserror::Error;

/// Errors that can occur when calling the analysis or assistant service.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// HTTP transport error, including undecodable response bodies.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The analysis service answered but reported `success: false` or sent
    /// no analysis text.
    #[error("analysis failed: {0}")]
    AnalysisFailed(String),
}
