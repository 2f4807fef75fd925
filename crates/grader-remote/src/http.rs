//! Shared HTTP helpers for the service clients.
//!
//! Centralizes client construction and status-code checks so the client
//! modules stay focused on request bodies and response mapping.

use std::time::Duration;

use crate::error::RemoteError;

const USER_AGENT: &str = concat!("grader/", env!("CARGO_PKG_VERSION"));

/// Build a `reqwest::Client` with the shared user agent and a request timeout.
pub(crate) fn build_client(timeout: Duration) -> Result<reqwest::Client, RemoteError> {
    Ok(reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()?)
}

/// Join a configured base URL and an endpoint path without doubling slashes.
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success, otherwise
/// [`RemoteError::Api`] with the status code and response body.
pub(crate) async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, RemoteError> {
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        tracing::debug!(status, url = %resp.url(), "service returned an error status");
        return Err(RemoteError::Api {
            status,
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}
