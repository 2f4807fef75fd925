//! Image analysis client.
//!
//! Sends a photo of a graded exam page (base64) with a grading instruction and
//! receives the analysis text that `grader-parser` consumes.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::RemoteError;
use crate::http::{build_client, check_response, endpoint};

/// Vision calls are slow; allow well beyond a chat round-trip.
const ANALYSIS_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    prompt: &'a str,
    base64_image: &'a str,
}

#[derive(Deserialize)]
struct AnalyzeResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    analysis: Option<serde_json::Value>,
}

/// What the analysis service reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub success: bool,
    pub analysis: Option<String>,
}

impl AnalysisResult {
    /// The analysis text, when the service succeeded and sent any.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::AnalysisFailed`] when `success` is false or the
    /// text is missing or blank.
    pub fn into_text(self) -> Result<String, RemoteError> {
        if !self.success {
            return Err(RemoteError::AnalysisFailed(
                "service reported success: false".into(),
            ));
        }
        match self.analysis {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(RemoteError::AnalysisFailed(
                "service returned no analysis text".into(),
            )),
        }
    }
}

impl From<AnalyzeResponse> for AnalysisResult {
    fn from(resp: AnalyzeResponse) -> Self {
        // Non-string payloads are kept as their JSON text.
        let analysis = resp.analysis.and_then(|value| match value {
            serde_json::Value::Null => None,
            serde_json::Value::String(text) => Some(text),
            other => Some(other.to_string()),
        });
        Self {
            success: resp.success,
            analysis,
        }
    }
}

/// HTTP client for the `/analyze-image` endpoint.
pub struct AnalysisClient {
    http: reqwest::Client,
    url: String,
}

impl AnalysisClient {
    /// Create a client for the service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::Http`] if the underlying client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, RemoteError> {
        Ok(Self {
            http: build_client(ANALYSIS_TIMEOUT)?,
            url: endpoint(base_url, "analyze-image"),
        })
    }

    /// Full URL requests are sent to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Submit one image for grading.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] if the request fails, the service returns a
    /// non-success status, or the body is not the expected JSON.
    pub async fn analyze(
        &self,
        prompt: &str,
        base64_image: &str,
    ) -> Result<AnalysisResult, RemoteError> {
        tracing::debug!(url = %self.url, image_bytes = base64_image.len(), "requesting analysis");
        let resp = self
            .http
            .post(&self.url)
            .json(&AnalyzeRequest {
                prompt,
                base64_image,
            })
            .send()
            .await?;
        read_analysis(resp).await
    }
}

async fn read_analysis(resp: reqwest::Response) -> Result<AnalysisResult, RemoteError> {
    let resp = check_response(resp).await?;
    let body: AnalyzeResponse = resp.json().await?;
    Ok(body.into())
}
