//! Remote service endpoints: image analysis and the tutoring assistant.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Base URL both services listen on during local development.
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8000";

/// Instruction sent with every exam photo.
pub const DEFAULT_ANALYSIS_PROMPT: &str =
    "이 문제 풀이 내용을 채점해주세요. 사용자의 응답이 무엇인지 정확하게 파악하고, 정답과 비교해주세요";

fn default_url() -> String {
    DEFAULT_SERVICE_URL.to_string()
}

fn default_prompt() -> String {
    DEFAULT_ANALYSIS_PROMPT.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// Base URL of the analysis service (`/analyze-image` is appended).
    #[serde(default = "default_url")]
    pub url: String,

    /// Grading instruction sent alongside the image.
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            prompt: default_prompt(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssistantConfig {
    /// Base URL of the assistant service (`/chatbot` is appended).
    #[serde(default = "default_url")]
    pub url: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self { url: default_url() }
    }
}

/// Reject URLs that could never reach an HTTP service.
pub(crate) fn check_url(field: &str, url: &str) -> Result<(), ConfigError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field: field.to_string(),
            reason: format!("'{url}' is not an http(s) URL"),
        })
    }
}
