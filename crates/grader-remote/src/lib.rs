//! # grader-remote
//!
//! HTTP clients for the two services the grader talks to:
//! - the image analysis service (`POST {base}/analyze-image`), which turns a
//!   photo of a graded exam into key-value analysis text
//! - the tutoring assistant (`POST {base}/chatbot`), which answers a
//!   role-tagged conversation with one message

mod analysis;
mod assistant;
mod error;
mod http;

pub use analysis::{AnalysisClient, AnalysisResult};
pub use assistant::AssistantClient;
pub use error::RemoteError;
