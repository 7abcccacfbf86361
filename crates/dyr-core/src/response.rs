//! Uniform outbound shape for a resolution attempt.

use serde::{Deserialize, Serialize};

use crate::error::{ResolveError, ResolveFailure};
use crate::resolver::ResolutionResult;

pub const USAGE_TIP: &str =
    "The download link can be used directly to download the watermark-free video.";

const ERROR_PREFIX: &str = "failed to get download link: ";

/// `{"status": "success", ...}` or `{"status": "error", "error": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ShareResponse {
    Success {
        video_id: String,
        title: String,
        download_url: String,
        description: String,
        usage_tip: String,
    },
    Error {
        error: String,
    },
}

impl From<&ResolutionResult> for ShareResponse {
    fn from(r: &ResolutionResult) -> Self {
        ShareResponse::Success {
            video_id: r.content_id.clone(),
            title: r.title.clone(),
            download_url: r.media_url.clone(),
            description: format!("Video title: {}", r.title),
            usage_tip: USAGE_TIP.to_string(),
        }
    }
}

impl From<&ResolveError> for ShareResponse {
    fn from(e: &ResolveError) -> Self {
        ShareResponse::Error {
            error: format!("{}{}", ERROR_PREFIX, e),
        }
    }
}

impl ShareResponse {
    pub fn from_result(result: Result<ResolutionResult, ResolveFailure>) -> Self {
        match &result {
            Ok(r) => r.into(),
            Err(f) => f.kind().into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ShareResponse::Success { .. })
    }

    /// Pretty-printed JSON. Non-ASCII text is written as-is, not escaped.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
