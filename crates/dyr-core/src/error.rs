//! Error taxonomy for share-link resolution.
//!
//! Every variant is terminal for the call that produced it; nothing in the
//! pipeline retries. `ResolveError` is what went wrong; `ResolveFailure` adds
//! where in the pipeline it happened.

use thiserror::Error;

use crate::resolver::Stage;

pub type Result<T> = std::result::Result<T, ResolveError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The share text contains nothing that scans as an http(s) URL.
    #[error("no valid share link found in text")]
    NoLinkFound,

    /// Transport failure (DNS, connect, TLS, timeout, too many redirects).
    #[error("network error: {0}")]
    Network(String),

    /// The canonical page answered with a non-2xx status.
    #[error("HTTP error: status {0}")]
    Http(u32),

    /// The redirect target has no usable last path segment.
    #[error("could not derive content id from redirect target: {0}")]
    MalformedRedirect(String),

    /// Page marker missing, empty, or the enclosed text is not JSON.
    #[error("failed to extract embedded page data: {0}")]
    SchemaExtraction(String),

    /// Neither the video nor the note route is present in the page data.
    #[error("unsupported content type: page data has no video or note entry")]
    UnsupportedContentType,

    /// The selected branch lacks an item list, a play address or a URL.
    #[error("malformed media record: {0}")]
    MalformedMediaRecord(String),
}

/// A failed resolution: the error and the last pipeline state reached before it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ResolveFailure {
    stage: Stage,
    kind: ResolveError,
}

impl ResolveFailure {
    pub fn new(stage: Stage, kind: ResolveError) -> Self {
        Self { stage, kind }
    }

    /// Last state reached; the failure happened while leaving it.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn kind(&self) -> &ResolveError {
        &self.kind
    }

    pub fn into_kind(self) -> ResolveError {
        self.kind
    }
}

impl From<curl::Error> for ResolveError {
    fn from(err: curl::Error) -> Self {
        if err.is_operation_timedout() {
            return ResolveError::Network(format!("timed out: {}", err));
        }
        ResolveError::Network(err.to_string())
    }
}
