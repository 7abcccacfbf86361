//! Redirect resolution: share link → content ID.

use tracing::debug;

use crate::error::{ResolveError, Result};
use crate::fetch::Fetch;

/// Extracts the content ID from a redirect-resolved URL.
///
/// Query string and fragment are ignored, trailing `/` are skipped, and the
/// last remaining path segment is returned.
pub fn content_id_from_url(url: &str) -> Result<String> {
    let parsed = url::Url::parse(url)
        .map_err(|e| ResolveError::MalformedRedirect(format!("{}: {}", url, e)))?;
    let segment = parsed
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .ok_or_else(|| ResolveError::MalformedRedirect(format!("{}: empty path", url)))?;
    Ok(segment.to_string())
}

/// GETs the share link (redirects followed by the fetcher) and derives the
/// content ID from where it landed.
///
/// The status of this response is not checked; only the final address matters.
pub fn resolve_content_id<F: Fetch + ?Sized>(
    fetcher: &F,
    share_url: &str,
    headers: &[(String, String)],
) -> Result<String> {
    let response = fetcher.get(share_url, headers)?;
    debug!(
        share_url,
        final_url = %response.final_url,
        status = response.status,
        "share link resolved"
    );
    content_id_from_url(&response.final_url)
}
