//! Canonical content page fetch.
//!
//! The redirect target's own HTML is often a minimal shell; the page built from
//! the content ID reliably embeds the full router data.

use crate::error::{ResolveError, Result};
use crate::fetch::Fetch;

/// `<base>/share/video/<content_id>`; a trailing `/` on `base` is ignored.
pub fn canonical_page_url(base: &str, content_id: &str) -> String {
    format!("{}/share/video/{}", base.trim_end_matches('/'), content_id)
}

/// GETs the canonical page and returns its HTML. Non-2xx is an error.
pub fn fetch_page<F: Fetch + ?Sized>(
    fetcher: &F,
    base: &str,
    content_id: &str,
    headers: &[(String, String)],
) -> Result<String> {
    let url = canonical_page_url(base, content_id);
    let response = fetcher.get(&url, headers)?;
    if !response.is_success() {
        tracing::warn!(%url, status = response.status, "canonical page request failed");
        return Err(ResolveError::Http(response.status));
    }
    Ok(response.text())
}
