//! Share-link extraction from free text.
//!
//! Share messages wrap the real link in prose, emoji, hashtags and sometimes a
//! second tracking link. Only the leftmost link is authoritative.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ResolveError, Result};

/// Scheme, then one or more of: ASCII letters, digits, the range `$`..`_`,
/// `@ . & +`, `! * ( ) ,`, or a percent-encoded octet.
const SHARE_LINK_PATTERN: &str =
    r"http[s]?://(?:[a-zA-Z]|[0-9]|[$-_@.&+]|[!*\(\),]|(?:%[0-9a-fA-F][0-9a-fA-F]))+";

static SHARE_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SHARE_LINK_PATTERN).expect("share link pattern compiles"));

/// Returns the leftmost URL in `text`.
pub fn extract_first_link(text: &str) -> Result<&str> {
    SHARE_LINK_RE
        .find(text)
        .map(|m| m.as_str())
        .ok_or(ResolveError::NoLinkFound)
}

/// All URLs in scan order. Used by the CLI to show what was skipped.
pub fn extract_links(text: &str) -> Vec<&str> {
    SHARE_LINK_RE.find_iter(text).map(|m| m.as_str()).collect()
}
