//! Embedded page data: marker scan, branch selection and media fields.
//!
//! The canonical page assigns its router state to `window._ROUTER_DATA` inside
//! a script tag. The JSON is located textually, parsed, and navigated along
//! `loaderData.<route>.videoInfoRes.item_list[0]`.

mod model;
mod variant;

pub use model::{MediaRecord, PlayAddr, Video, VideoInfoRes};
pub use variant::PageVariant;

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ResolveError, Result};

static ROUTER_DATA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)window\._ROUTER_DATA\s*=\s*(.*?)</script>")
        .expect("router data pattern compiles")
});

/// Start of the router object when the assignment is preceded by other text.
const APP_ANCHOR: &str = "{\"app\":";

/// Substring marking the watermarked variant of a play URL.
pub const WATERMARK_MARKER: &str = "playwm";
pub const CLEAN_MARKER: &str = "play";

/// Fields read from the first media record of the selected branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFields {
    pub variant: PageVariant,
    /// Play URL with the watermark marker already replaced.
    pub media_url: String,
    pub description: Option<String>,
}

/// Reads the media fields out of a canonical page.
pub fn read_page(html: &str) -> Result<PageFields> {
    let router = extract_router_data(html)?;
    let (variant, branch) = select_branch(&router)?;
    read_fields(variant, branch)
}

/// Reads the media fields out of an already selected branch.
pub fn read_fields(variant: PageVariant, branch: &Value) -> Result<PageFields> {
    let record = first_media_record(branch)?;
    let play_url = record
        .first_play_url()
        .filter(|u| !u.is_empty())
        .ok_or_else(|| {
            ResolveError::MalformedMediaRecord("no play address URL in first item".to_string())
        })?;

    Ok(PageFields {
        variant,
        media_url: strip_watermark(play_url),
        description: record.desc,
    })
}

/// Finds the `window._ROUTER_DATA = ... </script>` payload and parses it.
pub fn extract_router_data(html: &str) -> Result<Value> {
    let caps = ROUTER_DATA_RE.captures(html).ok_or_else(|| {
        ResolveError::SchemaExtraction("window._ROUTER_DATA marker not found".to_string())
    })?;
    let raw = caps.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
    if raw.is_empty() {
        return Err(ResolveError::SchemaExtraction(
            "window._ROUTER_DATA is empty".to_string(),
        ));
    }

    match serde_json::from_str::<Value>(raw) {
        Ok(v) => Ok(v),
        Err(first_err) => {
            // Realign on the router object if something precedes it.
            if let Some(idx) = raw.find(APP_ANCHOR).filter(|&i| i > 0) {
                if let Ok(v) = serde_json::from_str::<Value>(&raw[idx..]) {
                    tracing::debug!(offset = idx, "router data parsed after realignment");
                    return Ok(v);
                }
            }
            Err(ResolveError::SchemaExtraction(format!(
                "invalid JSON in window._ROUTER_DATA: {}",
                first_err
            )))
        }
    }
}

/// Picks the first known route present in `loaderData`, in priority order.
pub fn select_branch(router: &Value) -> Result<(PageVariant, &Value)> {
    let loader = router
        .get("loaderData")
        .and_then(Value::as_object)
        .ok_or(ResolveError::UnsupportedContentType)?;

    PageVariant::PRIORITY
        .iter()
        .find_map(|&variant| loader.get(variant.route_key()).map(|b| (variant, b)))
        .ok_or(ResolveError::UnsupportedContentType)
}

/// Decodes the first entry of `videoInfoRes.item_list` in a branch.
pub fn first_media_record(branch: &Value) -> Result<MediaRecord> {
    let info = branch.get("videoInfoRes").ok_or_else(|| {
        ResolveError::MalformedMediaRecord("branch has no videoInfoRes".to_string())
    })?;
    let info = VideoInfoRes::deserialize(info)
        .map_err(|e| ResolveError::MalformedMediaRecord(format!("videoInfoRes: {}", e)))?;
    let first = info
        .item_list
        .as_deref()
        .and_then(<[Value]>::first)
        .ok_or_else(|| {
            ResolveError::MalformedMediaRecord("item_list is missing or empty".to_string())
        })?;
    MediaRecord::deserialize(first)
        .map_err(|e| ResolveError::MalformedMediaRecord(format!("item_list[0]: {}", e)))
}

/// Replaces every watermark marker in `url`. Nothing else is touched.
pub fn strip_watermark(url: &str) -> String {
    url.replace(WATERMARK_MARKER, CLEAN_MARKER)
}
