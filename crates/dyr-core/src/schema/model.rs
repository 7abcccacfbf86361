//! Minimal structures for the `videoInfoRes` part of the router data.
//!
//! Everything is optional so a missing field surfaces as a malformed media
//! record instead of a deserialization error.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct VideoInfoRes {
    #[serde(default)]
    pub item_list: Option<Vec<serde_json::Value>>,
}

/// One entry of `item_list`. Only the first entry is ever decoded.
#[derive(Debug, Default, Deserialize)]
pub struct MediaRecord {
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub video: Option<Video>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Video {
    #[serde(default)]
    pub play_addr: Option<PlayAddr>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlayAddr {
    #[serde(default)]
    pub url_list: Option<Vec<String>>,
}

impl MediaRecord {
    /// First play-address URL, if the record has one.
    pub fn first_play_url(&self) -> Option<&str> {
        self.video
            .as_ref()?
            .play_addr
            .as_ref()?
            .url_list
            .as_ref()?
            .first()
            .map(String::as_str)
    }
}
