#![allow(dead_code)]

pub mod page_server;

/// Canonical page with a `video_(id)/page` branch whose first item carries
/// `desc` and a watermarked play URL.
pub fn video_page(desc: &str, play_url: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html><head><meta charset="utf-8"><title>抖音</title></head><body>
<div id="root"></div>
<script>window._ROUTER_DATA = {{"loaderData":{{"layout":{{}},"video_(id)/page":{{"videoInfoRes":{{"status_code":0,"item_list":[{{"aweme_id":"7301","desc":"{}","video":{{"play_addr":{{"uri":"v0d00fg","url_list":["{}"]}}}}}}]}}}}}}}}</script>
<script>window.__tail = true;</script>
</body></html>"#,
        desc, play_url
    )
}
