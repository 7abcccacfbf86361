use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Mobile Safari identity; the share pages serve broken payloads to default
/// client identifiers.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_2 like Mac OS X) \
     AppleWebKit/605.1.15 (KHTML, like Gecko) EdgiOS/121.0.2277.107 Version/17.0 \
     Mobile/15E148 Safari/604.1";

pub const DEFAULT_PAGE_BASE_URL: &str = "https://www.iesdouyin.com";

pub const DEFAULT_TITLE_PREFIX: &str = "douyin";

/// Global configuration loaded from `~/.config/dyr/config.toml`.
///
/// Every key is optional in the file; missing keys take the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DyrConfig {
    /// `User-Agent` sent on both fetches.
    pub user_agent: String,
    /// Scheme and host of the canonical content page (`<base>/share/video/<id>`).
    pub page_base_url: String,
    /// Prefix of the synthesized title used when a post has no description.
    pub title_prefix: String,
    /// Connect timeout per request, in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-transfer timeout per request, in seconds.
    pub timeout_secs: u64,
    /// Maximum redirects followed when resolving the share link.
    pub max_redirects: u32,
    /// Additional request headers sent on both fetches.
    pub extra_headers: BTreeMap<String, String>,
}

impl Default for DyrConfig {
    fn default() -> Self {
        let mut extra_headers = BTreeMap::new();
        extra_headers.insert(
            "Accept".to_string(),
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8"
                .to_string(),
        );
        extra_headers.insert(
            "Accept-Language".to_string(),
            "zh-CN,zh;q=0.9,en;q=0.8".to_string(),
        );
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            page_base_url: DEFAULT_PAGE_BASE_URL.to_string(),
            title_prefix: DEFAULT_TITLE_PREFIX.to_string(),
            connect_timeout_secs: 15,
            timeout_secs: 30,
            max_redirects: 10,
            extra_headers,
        }
    }
}

impl DyrConfig {
    /// Headers for both fetches: `User-Agent` first, then `extra_headers`.
    /// An extra `User-Agent` entry is ignored.
    pub fn request_headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![("User-Agent".to_string(), self.user_agent.clone())];
        headers.extend(
            self.extra_headers
                .iter()
                .filter(|(k, _)| !k.trim().eq_ignore_ascii_case("user-agent"))
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        headers
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dyr")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DyrConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DyrConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path. The file must exist.
pub fn load_from(path: &Path) -> Result<DyrConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: DyrConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
