//! Blocking HTTP GET.
//!
//! Uses the curl crate (libcurl) with redirects followed by libcurl itself, and
//! reports where the request finally landed alongside status and body. The
//! pipeline only sees the `Fetch` trait so tests can substitute canned pages.

use std::time::Duration;

use crate::config::DyrConfig;
use crate::error::Result;

/// Outcome of one GET after all redirects were followed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    /// Effective URL of the last request in the redirect chain.
    pub final_url: String,
    /// HTTP status of the final response.
    pub status: u32,
    pub body: Vec<u8>,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text; invalid UTF-8 sequences are replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// One blocking GET with the given headers, following redirects.
pub trait Fetch {
    fn get(&self, url: &str, headers: &[(String, String)]) -> Result<FetchResponse>;
}

/// libcurl-backed fetcher. A fresh `Easy` handle is used per request.
#[derive(Debug, Clone)]
pub struct CurlFetcher {
    connect_timeout: Duration,
    timeout: Duration,
    max_redirects: u32,
}

impl CurlFetcher {
    pub fn new(connect_timeout: Duration, timeout: Duration, max_redirects: u32) -> Self {
        Self {
            connect_timeout,
            timeout,
            max_redirects,
        }
    }

    pub fn from_config(cfg: &DyrConfig) -> Self {
        Self::new(
            Duration::from_secs(cfg.connect_timeout_secs),
            Duration::from_secs(cfg.timeout_secs),
            cfg.max_redirects,
        )
    }
}

impl Default for CurlFetcher {
    fn default() -> Self {
        Self::from_config(&DyrConfig::default())
    }
}

impl Fetch for CurlFetcher {
    /// Runs in the current thread.
    fn get(&self, url: &str, headers: &[(String, String)]) -> Result<FetchResponse> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(self.max_redirects)?;
        // Empty string: advertise every encoding libcurl can decode.
        easy.accept_encoding("")?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        // Build curl list for request headers (e.g. "Name: value").
        let mut list = curl::easy::List::new();
        for (k, v) in headers {
            list.append(&format!("{}: {}", k.trim(), v.trim()))?;
        }
        if !headers.is_empty() {
            easy.http_headers(list)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        let final_url = easy
            .effective_url()?
            .map(str::to_string)
            .unwrap_or_else(|| url.to_string());

        tracing::debug!(url, %final_url, status, bytes = body.len(), "GET finished");

        Ok(FetchResponse {
            final_url,
            status,
            body,
        })
    }
}
