//! `dyr resolve` – share text to JSON result on stdout.

use anyhow::{Context, Result};
use dyr_core::config::DyrConfig;
use dyr_core::resolve_share_text;

use super::input::share_text;

/// Prints the response JSON. Returns whether the resolution succeeded.
pub fn run_resolve(cfg: &DyrConfig, words: &[String]) -> Result<bool> {
    let text = share_text(words)?;
    let response = resolve_share_text(&text, cfg);
    let json = response.to_json_pretty().context("serialize response")?;
    println!("{}", json);
    Ok(response.is_success())
}
