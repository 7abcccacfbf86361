//! `dyr extract-link` – offline link extraction.

use anyhow::Result;
use dyr_core::{link, ResolveError};

use super::input::share_text;

pub fn run_extract_link(words: &[String], all: bool) -> Result<bool> {
    let text = share_text(words)?;
    let links = if all {
        link::extract_links(&text)
    } else {
        link::extract_first_link(&text).into_iter().collect()
    };

    if links.is_empty() {
        eprintln!("{}", ResolveError::NoLinkFound);
        return Ok(false);
    }
    for l in links {
        println!("{}", l);
    }
    Ok(true)
}
