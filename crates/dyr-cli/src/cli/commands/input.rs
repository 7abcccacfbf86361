//! Share text from arguments or stdin.

use anyhow::{Context, Result};
use std::io;

/// Joins `words` with single spaces, or reads all of stdin when there are none.
pub fn share_text(words: &[String]) -> Result<String> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }
    io::read_to_string(io::stdin()).context("read share text from stdin")
}
