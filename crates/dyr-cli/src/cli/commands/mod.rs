//! CLI command handlers, one per file.

mod completions;
mod config;
mod extract_link;
mod input;
mod resolve;

pub use completions::run_completions;
pub use config::run_config;
pub use extract_link::run_extract_link;
pub use resolve::run_resolve;
