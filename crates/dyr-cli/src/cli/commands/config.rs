//! `dyr config` – show config path and effective values.

use anyhow::{Context, Result};
use dyr_core::config;
use std::path::Path;

pub fn run_config(explicit: Option<&Path>) -> Result<()> {
    let (path, cfg) = match explicit {
        Some(p) => (p.to_path_buf(), config::load_from(p)?),
        None => (config::config_path()?, config::load_or_init()?),
    };
    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
    Ok(())
}
