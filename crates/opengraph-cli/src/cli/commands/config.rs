//! `opengraph config` – show where the config lives and what it contains.

use anyhow::Result;
use opengraph_core::config::{self, FetchConfig};

pub fn run_config(cfg: &FetchConfig) -> Result<i32> {
    println!("# {}", config::config_path()?.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(0)
}
