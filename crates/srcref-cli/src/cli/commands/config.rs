//! `srcref config` – show the resolved configuration.

use anyhow::Result;
use srcref_core::config::{self, SrcrefConfig, KEY_INTERVAL_ENV};

pub fn run_config(cfg: &SrcrefConfig) -> Result<()> {
    println!("config: {}", config::config_path()?.display());
    println!(
        "key interval: {}ms ({} overrides)",
        cfg.key_interval().as_millis(),
        KEY_INTERVAL_ENV
    );
    let registry = cfg.scheme_registry();
    let schemes: Vec<&str> = registry.iter().collect();
    let schemes = schemes.join(", ");
    println!("schemes: {schemes}");
    Ok(())
}
