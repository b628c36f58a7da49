use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::registry::{SchemeRegistry, DEFAULT_SCHEMES};

/// Environment variable overriding the keystroke interval (`150ms`, `2s`, or bare milliseconds).
pub const KEY_INTERVAL_ENV: &str = "SRCREF_KEY_INTERVAL";

/// Keystroke interval when neither the environment nor the config sets one.
/// Suits shared build hosts; a workstation can go as low as 10ms.
pub const KEY_INTERVAL_DEFAULT: Duration = Duration::from_millis(100);

/// Global configuration loaded from `~/.config/srcref/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SrcrefConfig {
    /// URL schemes the fetch layer can handle. Case-insensitive.
    #[serde(default = "default_schemes")]
    pub schemes: Vec<String>,
    /// Delay between keystrokes sent to a VM, in milliseconds.
    #[serde(default)]
    pub key_interval_ms: Option<u64>,
}

fn default_schemes() -> Vec<String> {
    DEFAULT_SCHEMES.iter().map(|s| s.to_string()).collect()
}

impl Default for SrcrefConfig {
    fn default() -> Self {
        Self {
            schemes: default_schemes(),
            key_interval_ms: None,
        }
    }
}

impl SrcrefConfig {
    /// Builds the immutable scheme registry from `schemes`.
    pub fn scheme_registry(&self) -> SchemeRegistry {
        SchemeRegistry::from_schemes(&self.schemes)
    }

    /// Keystroke interval from the environment, then the config, then the default.
    pub fn key_interval(&self) -> Duration {
        self.key_interval_from(std::env::var(KEY_INTERVAL_ENV).ok().as_deref())
    }

    fn key_interval_from(&self, env: Option<&str>) -> Duration {
        if let Some(raw) = env {
            match parse_interval(raw) {
                Some(d) => return d,
                None => tracing::warn!("ignoring invalid {}={:?}", KEY_INTERVAL_ENV, raw),
            }
        }
        self.key_interval_ms
            .map(Duration::from_millis)
            .unwrap_or(KEY_INTERVAL_DEFAULT)
    }
}

/// Parses `150ms`, `2s`, or a bare millisecond count.
fn parse_interval(raw: &str) -> Option<Duration> {
    let raw = raw.trim();
    if let Some(ms) = raw.strip_suffix("ms") {
        return ms.trim().parse().ok().map(Duration::from_millis);
    }
    if let Some(secs) = raw.strip_suffix('s') {
        return secs.trim().parse::<f64>().ok().and_then(|s| Duration::try_from_secs_f64(s).ok());
    }
    raw.parse().ok().map(Duration::from_millis)
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("srcref")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SrcrefConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SrcrefConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: SrcrefConfig = toml::from_str(&data)?;
    Ok(cfg)
}
