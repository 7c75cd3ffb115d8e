use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
}

/// Where the city catalog comes from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// TOML catalog file. The built-in catalog is used when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Terminal UI settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    /// Route shown at startup (default: "/home").
    #[serde(default = "default_start_route")]
    pub start_route: String,
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Image asset lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AssetsConfig {
    /// Base directory for photo references.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

fn default_start_route() -> String {
    "/home".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            start_route: default_start_route(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
