//! Optional TOML configuration for the filter run

use serde::Deserialize;
use std::{fs, path::Path};

/// Filter defaults; any CLI flag overrides its file value
#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct FilterConfig {
    /// Inclusive perigee altitude upper bound [km]
    pub max_perigee_km: f64,

    /// Case-insensitive name substring filter
    pub name_contains: Option<String>,

    /// Export artifact basename, without extension
    pub export_basename: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            max_perigee_km: 2000.0,
            name_contains: None,
            export_basename: "LEO_only".to_string(),
        }
    }
}

impl FilterConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let content = fs::read_to_string(path).expect("Failed to read config file");
        Self::from_str_checked(&content)
    }

    pub fn from_str_checked(s: &str) -> Self {
        let cfg: FilterConfig = toml::from_str(s).expect("Failed to parse config file");
        if !cfg.max_perigee_km.is_finite() {
            panic!(
                "Configuration entry max-perigee-km must be finite, got {}",
                cfg.max_perigee_km
            );
        }
        if cfg.export_basename.is_empty() {
            panic!("Configuration entry export-basename must not be empty");
        }
        cfg
    }
}
