use anyhow::Result;
use figment::{providers::{Env, Format, Toml}, Figment};
use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::StorageParams;

/// Process configuration: TOML file merged with `DISPATCH__`-prefixed
/// environment overrides. Every section falls back to its documented
/// defaults, so running without a config file is valid.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub storage: StorageParams,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Price CSV path; a command-line argument overrides it.
    pub path: PathBuf,
    /// Header name of the price column.
    pub price_column: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("prices.csv"),
            price_column: "price".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

impl Config {
    pub fn load() -> Result<Self> {
        let figment = Figment::new()
            .merge(Toml::file("config/default.toml"))
            .merge(Env::prefixed("DISPATCH__").split("__"));
        Ok(figment.extract()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_parameter_set() {
        let cfg = Config::default();
        assert_eq!(cfg.storage.capacity, 100.0);
        assert_eq!(cfg.storage.p_max, 50.0);
        assert_eq!(cfg.storage.eff_ch, 0.95);
        assert_eq!(cfg.storage.eff_dis, 0.95);
        assert_eq!(cfg.storage.soc_init, 0.0);
        assert_eq!(cfg.input.price_column, "price");
    }
}
