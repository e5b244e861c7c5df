//! Simple config loader using TOML and serde.
//! The config struct is intentionally small and typed for the initial loan module prototypes.

use serde::Deserialize;
use std::path::Path;
use std::fs;
use crate::Result;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Optional chain id of the enclosing chain. If absent a consumer may supply one.
    pub chain_id: Option<String>,

    /// Data directory where the module opens its LMDB store.
    pub data_dir: Option<String>,

    /// Optional path to an exported genesis file consumed by the outer node.
    pub genesis_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            chain_id: None,
            data_dir: Some("./data/loan".to_string()),
            genesis_file: None,
        }
    }
}

/// Load config from a TOML file path.
/// If file is missing or parse fails, an error is returned.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
    let p = path.as_ref();
    let s = fs::read_to_string(p)?;
    let cfg: Config = toml::from_str(&s)?;
    Ok(cfg)
}
