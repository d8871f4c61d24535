//! Configuration management

use anyhow::{Context, Result};
use gfcalc_field::Polynomial;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CliError;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    #[serde(default)]
    pub limits: Limits,

    /// Irreducible polynomials per field order, as coefficient lists with
    /// the highest degree first.
    #[serde(default)]
    pub irreducible: BTreeMap<String, String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Limits {
    /// Largest order printed as a table without --force
    #[serde(default = "default_max_table_order")]
    pub max_table_order: u64,

    /// Largest order for which a missing irreducible polynomial is searched
    #[serde(default = "default_max_search_order")]
    pub max_search_order: u64,

    /// Orders above this get a warning that division is slow
    #[serde(default = "default_warn_order")]
    pub warn_order: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            irreducible: BTreeMap::new(),
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_table_order: default_max_table_order(),
            max_search_order: default_max_search_order(),
            warn_order: default_warn_order(),
        }
    }
}

fn default_max_table_order() -> u64 {
    64
}
fn default_max_search_order() -> u64 {
    100_000
}
fn default_warn_order() -> u64 {
    10_000
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(config_path)
        } else {
            Self::load_default()
        }
    }

    fn load_default() -> Result<Self> {
        let config_dirs = [
            dirs::config_dir().map(|d| d.join("gfcalc").join("config.toml")),
            Some(PathBuf::from("gfcalc.toml")),
            Some(PathBuf::from(".gfcalc.toml")),
        ];

        for config_path in config_dirs.into_iter().flatten() {
            if config_path.exists() {
                return Self::load_from_file(&config_path);
            }
        }

        log::debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        log::debug!("loading config from {}", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), CliError> {
        for (order, poly) in &self.irreducible {
            if order.parse::<u64>().is_err() {
                return Err(CliError::Config(format!(
                    "irreducible key '{}' is not a field order",
                    order
                )));
            }
            poly.parse::<Polynomial>().map_err(|e| {
                CliError::Config(format!("irreducible polynomial for GF({}): {}", order, e))
            })?;
        }
        Ok(())
    }

    /// The configured irreducible polynomial for `order`, if any.
    pub fn irreducible_for(&self, order: u64) -> Result<Option<Polynomial>, CliError> {
        self.irreducible
            .get(&order.to_string())
            .map(|poly| poly.parse::<Polynomial>().map_err(CliError::from))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.limits.max_table_order, 64);
        assert_eq!(config.limits.max_search_order, 100_000);
        assert_eq!(config.limits.warn_order, 10_000);
        assert!(config.irreducible.is_empty());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str("[limits]\nmax_table_order = 16\n").unwrap();
        assert_eq!(config.limits.max_table_order, 16);
        assert_eq!(config.limits.max_search_order, 100_000);
    }

    #[test]
    fn test_irreducible_for() {
        let config: Config = toml::from_str("[irreducible]\n\"9\" = \"1 0 1\"\n").unwrap();
        assert_eq!(
            config.irreducible_for(9).unwrap(),
            Some(Polynomial::new(vec![1, 0, 1]))
        );
        assert_eq!(config.irreducible_for(4).unwrap(), None);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[irreducible]\n\"4\" = \"1 1 1\"").unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert!(config.irreducible_for(4).unwrap().is_some());
    }

    #[test]
    fn test_load_rejects_bad_polynomial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[irreducible]\n\"4\" = \"1 y 1\"").unwrap();
        assert!(Config::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_load_rejects_bad_key() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[irreducible]\nfour = \"1 1 1\"").unwrap();
        assert!(Config::load(Some(file.path())).is_err());
    }
}
