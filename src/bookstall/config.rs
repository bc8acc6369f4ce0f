use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_INVENTORY_FILE: &str = "inventory.txt";

/// Configuration for bookstall, stored in .bookstall/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookstallConfig {
    /// Path of the flat inventory file the store reads and writes.
    #[serde(default = "default_inventory_file")]
    pub inventory_file: String,
}

fn default_inventory_file() -> String {
    DEFAULT_INVENTORY_FILE.to_string()
}

impl Default for BookstallConfig {
    fn default() -> Self {
        Self {
            inventory_file: default_inventory_file(),
        }
    }
}

impl BookstallConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: BookstallConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "inventory-file" => Some(self.inventory_file.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "inventory-file" => {
                if value.is_empty() {
                    return Err("inventory-file cannot be empty".to_string());
                }
                self.inventory_file = value.to_string();
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_inventory_txt() {
        let config = BookstallConfig::default();
        assert_eq!(config.inventory_file, "inventory.txt");
    }

    #[test]
    fn load_missing_config_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = BookstallConfig::load(dir.path()).unwrap();
        assert_eq!(config, BookstallConfig::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();

        let mut config = BookstallConfig::default();
        config.set("inventory-file", "shelf.txt").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = BookstallConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.inventory_file, "shelf.txt");
    }

    #[test]
    fn rejects_empty_inventory_file() {
        let mut config = BookstallConfig::default();
        assert!(config.set("inventory-file", "").is_err());
    }
}
