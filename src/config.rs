use crate::logfile::resolve_home;
use crate::pipeline::KEYPHRASES;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

const DEFAULT_LOG_DIR: &str = "~/.errwatch/";

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Directory for session logs. Default: ~/.errwatch/
    pub log_dir: Option<String>,
    /// Commands whose output is never scanned, in addition to the built-in
    /// denylist. Example: ["tree", "find"]
    pub denylist: Option<Vec<String>>,
    /// Extra phrases that flag a line as an error, in addition to the
    /// built-in set. Example: ["panic"]
    pub keyphrases: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from ~/.config/errwatch/config.toml
    ///
    /// - File missing: returns default config (Ok)
    /// - File exists but invalid TOML: returns Err so caller can show warning
    pub fn load() -> Result<Self> {
        let path = match Self::config_path() {
            Some(p) => p,
            None => return Ok(Self::default()),
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Resolved log directory.
    pub fn log_dir(&self) -> PathBuf {
        resolve_home(self.log_dir.as_deref().unwrap_or(DEFAULT_LOG_DIR))
    }

    /// Built-in denylist plus any configured additions.
    pub fn denylist(&self) -> Vec<String> {
        let mut list = vec!["ls".to_string()];
        if let Some(extra) = &self.denylist {
            list.extend(extra.iter().cloned());
        }
        list
    }

    /// Built-in keyphrases plus any configured additions.
    pub fn keyphrases(&self) -> Vec<String> {
        let mut list: Vec<String> = KEYPHRASES.iter().map(|p| p.to_string()).collect();
        if let Some(extra) = &self.keyphrases {
            list.extend(extra.iter().map(|p| p.to_lowercase()));
        }
        list
    }

    fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(".config").join("errwatch").join("config.toml"))
    }
}
