use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".cssdigrc.json";

pub const DEFAULT_OUTPUT_FILE: &str = "tokens.json";

/// Project configuration, loaded from `.cssdigrc.json` when present.
/// Command-line flags override these values.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Patterns to skip during directory scans. Entries with `*` or `?` are
    /// glob patterns matched against the full path; entries without
    /// wildcards are literal directory paths relative to the scanned root.
    #[serde(default)]
    pub ignores: Vec<String>,
    /// Destination for the serialized token document.
    #[serde(default = "default_output")]
    pub output: String,
}

fn default_output() -> String {
    DEFAULT_OUTPUT_FILE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: Vec::new(),
            output: default_output(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid.
    /// Wildcard-free entries are literal paths and need no validation.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'ignores': \"{}\"", pattern)
                })?;
            }
        }
        Ok(())
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from `start_dir` or the nearest ancestor holding a
/// config file, falling back to defaults when none exists.
pub fn load_config(start_dir: &Path) -> Result<Config> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(config)
        }
        None => Ok(Config::default()),
    }
}
