use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "formdeck.config.json";
pub const ACCESS_KEY_ENV: &str = "UNSPLASH_ACCESS_KEY";

/// formdeck configuration file format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Form document edited by the commands
    #[serde(default = "default_form_path")]
    pub form_path: String,

    /// Where rendered slides are written
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unsplash_access_key: Option<String>,

    /// Default tracing filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_undo_levels")]
    pub undo_levels: usize,
}

fn default_form_path() -> String {
    "form.json".to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_undo_levels() -> usize {
    100
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn get_form_path(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.form_path)
    }

    pub fn get_out_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.out_dir)
    }

    /// Access key from the environment, else from the file
    pub fn access_key(&self) -> Option<String> {
        self.access_key_with(std::env::var(ACCESS_KEY_ENV).ok())
    }

    fn access_key_with(&self, env: Option<String>) -> Option<String> {
        env.filter(|key| !key.is_empty())
            .or_else(|| self.unsplash_access_key.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            form_path: default_form_path(),
            out_dir: default_out_dir(),
            unsplash_access_key: None,
            log_level: default_log_level(),
            undo_levels: default_undo_levels(),
        }
    }
}
