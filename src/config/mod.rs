use crate::core::note::DEFAULT_NOTE;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_logfile")]
    pub logfile: String,
    #[serde(default = "default_note")]
    pub default_note: String,
}

fn default_logfile() -> String {
    "log.txt".to_string()
}

fn default_note() -> String {
    DEFAULT_NOTE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logfile: default_logfile(),
            default_note: default_note(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("daylog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".daylog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("daylog.conf")
    }

    /// Load configuration from file, or fall back to defaults when the
    /// file is missing or unreadable. Journaling must not be blocked by
    /// a broken config.
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            fs::read_to_string(&path)
                .ok()
                .and_then(|content| serde_yaml::from_str(&content).ok())
                .unwrap_or_default()
        } else {
            Config::default()
        }
    }
}
