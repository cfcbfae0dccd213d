//! Engine configuration persistence
//!
//! Stores preferences in `~/.config/rfedit/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::rules::HolderKind;

/// Configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub naming: NamingConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}

/// Base names for freshly created holders (`"<base> N"`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConfig {
    #[serde(default = "default_test_case")]
    pub test_case: String,
    #[serde(default = "default_task")]
    pub task: String,
    #[serde(default = "default_keyword")]
    pub keyword: String,
}

fn default_test_case() -> String {
    "case".to_string()
}

fn default_task() -> String {
    "task".to_string()
}

fn default_keyword() -> String {
    "Keyword".to_string()
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            test_case: default_test_case(),
            task: default_task(),
            keyword: default_keyword(),
        }
    }
}

impl NamingConfig {
    pub fn base_for(&self, kind: HolderKind) -> &str {
        match kind {
            HolderKind::TestCase => &self.test_case,
            HolderKind::Task => &self.task,
            HolderKind::Keyword => &self.keyword,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Number of undo groups kept by [`crate::history::CommandHistory`]
    #[serde(default = "default_max_size")]
    pub max_size: usize,
}

fn default_max_size() -> usize {
    1000
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_size: default_max_size(),
        }
    }
}

impl EngineConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
