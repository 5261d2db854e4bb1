/// CLI configuration
use crate::error::{CliError, Result};
use flowdesk_client::{ClientConfig, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "flowdesk.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default = "default_directory")]
    pub directory: DirectorySettings,

    #[serde(default = "default_cache")]
    pub cache: CacheSettings,

    #[serde(default = "default_display")]
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DirectorySettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheSettings {
    /// Seconds a fetched list counts as fresh
    #[serde(default = "default_stale_after_secs")]
    pub stale_after_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplaySettings {
    /// Include e-mail addresses in list output
    #[serde(default = "default_show_email")]
    pub show_email: bool,
}

impl CacheSettings {
    pub fn stale_after(&self) -> Duration {
        Duration::from_secs(self.stale_after_secs)
    }
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `flowdesk.toml` is read if
    /// present. Environment variables prefixed with `FLOWDESK_` override the
    /// file, with `__` between section and key
    /// (`FLOWDESK_DIRECTORY__BASE_URL`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("FLOWDESK")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let url = &self.directory.base_url;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(CliError::Config(format!(
                "directory.base_url must start with http:// or https:// (got {:?})",
                url
            )));
        }

        Ok(())
    }

    /// Settings for the directory client
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.directory.base_url.clone())
    }
}

// Default values
fn default_directory() -> DirectorySettings {
    DirectorySettings {
        base_url: default_base_url(),
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_cache() -> CacheSettings {
    CacheSettings {
        stale_after_secs: default_stale_after_secs(),
    }
}

fn default_stale_after_secs() -> u64 {
    5 * 60
}

fn default_display() -> DisplaySettings {
    DisplaySettings {
        show_email: default_show_email(),
    }
}

fn default_show_email() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            cache: default_cache(),
            display: default_display(),
        }
    }
}
