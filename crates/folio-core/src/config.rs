//! Site configuration management.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Main configuration structure for Folio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,

    /// Content storage settings.
    #[serde(default)]
    pub content: ContentConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,

    /// Base URL for the site (e.g., "https://example.com").
    pub base_url: String,

    /// Site description for meta tags.
    #[serde(default)]
    pub description: Option<String>,

    /// Site author name.
    #[serde(default)]
    pub author: Option<String>,
}

/// Content storage configuration: where the category directories live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Root directory holding all content categories.
    #[serde(default = "default_content_root")]
    pub root: PathBuf,

    /// Subdirectory name for the projects category.
    #[serde(default = "default_projects_dir")]
    pub projects: String,

    /// Subdirectory name for the writing category.
    #[serde(default = "default_writing_dir")]
    pub writing: String,

    /// Subdirectory name for the uses singleton.
    #[serde(default = "default_uses_dir")]
    pub uses: String,
}

fn default_content_root() -> PathBuf {
    PathBuf::from("content")
}

fn default_projects_dir() -> String {
    "projects".to_string()
}

fn default_writing_dir() -> String {
    "writing".to_string()
}

fn default_uses_dir() -> String {
    "uses".to_string()
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: default_content_root(),
            projects: default_projects_dir(),
            writing: default_writing_dir(),
            uses: default_uses_dir(),
        }
    }
}

impl ContentConfig {
    /// Path to the projects category directory.
    pub fn projects_path(&self) -> PathBuf {
        self.root.join(&self.projects)
    }

    /// Path to the writing category directory.
    pub fn writing_path(&self) -> PathBuf {
        self.root.join(&self.writing)
    }

    /// Path to the uses category directory.
    pub fn uses_path(&self) -> PathBuf {
        self.root.join(&self.uses)
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration using the config crate, layering `FOLIO__`-prefixed
    /// environment variables over the file.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("FOLIO").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.site.title.is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if self.site.base_url.is_empty() {
            return Err(CoreError::config("site.base_url cannot be empty"));
        }

        if self.site.base_url.ends_with('/') {
            tracing::warn!("site.base_url should not have a trailing slash");
        }

        Ok(())
    }

    /// Get the full URL for a path.
    pub fn url_for(&self, path: &str) -> String {
        let base = self.site.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}
