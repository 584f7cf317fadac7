//! Site configuration (site.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Configuration file structure. Every key is optional.
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub site: SiteSettings,
    #[serde(default)]
    pub build: BuildSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteSettings {
    /// Overrides the business name in page titles
    pub title: Option<String>,
    pub base_url: String,
    /// Origin the site is deployed at, used for absolute sitemap URLs
    pub site_url: Option<String>,
    pub content: PathBuf,
    pub public: PathBuf,
    pub output: PathBuf,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            title: None,
            base_url: "/".to_string(),
            site_url: None,
            content: PathBuf::from("content"),
            public: PathBuf::from("public"),
            output: PathBuf::from("dist"),
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct BuildSettings {
    pub minify: bool,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self { minify: true }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7777,
        }
    }
}

impl Config {
    /// Load configuration from `path` if it exists.
    /// Returns an error if the file exists but is malformed.
    ///
    /// Relative directories are resolved against the directory holding `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let config: Config = toml::from_str(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))?;
            tracing::info!("Loaded config from {}", path.display());
            config
        } else {
            tracing::debug!("No {} found, using defaults", path.display());
            Config::default()
        };

        config.site.base_url = normalize_base_url(&config.site.base_url);
        config.site.site_url = config
            .site
            .site_url
            .as_deref()
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());
        if let Some(root) = path.parent() {
            config.site.content = root.join(&config.site.content);
            config.site.public = root.join(&config.site.public);
            config.site.output = root.join(&config.site.output);
        }

        Ok(config)
    }
}

/// Base URLs always start and end with `/`.
fn normalize_base_url(base_url: &str) -> String {
    let trimmed = base_url.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}
