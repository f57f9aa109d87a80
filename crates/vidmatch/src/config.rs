use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub browse: BrowseConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Path to the catalogue CSV file.
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BrowseConfig {
    #[serde(default = "default_popular_count")]
    pub popular_count: usize,
    #[serde(default = "default_random_count")]
    pub random_count: usize,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            popular_count: default_popular_count(),
            random_count: default_random_count(),
        }
    }
}

fn default_popular_count() -> usize {
    5
}
fn default_random_count() -> usize {
    5
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
        }
    }
}

fn default_max_results() -> usize {
    12
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SessionConfig {
    /// Optional display name shown on the browse screen.
    #[serde(default)]
    pub name: Option<String>,
}

impl Config {
    /// Minimal config for commands that can run without a config file
    /// (a `--catalog` override supplies the path).
    pub fn minimal() -> Self {
        Self {
            catalog: CatalogConfig {
                path: PathBuf::from("data/videos.csv"),
            },
            browse: BrowseConfig::default(),
            search: SearchConfig::default(),
            session: SessionConfig::default(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if config.browse.popular_count < 1 {
        anyhow::bail!("browse.popular_count must be >= 1");
    }
    if config.browse.random_count < 1 {
        anyhow::bail!("browse.random_count must be >= 1");
    }
    if config.search.max_results < 1 {
        anyhow::bail!("search.max_results must be >= 1");
    }

    Ok(config)
}
