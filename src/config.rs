use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub probe: ProbeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Request parameters for the AnimeThemes search probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// API root, without the `/anime` endpoint.
    pub base_url: String,

    /// Value of the `q` search parameter.
    pub query: String,

    /// Value of the `fields[anime]` projection.
    pub fields: String,

    /// Value of the `include` relation list.
    pub include: String,

    /// Directory for response snapshots. Unset means the working directory.
    pub output_dir: Option<String>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.animethemes.moe".to_string(),
            query: "Naruto".to_string(),
            fields: "id,name,media_format".to_string(),
            include: "images,animethemes.animethemeentries.videos.audio".to_string(),
            output_dir: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let paths = Self::config_paths();

        for path in &paths {
            if path.exists() {
                info!("Loading config from: {}", path.display());
                return Self::load_from_path(path);
            }
        }

        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Config saved to: {}", path.display());
        Ok(())
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        paths.push(Self::default_config_path());

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("themeprobe").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".themeprobe").join("config.toml"));
        }

        paths
    }

    fn default_config_path() -> PathBuf {
        PathBuf::from("config.toml")
    }

    pub fn create_default_if_missing() -> Result<bool> {
        Self::create_default_at(&Self::default_config_path())
    }

    pub fn create_default_at(path: &Path) -> Result<bool> {
        if path.exists() {
            Ok(false)
        } else {
            let config = Self::default();
            config.save_to_path(path)?;
            info!("Created default config file: {}", path.display());
            Ok(true)
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.probe.base_url.trim().is_empty() {
            anyhow::bail!("Probe base URL cannot be empty");
        }

        url::Url::parse(&self.probe.base_url)
            .with_context(|| format!("Invalid probe base URL: {}", self.probe.base_url))?;

        if self.probe.query.trim().is_empty() {
            anyhow::bail!("Probe query cannot be empty");
        }

        Ok(())
    }
}
