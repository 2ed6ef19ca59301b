use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TweakdexError};
use crate::publish::PLACEHOLDER;
use crate::render::DEFAULT_ICON;

const CONFIG_FILE_NAME: &str = "tweakdex.toml";
const DEFAULT_PACKAGES_FILE: &str = "./Packages";
const DEFAULT_TEMPLATE_FILE: &str = "index.template.html";
const DEFAULT_OUTPUT_FILE: &str = "index.html";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TweakdexConfig {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_packages_file")]
    pub packages: PathBuf,

    #[serde(default = "default_template_file")]
    pub template: PathBuf,

    #[serde(default = "default_output_file")]
    pub output: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_icon")]
    pub default_icon: String,

    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            packages: default_packages_file(),
            template: default_template_file(),
            output: default_output_file(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            default_icon: default_icon(),
            placeholder: default_placeholder(),
        }
    }
}

fn default_packages_file() -> PathBuf {
    PathBuf::from(DEFAULT_PACKAGES_FILE)
}

fn default_template_file() -> PathBuf {
    PathBuf::from(DEFAULT_TEMPLATE_FILE)
}

fn default_output_file() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILE)
}

fn default_icon() -> String {
    DEFAULT_ICON.to_string()
}

fn default_placeholder() -> String {
    PLACEHOLDER.to_string()
}

impl TweakdexConfig {
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            log::debug!("Config file not found at {config_path:?}, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path)?;
        let config: TweakdexConfig = toml::from_str(&contents).map_err(|e| {
            TweakdexError::ConfigFile(format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))
        })?;

        log::debug!("Loaded config from {config_path:?}");
        Ok(config)
    }
}
