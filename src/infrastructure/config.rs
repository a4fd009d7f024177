use crate::presentation::config::keybindings;
use crate::presentation::config::styles;

use std::path::{Path, PathBuf};

use config::ConfigError;
use serde::Deserialize;

use crate::{
    domain::view::{GenreFilter, SortOrder},
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

/// Where the catalog comes from and how it is first shown
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON file replacing the embedded catalog
    pub data_file: Option<PathBuf>,
    pub genre_filter: GenreFilter,
    pub sort_order: SortOrder,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl Config {
    /// Load the user configuration from the platform config directory.
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(&utils::get_config_dir())
    }

    /// Only the defaults compiled into the binary.
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Load `config.*` from `config_dir`, filling anything it leaves out
    /// from the embedded defaults.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let data_dir = utils::get_data_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().as_ref())?
            .set_default("_config_dir", config_dir.to_string_lossy().as_ref())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
            let mut cfg = default_config;
            cfg.config = AppConfig {
                _data_dir: data_dir,
                _config_dir: config_dir.to_path_buf(),
            };
            return Ok(cfg);
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // Merge default keybindings into user config (flat mapping)
        for (keyseq, action) in default_config.keybindings.iter() {
            cfg.keybindings.entry(keyseq.clone()).or_insert(*action);
        }
        for (style_key, style) in default_config.styles.iter() {
            cfg.styles
                .entry(style_key.clone())
                .or_insert_with(|| *style);
        }

        Ok(cfg)
    }

    /// Apply command line overrides.
    pub fn with_overrides(
        mut self,
        data_file: Option<PathBuf>,
        genre_filter: Option<GenreFilter>,
        sort_order: Option<SortOrder>,
    ) -> Self {
        if let Some(data_file) = data_file {
            self.catalog.data_file = Some(data_file);
        }
        if let Some(genre_filter) = genre_filter {
            self.catalog.genre_filter = genre_filter;
        }
        if let Some(sort_order) = sort_order {
            self.catalog.sort_order = sort_order;
        }
        self
    }
}
