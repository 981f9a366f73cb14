use std::path::PathBuf;

use config::ConfigError;
use serde::Deserialize;

use crate::{
    domain::{
        location::{Permission, SAMPLE_LATITUDE, SAMPLE_LONGITUDE},
        region::{Region, CAMERA_ANIMATION_MS},
    },
    presentation::config::{keybindings, styles},
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

/// Map surface settings
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub initial_region: Region,
    pub shows_user_location: bool,
    pub animation_ms: u64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            initial_region: Region::default(),
            shows_user_location: true,
            animation_ms: CAMERA_ANIMATION_MS,
        }
    }
}

/// Simulated device position served by the location provider
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct LocationConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub permission: Permission,
    /// Make every position fetch fail
    pub fail: bool,
    /// Latency of each fetch, in milliseconds
    pub delay_ms: u64,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            latitude: SAMPLE_LATITUDE,
            longitude: SAMPLE_LONGITUDE,
            permission: Permission::Granted,
            fail: false,
            delay_ms: 300,
        }
    }
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
    pub map: MapConfig,
    #[serde(default)]
    pub location: LocationConfig,
}

impl Config {
    /// Built-in defaults only, without reading the config directory
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Layer user config files over the embedded defaults.
    /// A missing user file is fine: the defaults are complete.
    pub fn new() -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().into_owned())?
            .set_default("_config_dir", config_dir.to_string_lossy().into_owned())?;

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
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        cfg.merge_defaults(default_config, found_config);

        Ok(cfg)
    }

    /// Fill in anything the user config left out
    fn merge_defaults(&mut self, default_config: Config, found_config: bool) {
        for (keyseq, action) in default_config.keybindings.iter() {
            self.keybindings
                .entry(keyseq.clone())
                .or_insert_with(|| *action);
        }
        for (style_key, style) in default_config.styles.iter() {
            self.styles
                .entry(style_key.clone())
                .or_insert_with(|| *style);
        }
        if !found_config {
            self.map = default_config.map;
            self.location = default_config.location;
        }
    }
}
