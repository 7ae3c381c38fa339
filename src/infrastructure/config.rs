use crate::presentation::config::keybindings;
use crate::presentation::config::styles;

use std::path::PathBuf;

use config::ConfigError;
use serde::Deserialize;

use crate::{domain::Profile, utils};

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub notification: NotificationConfig,
}

/// Behaviour of the simulated profile server
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub fetch_latency_ms: u64,
    pub save_latency_ms: u64,
    pub fetch_failure_rate: f64,
    pub save_failure_rate: f64,
    /// Upper bound for a single fetch or save; unbounded when absent
    pub request_timeout_ms: Option<u64>,
    /// Profile the server starts with
    pub seed: Profile,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            fetch_latency_ms: 1000,
            save_latency_ms: 1500,
            fetch_failure_rate: 0.0,
            save_failure_rate: 0.1,
            request_timeout_ms: None,
            seed: Profile {
                name: "Jane Doe".into(),
                title: "Senior Frontend Developer".into(),
                email: "jane.doe@example.com".into(),
                bio: "Passionate about building interactive user interfaces and accessible web applications.".into(),
                avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=Jane".into(),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// How long a toast stays visible
    pub duration_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { duration_ms: 3000 }
    }
}

impl Default for Config {
    /// The embedded defaults, without any user files applied
    fn default() -> Self {
        Self::embedded().unwrap_or_else(|e| {
            log::error!("{e}");
            Self {
                config: AppConfig::default(),
                keybindings: keybindings::KeyBindings::default(),
                styles: styles::Styles::default(),
                service: ServiceConfig::default(),
                notification: NotificationConfig::default(),
            }
        })
    }
}

impl Config {
    fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Loads user config files from the config dir on top of the embedded defaults.
    /// Every user file is optional.
    pub fn new() -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
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
            return Ok(Self {
                config: AppConfig {
                    _data_dir: data_dir,
                    _config_dir: config_dir,
                },
                ..default_config
            });
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        cfg.merge_defaults(&default_config);
        Ok(cfg)
    }

    /// Fills in every keybinding and style the user did not set
    fn merge_defaults(&mut self, default_config: &Self) {
        for (mode, default_bindings) in default_config.keybindings.iter() {
            let user_bindings = self.keybindings.entry(*mode).or_default();
            for (keys, action) in default_bindings {
                user_bindings
                    .entry(keys.clone())
                    .or_insert_with(|| action.clone());
            }
        }
        for (style_key, style) in default_config.styles.iter() {
            self.styles
                .entry(style_key.clone())
                .or_insert_with(|| *style);
        }
    }
}
