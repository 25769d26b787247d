use super::{display::DisplayConfig, evolution::EvolutionConfig, traits::{ConfigManifest, ConfigSection}};
use crate::error::RunnerError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

/// Prefix for environment overrides, e.g. `RUNNERGA_EVOLUTION__SEED=42`
pub const ENV_PREFIX: &str = "RUNNERGA";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub evolution: EvolutionConfig,
    pub display: DisplayConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), RunnerError> {
        self.evolution.validate()?;
        self.display.validate()?;
        Ok(())
    }

    pub fn manifests(&self) -> Vec<ConfigManifest> {
        vec![self.evolution.to_manifest(), self.display.to_manifest()]
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::from_config(AppConfig::default())
    }

    pub fn from_config(config: AppConfig) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
        }
    }

    /// Load a TOML or JSON file (by extension), layered under
    /// `RUNNERGA_`-prefixed environment overrides, and validate it.
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), RunnerError> {
        let path = path.as_ref();
        let settings = ::config::Config::builder()
            .add_source(::config::File::from(path))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| RunnerError::InvalidConfiguration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = settings
            .try_deserialize()
            .map_err(|e| RunnerError::InvalidConfiguration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        log::info!("Loaded configuration from {}", path.display());

        *self.config.write().unwrap_or_else(PoisonError::into_inner) = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), RunnerError> {
        let config = self.get();
        let toml_str = toml::to_string_pretty(&config)
            .map_err(|e| RunnerError::InvalidConfiguration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Apply an edit; the stored config only changes if the result validates.
    pub fn update<F>(&self, f: F) -> Result<(), RunnerError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.config.write().unwrap_or_else(PoisonError::into_inner);
        let mut edited = config.clone();
        f(&mut edited);
        edited.validate()?;
        *config = edited;
        Ok(())
    }
}
