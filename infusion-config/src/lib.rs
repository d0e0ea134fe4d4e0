use log::warn;
use logging::LoggingConfig;
use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;
use toml::Value;

use std::{
    fs,
    path::{Path, PathBuf},
};

pub mod ability;
pub mod logging;
pub mod loose;
pub mod recipe;
pub mod registry;

pub use ability::Ability;
pub use recipe::{load_recipes, RecipeDefinition, RecipeError, RecipeKey};
pub use registry::{AbilityRegistry, SharedAbilities};

/// Written to disk the first time the server starts without a config.
pub const DEFAULT_CONFIG: &str = include_str!("../default_config.toml");

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Couldn't read configuration file at {path:?}. Reason: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Couldn't parse config at {path:?}. Reason: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Everything the infused food plugin reads from `infused_food.toml`.
///
/// `abilities` and `recipes` stay raw TOML here. They are read leniently by
/// [`AbilityRegistry::load`] and [`load_recipes`] so a mistake in one entry
/// doesn't stop the file from loading.
#[derive(Deserialize, Default, Debug)]
#[serde(default)]
pub struct InfusionConfig {
    pub logging: LoggingConfig,
    pub abilities: Option<Value>,
    pub recipes: Option<Value>,
}

impl InfusionConfig {
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn ability_registry(&self) -> AbilityRegistry {
        AbilityRegistry::load(self.abilities.as_ref())
    }

    pub fn recipes(&self) -> Vec<RecipeDefinition> {
        load_recipes(self.recipes.as_ref())
    }
}

pub trait LoadTomlConfiguration {
    fn load() -> Result<Self, ConfigError>
    where
        Self: Sized + DeserializeOwned,
    {
        Self::load_from(Self::get_path())
    }

    /// Reads `path`, writing the default config there first if it doesn't exist.
    fn load_from(path: &Path) -> Result<Self, ConfigError>
    where
        Self: Sized + DeserializeOwned,
    {
        let content = if path.exists() {
            fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            let content = Self::default_content();
            if let Err(err) = fs::write(path, content) {
                warn!("Couldn't write default config to {:?}. Reason: {}", path, err);
            }
            content.to_string()
        };

        let config: Self = toml::from_str(&content).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.message().to_string(),
        })?;
        config.validate();
        Ok(config)
    }

    fn get_path() -> &'static Path;

    fn default_content() -> &'static str;

    /// Reports suspicious but loadable settings
    fn validate(&self);
}

impl LoadTomlConfiguration for InfusionConfig {
    fn get_path() -> &'static Path {
        Path::new("infused_food.toml")
    }

    fn default_content() -> &'static str {
        DEFAULT_CONFIG
    }

    fn validate(&self) {
        let abilities = self.ability_registry();
        for recipe in self.recipes() {
            if !abilities.contains(&recipe.ability) {
                warn!(
                    "Recipe {} uses ability {} which isn't configured, it will craft nothing",
                    recipe.key, recipe.ability
                );
            }
        }
    }
}
