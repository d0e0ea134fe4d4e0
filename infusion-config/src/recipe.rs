use std::{fmt, str::FromStr};

use infusion_core::item::{is_edible, normalize_identifier};
use thiserror::Error;
use toml::Value;

use crate::loose::scalar_string;

const KEY_PREFIX: &str = "cfg_";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RecipeError {
    #[error("recipe is not a table")]
    NotATable,
    #[error("recipe missing ability")]
    MissingAbility,
    #[error("recipe missing ingredients")]
    MissingIngredients,
    #[error("unknown material {0}")]
    UnknownMaterial(String),
}

/// Identifies a configured recipe: `cfg_<ability>_<index>`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RecipeKey {
    ability: String,
    index: usize,
}

impl RecipeKey {
    pub fn new(ability: &str, index: usize) -> Self {
        Self {
            ability: ability.to_lowercase(),
            index,
        }
    }

    pub fn ability(&self) -> &str {
        &self.ability
    }

    /// Position in the `recipes` list, starting at 1
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for RecipeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{KEY_PREFIX}{}_{}", self.ability, self.index)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseRecipeKeyError;

impl FromStr for RecipeKey {
    type Err = ParseRecipeKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (ability, index) = s
            .strip_prefix(KEY_PREFIX)
            .and_then(|rest| rest.rsplit_once('_'))
            .ok_or(ParseRecipeKeyError)?;
        if ability.is_empty() {
            return Err(ParseRecipeKeyError);
        }
        let index = index.parse().map_err(|_| ParseRecipeKeyError)?;
        Ok(Self::new(ability, index))
    }
}

/// A shapeless recipe producing food that carries an ability.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecipeDefinition {
    pub key: RecipeKey,
    /// Ability id as written in the config
    pub ability: String,
    /// Namespaced item ids
    pub ingredients: Vec<String>,
    /// Food used when no edible ingredient is in the grid. Always edible.
    pub result: Option<String>,
}

impl RecipeDefinition {
    pub fn from_config(index: usize, raw: &Value) -> Result<Self, RecipeError> {
        let Value::Table(raw) = raw else {
            return Err(RecipeError::NotATable);
        };

        let ability = raw
            .get("ability")
            .and_then(scalar_string)
            .map(|ability| ability.trim().to_string())
            .unwrap_or_default();
        if ability.is_empty() {
            return Err(RecipeError::MissingAbility);
        }

        let ingredients = match raw.get("ingredients") {
            Some(Value::Array(ingredients)) if !ingredients.is_empty() => ingredients,
            _ => return Err(RecipeError::MissingIngredients),
        };
        let ingredients = ingredients
            .iter()
            .map(|ingredient| match ingredient {
                Value::String(name) => normalize_identifier(name)
                    .ok_or_else(|| RecipeError::UnknownMaterial(name.clone())),
                other => Err(RecipeError::UnknownMaterial(other.to_string())),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let result = raw
            .get("result")
            .and_then(scalar_string)
            .and_then(|result| normalize_identifier(&result))
            .filter(|result| is_edible(result));

        Ok(Self {
            key: RecipeKey::new(&ability, index),
            ability,
            ingredients,
            result,
        })
    }
}

/// Reads the `recipes` list. Broken entries are logged and skipped, the rest still load.
pub fn load_recipes(section: Option<&Value>) -> Vec<RecipeDefinition> {
    let entries = match section {
        Some(Value::Array(entries)) => entries,
        Some(other) => {
            log::warn!(
                "Expected `recipes` to be a list but found a {}, no recipes loaded",
                other.type_str()
            );
            return Vec::new();
        }
        None => return Vec::new(),
    };

    entries
        .iter()
        .enumerate()
        .filter_map(
            |(i, raw)| match RecipeDefinition::from_config(i + 1, raw) {
                Ok(recipe) => Some(recipe),
                Err(err) => {
                    log::warn!("Failed to load recipe #{}: {err}", i + 1);
                    None
                }
            },
        )
        .collect()
}
