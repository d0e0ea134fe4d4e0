use infusion_config::AbilityRegistry;
use infusion_core::{resolve_potion_effects, EffectPrescription};

/// Persistent data key holding the ability id of ability food
pub const ABILITY_TAG: &str = "foodabilities:ability";
/// Persistent data key holding the potion token of potion food
pub const POTION_TAG: &str = "foodabilities:effect";

/// What an infused food was made with
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Infusion {
    /// Ability id as written in the config
    Ability(String),
    /// Potion type token, e.g. `SPEED`
    Potion(String),
}

impl Infusion {
    /// Reads the persistent tags of an item.
    ///
    /// An ability tag only counts while that ability is still configured,
    /// otherwise the potion tag is used. No usable tag means a plain item.
    pub fn from_tags(
        abilities: &AbilityRegistry,
        ability: Option<&str>,
        potion: Option<&str>,
    ) -> Option<Self> {
        match (ability, potion) {
            (Some(id), _) if abilities.contains(id) => Some(Self::Ability(id.to_string())),
            (_, Some(token)) => Some(Self::Potion(token.to_string())),
            _ => None,
        }
    }

    /// The persistent data entry that marks an item with this infusion
    pub fn tag(&self) -> (&'static str, &str) {
        match self {
            Self::Ability(id) => (ABILITY_TAG, id.as_str()),
            Self::Potion(token) => (POTION_TAG, token.as_str()),
        }
    }

    /// Effects to give the player eating the food.
    /// Empty for abilities that were removed from the config.
    pub fn effects(&self, abilities: &AbilityRegistry) -> Vec<EffectPrescription> {
        match self {
            Self::Ability(id) => abilities
                .get(id)
                .map(|ability| ability.effects().to_vec())
                .unwrap_or_default(),
            Self::Potion(token) => resolve_potion_effects(token),
        }
    }
}
