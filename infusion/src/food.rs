use infusion_config::{Ability, RecipeDefinition};
use infusion_core::item::{is_edible, normalize_identifier, title_case, DEFAULT_FOOD};

use crate::tag::Infusion;

/// Custom model data every infused food carries, used to recognise one.
pub const INFUSED_MODEL_DATA: i32 = 90210;

/// Enchantment and level every infused food carries so it shows the glint.
/// Applied even where the enchantment wouldn't normally be allowed.
pub const GLINT_ENCHANTMENT: (&str, u8) = ("minecraft:luck_of_the_sea", 1);

/// Name shown for potions without a base potion type
pub const UNKNOWN_POTION: &str = "Potion";

const POTION_LORE: &str = "Right-click or eat to gain infinite effects";
const ABILITY_LORE: &str = "Right-click or eat to gain effects";

/// The item a crafting grid hands out, before the host turns it into a stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfusedFood {
    /// Namespaced id of the food item
    pub item: String,
    pub display_name: String,
    pub lore: Vec<String>,
    pub custom_model_data: i32,
    /// Enchantment id and level
    pub enchantments: Vec<(&'static str, u8)>,
    pub infusion: Infusion,
}

impl InfusedFood {
    /// Food crafted together with a potion. `potion` is the base potion type token.
    pub fn from_potion(food: &str, potion: Option<&str>) -> Self {
        let item = normalize_identifier(food).unwrap_or_else(|| DEFAULT_FOOD.to_string());
        let potion = potion.unwrap_or(UNKNOWN_POTION);
        Self {
            display_name: format!("Infused {} ({potion})", title_case(&item)),
            lore: vec![POTION_LORE.to_string(), format!("Infused with: {potion}")],
            custom_model_data: INFUSED_MODEL_DATA,
            enchantments: vec![GLINT_ENCHANTMENT],
            infusion: Infusion::Potion(potion.to_string()),
            item,
        }
    }

    /// Food crafted from a configured recipe
    pub fn from_ability(base_food: &str, ability: &Ability) -> Self {
        let item = normalize_identifier(base_food).unwrap_or_else(|| DEFAULT_FOOD.to_string());
        let display_name = if ability.display_name().is_empty() {
            format!("Infused {}", title_case(&item))
        } else {
            ability.display_name().to_string()
        };
        let lore = if ability.lore_lines().is_empty() {
            vec![ABILITY_LORE.to_string()]
        } else {
            ability.lore_lines().to_vec()
        };
        Self {
            item,
            display_name,
            lore,
            custom_model_data: INFUSED_MODEL_DATA,
            enchantments: vec![GLINT_ENCHANTMENT],
            infusion: Infusion::Ability(ability.id().to_string()),
        }
    }

    pub fn is_infused(custom_model_data: Option<i32>) -> bool {
        custom_model_data == Some(INFUSED_MODEL_DATA)
    }
}

/// Picks the food a configured recipe infuses: the first edible ingredient,
/// then the recipe's `result`, then bread.
pub fn base_food<'a>(
    ingredients: impl IntoIterator<Item = &'a str>,
    recipe: &RecipeDefinition,
) -> String {
    ingredients
        .into_iter()
        .find(|item| is_edible(item))
        .and_then(normalize_identifier)
        .or_else(|| recipe.result.clone())
        .unwrap_or_else(|| DEFAULT_FOOD.to_string())
}
