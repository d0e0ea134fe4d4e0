use infusion::{food::base_food, InfusedFood, Infusion};
use infusion_config::{InfusionConfig, SharedAbilities, DEFAULT_CONFIG};
use infusion_core::{StatusEffect, INFINITE_DURATION};

#[test]
fn crafted_ability_food_grants_ability_effects() {
    let config = InfusionConfig::parse(DEFAULT_CONFIG).unwrap();
    let abilities = config.ability_registry();
    let recipe = config
        .recipes()
        .into_iter()
        .find(|recipe| recipe.ability == "swiftness")
        .unwrap();

    let ability = abilities.get(&recipe.ability).unwrap();
    let food = InfusedFood::from_ability(
        &base_food(recipe.ingredients.iter().map(String::as_str), &recipe),
        ability,
    );
    assert_eq!(food.item, "minecraft:bread");
    assert_eq!(food.display_name, "§bSwift Bread");

    // what the consume handler sees later on
    let (key, value) = food.infusion.tag();
    assert_eq!(key, infusion::tag::ABILITY_TAG);
    let infusion = Infusion::from_tags(&abilities, Some(value), None).unwrap();
    let effects = infusion.effects(&abilities);
    assert_eq!(effects, ability.effects());
    assert_eq!(effects[0].effect_type, StatusEffect::Speed);
}

#[test]
fn potion_food_survives_reload_without_abilities() {
    let config = InfusionConfig::parse(DEFAULT_CONFIG).unwrap();
    let shared = SharedAbilities::new(config.ability_registry());

    let food = InfusedFood::from_potion("minecraft:cooked_porkchop", Some("NIGHT_VISION"));
    assert_eq!(food.display_name, "Infused Cooked Porkchop (NIGHT_VISION)");

    shared.replace(InfusionConfig::parse("").unwrap().ability_registry());
    let registry = shared.snapshot();
    assert!(registry.is_empty());

    let (_, token) = food.infusion.tag();
    let effects = Infusion::from_tags(&registry, None, Some(token))
        .unwrap()
        .effects(&registry);
    assert_eq!(effects.len(), 1);
    assert_eq!(effects[0].effect_type, StatusEffect::NightVision);
    assert_eq!(effects[0].amplifier, 0);
    assert_eq!(effects[0].duration_ticks, INFINITE_DURATION);
}

#[test]
fn removed_ability_grants_nothing() {
    let config = InfusionConfig::parse(DEFAULT_CONFIG).unwrap();
    let shared = SharedAbilities::new(config.ability_registry());
    let food = InfusedFood::from_ability(
        "minecraft:bread",
        shared.snapshot().get("miner").unwrap(),
    );

    shared.replace(InfusionConfig::parse("").unwrap().ability_registry());
    let registry = shared.snapshot();
    let (_, id) = food.infusion.tag();
    assert_eq!(Infusion::from_tags(&registry, Some(id), None), None);
}
