#![deny(clippy::all)]
#![deny(clippy::pedantic)]

use infusion::Infusion;
use infusion_config::{
    logging::LoggingConfig, InfusionConfig, LoadTomlConfiguration, SharedAbilities,
};
use infusion_core::{text::to_pretty_console, PotionType};

fn init_logger(config: &LoggingConfig) {
    if config.enabled {
        let mut logger = simple_logger::SimpleLogger::new();
        logger = logger.with_timestamp_format(time::macros::format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second]"
        ));

        if !config.timestamp {
            logger = logger.without_timestamps();
        }

        if config.env {
            logger = logger.env();
        }

        logger = logger.with_level(config.level.into());
        for (target, level) in config.module_levels() {
            logger = logger.with_module_level(target, level);
        }

        logger = logger.with_colors(config.color);
        logger = logger.with_threads(config.threads);
        logger.init().unwrap();
    }
}

const CARGO_PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Loads `infused_food.toml` and prints what food tagged with each argument
/// (an ability id, or else a potion token) would grant.
fn main() {
    let (config, load_error) = match InfusionConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (InfusionConfig::default(), Some(err)),
    };
    init_logger(&config.logging);

    log::info!("Starting infused food {CARGO_PKG_VERSION}");
    if let Some(err) = load_error {
        log::error!("{err}. Continuing without abilities or recipes");
    }

    let abilities = SharedAbilities::new(config.ability_registry());
    let registry = abilities.snapshot();
    for ability in registry.iter() {
        log::info!(
            "Loaded ability {} ({}) with {} effect(s)",
            ability.id(),
            to_pretty_console(ability.display_name()),
            ability.effects().len()
        );
    }
    let recipes = config.recipes();
    log::info!(
        "Loaded {} abilities and {} recipes",
        registry.len(),
        recipes.len()
    );

    for arg in std::env::args().skip(1) {
        let Some(infusion) =
            Infusion::from_tags(&registry, Some(arg.as_str()), Some(arg.as_str()))
        else {
            continue;
        };
        let effects = infusion.effects(&registry);
        match &infusion {
            Infusion::Ability(id) => println!("ability {id}:"),
            Infusion::Potion(token) => match token.parse::<PotionType>() {
                Ok(potion) => println!("potion {potion}:"),
                Err(_) => println!("potion {token} (unknown, using fallback):"),
            },
        }
        for effect in effects {
            println!("  {effect}");
        }
    }
}
