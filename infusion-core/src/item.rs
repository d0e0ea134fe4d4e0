use itertools::Itertools;

pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// Item every infused food falls back to when no base food is known
pub const DEFAULT_FOOD: &str = "minecraft:bread";

pub const POTION_ITEMS: [&str; 3] = [
    "minecraft:potion",
    "minecraft:splash_potion",
    "minecraft:lingering_potion",
];

/// Every vanilla item with a food component
pub const EDIBLE_ITEMS: &[&str] = &[
    "minecraft:apple",
    "minecraft:baked_potato",
    "minecraft:beef",
    "minecraft:beetroot",
    "minecraft:beetroot_soup",
    "minecraft:bread",
    "minecraft:carrot",
    "minecraft:chicken",
    "minecraft:chorus_fruit",
    "minecraft:cod",
    "minecraft:cooked_beef",
    "minecraft:cooked_chicken",
    "minecraft:cooked_cod",
    "minecraft:cooked_mutton",
    "minecraft:cooked_porkchop",
    "minecraft:cooked_rabbit",
    "minecraft:cooked_salmon",
    "minecraft:cookie",
    "minecraft:dried_kelp",
    "minecraft:enchanted_golden_apple",
    "minecraft:glow_berries",
    "minecraft:golden_apple",
    "minecraft:golden_carrot",
    "minecraft:honey_bottle",
    "minecraft:melon_slice",
    "minecraft:mushroom_stew",
    "minecraft:mutton",
    "minecraft:poisonous_potato",
    "minecraft:porkchop",
    "minecraft:potato",
    "minecraft:pufferfish",
    "minecraft:pumpkin_pie",
    "minecraft:rabbit",
    "minecraft:rabbit_stew",
    "minecraft:rotten_flesh",
    "minecraft:salmon",
    "minecraft:spider_eye",
    "minecraft:suspicious_stew",
    "minecraft:sweet_berries",
    "minecraft:tropical_fish",
];

/// Normalizes an item name (`BREAD`, `bread`, `minecraft:bread`) to a namespaced
/// identifier. `None` if it can't be an identifier at all.
pub fn normalize_identifier(name: &str) -> Option<String> {
    let name = name.trim().to_ascii_lowercase();
    let (namespace, path) = match name.split_once(':') {
        Some((namespace, path)) => (namespace, path),
        None => (DEFAULT_NAMESPACE, name.as_str()),
    };
    let valid_namespace = !namespace.is_empty()
        && namespace
            .chars()
            .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.'));
    let valid_path = !path.is_empty()
        && path
            .chars()
            .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.' | '/'));
    (valid_namespace && valid_path).then(|| format!("{namespace}:{path}"))
}

pub fn is_potion(item: &str) -> bool {
    normalize_identifier(item).is_some_and(|id| POTION_ITEMS.contains(&id.as_str()))
}

pub fn is_edible(item: &str) -> bool {
    normalize_identifier(item).is_some_and(|id| EDIBLE_ITEMS.contains(&id.as_str()))
}

/// `minecraft:cooked_beef` -> `Cooked Beef`
pub fn title_case(item: &str) -> String {
    let path = item.rsplit_once(':').map_or(item, |(_, path)| path);
    path.to_lowercase()
        .split(['_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars
                .next()
                .map(|first| first.to_uppercase().chain(chars).collect::<String>())
                .unwrap_or_default()
        })
        .join(" ")
}
