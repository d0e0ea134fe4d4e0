use infusion_core::{
    text::{translate_alternate_color_codes, ALT_COLOR_CHAR},
    EffectPrescription, StatusEffect,
};
use serde::Deserialize;
use toml::Value;

use crate::loose::{amplifier_or_zero, bool_or, duration_or_infinite, string_list, string_or};

/// A named bundle of effects that recipes can attach to food.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ability {
    id: String,
    display_name: String,
    lore_lines: Vec<String>,
    effects: Vec<EffectPrescription>,
}

impl Ability {
    pub fn new(
        id: String,
        display_name: String,
        lore_lines: Vec<String>,
        effects: Vec<EffectPrescription>,
    ) -> Self {
        Self {
            id,
            display_name,
            lore_lines,
            effects,
        }
    }

    /// Builds an ability from its config table. Never fails, fields that can't be
    /// read fall back to their defaults and unknown effects are dropped.
    pub fn from_config(id: &str, section: &Value) -> Self {
        let name = string_or(section.get("name"), id);
        let lore = string_list(section.get("lore"))
            .iter()
            .map(|line| translate_alternate_color_codes(ALT_COLOR_CHAR, line))
            .collect();

        let effects = match section.get("effects") {
            Some(Value::Array(entries)) => entries
                .iter()
                .filter_map(|entry| {
                    let effect = parse_effect(entry);
                    if effect.is_none() {
                        log::debug!("Skipping effect without a known type in ability {id}");
                    }
                    effect
                })
                .collect(),
            _ => Vec::new(),
        };

        Self::new(
            id.to_string(),
            translate_alternate_color_codes(ALT_COLOR_CHAR, &name),
            lore,
            effects,
        )
    }

    /// The id as written in the config
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn lore_lines(&self) -> &[String] {
        &self.lore_lines
    }

    pub fn effects(&self) -> &[EffectPrescription] {
        &self.effects
    }
}

/// `None` when `type` is missing or not an effect we know.
fn parse_effect(entry: &Value) -> Option<EffectPrescription> {
    let effect_type = StatusEffect::deserialize(entry.get("type")?.clone()).ok()?;

    Some(
        EffectPrescription::new(
            effect_type,
            duration_or_infinite(entry.get("duration")),
            amplifier_or_zero(entry.get("amplifier")),
        )
        .ambient(bool_or(entry.get("ambient"), true))
        .particles(bool_or(entry.get("particles"), false))
        .icon(bool_or(entry.get("icon"), true)),
    )
}

#[cfg(test)]
mod tests {
    use infusion_core::{EffectPrescription, StatusEffect, INFINITE_DURATION};
    use toml::Value;

    use super::Ability;

    fn ability(id: &str, source: &str) -> Ability {
        let section: Value = toml::from_str(source).unwrap();
        Ability::from_config(id, &section)
    }

    #[test]
    fn single_effect() {
        let ability = ability(
            "buff",
            r#"
            [[effects]]
            type = "SPEED"
            duration = 100
            amplifier = 3
            "#,
        );

        assert_eq!(
            ability.effects(),
            [EffectPrescription {
                effect_type: StatusEffect::Speed,
                duration_ticks: 100,
                amplifier: 3,
                ambient: true,
                show_particles: false,
                show_icon: true,
            }]
        );
    }

    #[test]
    fn skips_unknown_effects() {
        let ability = ability(
            "buff",
            r#"
            effects = [
                { type = "SPEED" },
                { amplifier = 2 },
                { type = "NOT_AN_EFFECT" },
                { type = 5 },
                { type = " SPEED " },
                "speed",
                { type = "minecraft:luck", amplifier = 1 },
            ]
            "#,
        );

        let kinds: Vec<_> = ability.effects().iter().map(|e| e.effect_type).collect();
        assert_eq!(kinds, [StatusEffect::Speed, StatusEffect::Luck]);
    }

    #[test]
    fn missing_type_is_dropped() {
        let ability = ability(
            "buff",
            r#"
            effects = [{ type = "SPEED" }, { duration = 10 }, { type = "REGENERATION" }]
            "#,
        );
        assert_eq!(ability.effects().len(), 2);
    }

    #[test]
    fn forever_duration() {
        let ability = ability(
            "buff",
            r#"effects = [{ type = "JUMP", duration = "forever" }]"#,
        );
        assert_eq!(ability.effects()[0].duration_ticks, INFINITE_DURATION);
        assert_eq!(ability.effects()[0].duration_ticks, 1_000_000_000);
        assert_eq!(ability.effects()[0].effect_type, StatusEffect::JumpBoost);
    }

    #[test]
    fn flags() {
        let ability = ability(
            "buff",
            r#"effects = [{ type = "SPEED", ambient = "false", particles = true, icon = "maybe" }]"#,
        );
        let effect = ability.effects()[0];
        assert!(!effect.ambient);
        assert!(effect.show_particles);
        assert!(effect.show_icon);
    }

    #[test]
    fn name_and_lore() {
        let ability = ability(
            "swift",
            r#"
            name = "&bSwift &lBread"
            lore = ["&7first", "second &q"]
            "#,
        );
        assert_eq!(ability.id(), "swift");
        assert_eq!(ability.display_name(), "§bSwift §lBread");
        assert_eq!(ability.lore_lines(), ["§7first", "second &q"]);
        assert!(ability.effects().is_empty());
    }

    #[test]
    fn defaults() {
        let ability = Ability::from_config("Plain", &Value::Table(toml::Table::new()));
        assert_eq!(ability.display_name(), "Plain");
        assert!(ability.lore_lines().is_empty());
        assert!(ability.effects().is_empty());

        let ability = Ability::from_config("Weird", &Value::Integer(3));
        assert_eq!(ability.display_name(), "Weird");
        assert!(ability.effects().is_empty());
    }
}
