use std::{fmt, str::FromStr};

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use serde::{Deserialize, Deserializer};

/// Duration used for effects that should last until the food is eaten again.
/// Around 13 days of in-game time at 20 TPS.
pub const INFINITE_DURATION: u32 = 1_000_000_000;

#[derive(Debug, PartialEq, Eq)]
pub struct ParseStatusEffectError;

/// Vanilla status effect kinds, in registry order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, FromPrimitive)]
#[repr(u8)]
pub enum StatusEffect {
    Speed = 0,
    Slowness,
    Haste,
    MiningFatigue,
    Strength,
    InstantHealth,
    InstantDamage,
    JumpBoost,
    Nausea,
    Regeneration,
    Resistance,
    FireResistance,
    WaterBreathing,
    Invisibility,
    Blindness,
    NightVision,
    Hunger,
    Weakness,
    Poison,
    Wither,
    HealthBoost,
    Absorption,
    Saturation,
    Glowing,
    Levitation,
    Luck,
    Unluck,
    SlowFalling,
    ConduitPower,
    DolphinsGrace,
    BadOmen,
    HeroOfTheVillage,
    Darkness,
    TrialOmen,
    RaidOmen,
    WindCharged,
    Weaving,
    Oozing,
    Infested,
}

impl StatusEffect {
    const LAST_ID: u8 = Self::Infested as u8;

    pub fn all() -> impl Iterator<Item = Self> {
        (0..=Self::LAST_ID).filter_map(Self::from_u8)
    }

    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Registry path, without the `minecraft:` namespace
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Speed => "speed",
            Self::Slowness => "slowness",
            Self::Haste => "haste",
            Self::MiningFatigue => "mining_fatigue",
            Self::Strength => "strength",
            Self::InstantHealth => "instant_health",
            Self::InstantDamage => "instant_damage",
            Self::JumpBoost => "jump_boost",
            Self::Nausea => "nausea",
            Self::Regeneration => "regeneration",
            Self::Resistance => "resistance",
            Self::FireResistance => "fire_resistance",
            Self::WaterBreathing => "water_breathing",
            Self::Invisibility => "invisibility",
            Self::Blindness => "blindness",
            Self::NightVision => "night_vision",
            Self::Hunger => "hunger",
            Self::Weakness => "weakness",
            Self::Poison => "poison",
            Self::Wither => "wither",
            Self::HealthBoost => "health_boost",
            Self::Absorption => "absorption",
            Self::Saturation => "saturation",
            Self::Glowing => "glowing",
            Self::Levitation => "levitation",
            Self::Luck => "luck",
            Self::Unluck => "unluck",
            Self::SlowFalling => "slow_falling",
            Self::ConduitPower => "conduit_power",
            Self::DolphinsGrace => "dolphins_grace",
            Self::BadOmen => "bad_omen",
            Self::HeroOfTheVillage => "hero_of_the_village",
            Self::Darkness => "darkness",
            Self::TrialOmen => "trial_omen",
            Self::RaidOmen => "raid_omen",
            Self::WindCharged => "wind_charged",
            Self::Weaving => "weaving",
            Self::Oozing => "oozing",
            Self::Infested => "infested",
        }
    }

    /// The pre-flattening names plugin configs still use for a handful of effects.
    /// `None` when the legacy name is just the upper-cased registry name.
    const fn legacy_alias(self) -> Option<&'static str> {
        match self {
            Self::Slowness => Some("slow"),
            Self::Haste => Some("fast_digging"),
            Self::MiningFatigue => Some("slow_digging"),
            Self::Strength => Some("increase_damage"),
            Self::InstantHealth => Some("heal"),
            Self::InstantDamage => Some("harm"),
            Self::JumpBoost => Some("jump"),
            Self::Nausea => Some("confusion"),
            Self::Resistance => Some("damage_resistance"),
            _ => None,
        }
    }

    /// Looks up an effect by registry name (`speed`, `minecraft:speed`) or by
    /// legacy name (`INCREASE_DAMAGE`). Case-insensitive, surrounding
    /// whitespace is not ignored.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        let name = name.strip_prefix("minecraft:").unwrap_or(&name);
        Self::all().find(|effect| {
            effect.name() == name || effect.legacy_alias().is_some_and(|alias| alias == name)
        })
    }
}

impl FromStr for StatusEffect {
    type Err = ParseStatusEffectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or(ParseStatusEffectError)
    }
}

impl<'de> Deserialize<'de> for StatusEffect {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_name(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("Unknown status effect {s}")))
    }
}

impl fmt::Display for StatusEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "minecraft:{}", self.name())
    }
}

/// A single status effect to hand to a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EffectPrescription {
    pub effect_type: StatusEffect,
    pub duration_ticks: u32,
    /// Effect level minus one
    pub amplifier: u32,
    pub ambient: bool,
    pub show_particles: bool,
    pub show_icon: bool,
}

impl EffectPrescription {
    /// Ambient, no particles, icon shown.
    #[must_use]
    pub const fn new(effect_type: StatusEffect, duration_ticks: u32, amplifier: u32) -> Self {
        Self {
            effect_type,
            duration_ticks,
            amplifier,
            ambient: true,
            show_particles: false,
            show_icon: true,
        }
    }

    #[must_use]
    pub const fn infinite(effect_type: StatusEffect, amplifier: u32) -> Self {
        Self::new(effect_type, INFINITE_DURATION, amplifier)
    }

    #[must_use]
    pub const fn ambient(mut self, ambient: bool) -> Self {
        self.ambient = ambient;
        self
    }

    #[must_use]
    pub const fn particles(mut self, show_particles: bool) -> Self {
        self.show_particles = show_particles;
        self
    }

    #[must_use]
    pub const fn icon(mut self, show_icon: bool) -> Self {
        self.show_icon = show_icon;
        self
    }

    #[must_use]
    pub const fn is_infinite(&self) -> bool {
        self.duration_ticks == INFINITE_DURATION
    }
}

impl fmt::Display for EffectPrescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} level {}", self.effect_type, self.amplifier + 1)?;
        if self.is_infinite() {
            write!(f, " (infinite)")
        } else {
            write!(f, " ({} ticks)", self.duration_ticks)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{EffectPrescription, StatusEffect, INFINITE_DURATION};

    #[test]
    fn lookup_by_name() {
        let values = [
            ("speed", Some(StatusEffect::Speed)),
            ("SPEED", Some(StatusEffect::Speed)),
            ("minecraft:fire_resistance", Some(StatusEffect::FireResistance)),
            ("INCREASE_DAMAGE", Some(StatusEffect::Strength)),
            ("strength", Some(StatusEffect::Strength)),
            ("JUMP", Some(StatusEffect::JumpBoost)),
            ("SLOW", Some(StatusEffect::Slowness)),
            ("DAMAGE_RESISTANCE", Some(StatusEffect::Resistance)),
            ("hero_of_the_village", Some(StatusEffect::HeroOfTheVillage)),
            ("infested", Some(StatusEffect::Infested)),
            ("", None),
            ("flying", None),
            ("minecraft:", None),
            (" SPEED ", None),
            ("speed\n", None),
        ];

        for (name, expected) in values {
            assert_eq!(StatusEffect::from_name(name), expected, "{name}");
        }
    }

    #[test]
    fn deserialize_by_name() {
        use serde::de::{
            value::{Error, StrDeserializer},
            IntoDeserializer,
        };
        use serde::Deserialize;

        let values = [
            ("JUMP", Some(StatusEffect::JumpBoost)),
            ("minecraft:luck", Some(StatusEffect::Luck)),
            ("flying", None),
            (" speed", None),
        ];
        for (name, expected) in values {
            let deserializer: StrDeserializer<Error> = name.into_deserializer();
            assert_eq!(StatusEffect::deserialize(deserializer).ok(), expected, "{name}");
        }
    }

    #[test]
    fn ids_follow_registry_order() {
        let all: Vec<_> = StatusEffect::all().collect();
        assert_eq!(all.len(), 39);
        for (index, effect) in all.iter().enumerate() {
            assert_eq!(effect.id() as usize, index);
        }
        assert_eq!(StatusEffect::Luck.id(), 25);
    }

    #[test]
    fn prescription_defaults() {
        let effect = EffectPrescription::infinite(StatusEffect::Speed, 9);
        assert_eq!(effect.duration_ticks, INFINITE_DURATION);
        assert!(effect.ambient);
        assert!(!effect.show_particles);
        assert!(effect.show_icon);
        assert_eq!(effect.to_string(), "minecraft:speed level 10 (infinite)");

        let effect = EffectPrescription::new(StatusEffect::Luck, 100, 0).icon(false);
        assert!(!effect.show_icon);
        assert_eq!(effect.to_string(), "minecraft:luck level 1 (100 ticks)");
    }
}
