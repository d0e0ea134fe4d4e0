use std::{fmt, str::FromStr};

use crate::effect::{EffectPrescription, StatusEffect};

/// Amplifier of the "maxed out" effects, level 10.
pub const MAX_AMPLIFIER: u32 = 9;

#[derive(Debug, PartialEq, Eq)]
pub struct ParsePotionTypeError;

/// Base potion types as stored on potion items.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PotionType {
    Uncraftable,
    Water,
    Mundane,
    Thick,
    Awkward,
    NightVision,
    Invisibility,
    Jump,
    FireResistance,
    Speed,
    Slowness,
    WaterBreathing,
    InstantHeal,
    InstantDamage,
    Poison,
    Regen,
    Strength,
    Weakness,
    Luck,
    TurtleMaster,
    SlowFalling,
}

impl PotionType {
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Uncraftable => "UNCRAFTABLE",
            Self::Water => "WATER",
            Self::Mundane => "MUNDANE",
            Self::Thick => "THICK",
            Self::Awkward => "AWKWARD",
            Self::NightVision => "NIGHT_VISION",
            Self::Invisibility => "INVISIBILITY",
            Self::Jump => "JUMP",
            Self::FireResistance => "FIRE_RESISTANCE",
            Self::Speed => "SPEED",
            Self::Slowness => "SLOWNESS",
            Self::WaterBreathing => "WATER_BREATHING",
            Self::InstantHeal => "INSTANT_HEAL",
            Self::InstantDamage => "INSTANT_DAMAGE",
            Self::Poison => "POISON",
            Self::Regen => "REGEN",
            Self::Strength => "STRENGTH",
            Self::Weakness => "WEAKNESS",
            Self::Luck => "LUCK",
            Self::TurtleMaster => "TURTLE_MASTER",
            Self::SlowFalling => "SLOW_FALLING",
        }
    }
}

impl fmt::Display for PotionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for PotionType {
    type Err = ParsePotionTypeError;

    /// Tokens are matched exactly, `speed` is not `SPEED`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UNCRAFTABLE" => Ok(Self::Uncraftable),
            "WATER" => Ok(Self::Water),
            "MUNDANE" => Ok(Self::Mundane),
            "THICK" => Ok(Self::Thick),
            "AWKWARD" => Ok(Self::Awkward),
            "NIGHT_VISION" => Ok(Self::NightVision),
            "INVISIBILITY" => Ok(Self::Invisibility),
            "JUMP" => Ok(Self::Jump),
            "FIRE_RESISTANCE" => Ok(Self::FireResistance),
            "SPEED" => Ok(Self::Speed),
            "SLOWNESS" => Ok(Self::Slowness),
            "WATER_BREATHING" => Ok(Self::WaterBreathing),
            "INSTANT_HEAL" => Ok(Self::InstantHeal),
            "INSTANT_DAMAGE" => Ok(Self::InstantDamage),
            "POISON" => Ok(Self::Poison),
            "REGEN" => Ok(Self::Regen),
            "STRENGTH" => Ok(Self::Strength),
            "WEAKNESS" => Ok(Self::Weakness),
            "LUCK" => Ok(Self::Luck),
            "TURTLE_MASTER" => Ok(Self::TurtleMaster),
            "SLOW_FALLING" => Ok(Self::SlowFalling),
            _ => Err(ParsePotionTypeError),
        }
    }
}

const fn infinite(effect_type: StatusEffect, amplifier: u32) -> EffectPrescription {
    EffectPrescription::infinite(effect_type, amplifier)
}

/// Granted for unknown potions and for potion types without their own entry.
pub static FALLBACK_EFFECTS: [EffectPrescription; 2] = [
    infinite(StatusEffect::Speed, MAX_AMPLIFIER),
    infinite(StatusEffect::FireResistance, 0),
];

/// Potion type to the effects an infused food made from it grants.
pub static POTION_EFFECTS: &[(PotionType, &[EffectPrescription])] = &[
    (PotionType::Speed, &[infinite(StatusEffect::Speed, MAX_AMPLIFIER)]),
    (PotionType::FireResistance, &[infinite(StatusEffect::FireResistance, 0)]),
    (PotionType::Strength, &[infinite(StatusEffect::Strength, MAX_AMPLIFIER)]),
    (
        PotionType::InstantHeal,
        &[
            infinite(StatusEffect::HealthBoost, MAX_AMPLIFIER),
            infinite(StatusEffect::Regeneration, MAX_AMPLIFIER),
        ],
    ),
    (PotionType::Jump, &[infinite(StatusEffect::JumpBoost, MAX_AMPLIFIER)]),
    (PotionType::NightVision, &[infinite(StatusEffect::NightVision, 0)]),
    (PotionType::WaterBreathing, &[infinite(StatusEffect::WaterBreathing, 0)]),
    (PotionType::Invisibility, &[infinite(StatusEffect::Invisibility, 0)]),
    (PotionType::Regen, &[infinite(StatusEffect::Regeneration, MAX_AMPLIFIER)]),
    (PotionType::SlowFalling, &[infinite(StatusEffect::SlowFalling, 0)]),
    (PotionType::Luck, &[infinite(StatusEffect::Luck, MAX_AMPLIFIER)]),
    (
        PotionType::TurtleMaster,
        &[
            infinite(StatusEffect::Resistance, MAX_AMPLIFIER),
            infinite(StatusEffect::Slowness, MAX_AMPLIFIER),
        ],
    ),
];

impl PotionType {
    #[must_use]
    pub fn effects(self) -> &'static [EffectPrescription] {
        POTION_EFFECTS
            .iter()
            .find(|(potion, _)| *potion == self)
            .map_or(&FALLBACK_EFFECTS[..], |(_, effects)| *effects)
    }
}

/// Effects granted by food infused with the given potion token.
/// Never empty: unknown tokens get [`FALLBACK_EFFECTS`].
#[must_use]
pub fn resolve_potion_effects(token: &str) -> Vec<EffectPrescription> {
    token
        .parse::<PotionType>()
        .map_or(&FALLBACK_EFFECTS[..], PotionType::effects)
        .to_vec()
}
