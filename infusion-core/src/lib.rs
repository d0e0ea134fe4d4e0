pub mod effect;
pub mod item;
pub mod potion;
pub mod text;

pub use effect::{EffectPrescription, StatusEffect, INFINITE_DURATION};
pub use potion::{resolve_potion_effects, PotionType};
