use std::{collections::HashMap, sync::Arc};

use parking_lot::RwLock;
use toml::Value;

use crate::ability::Ability;

/// All configured abilities, keyed by lowercase id.
///
/// A registry is never modified after it is built. Reloading builds a new one
/// and swaps it into a [`SharedAbilities`].
#[derive(Clone, Debug, Default)]
pub struct AbilityRegistry {
    abilities: HashMap<String, Ability>,
}

impl AbilityRegistry {
    /// Builds the registry from the `abilities` config section.
    /// A missing section, or one that isn't a table, gives an empty registry.
    pub fn load(section: Option<&Value>) -> Self {
        let table = match section {
            Some(Value::Table(table)) => table,
            Some(other) => {
                log::warn!(
                    "Expected `abilities` to be a table but found a {}, no abilities loaded",
                    other.type_str()
                );
                return Self::default();
            }
            None => return Self::default(),
        };

        let mut abilities = HashMap::with_capacity(table.len());
        for (id, section) in table {
            let ability = Ability::from_config(id, section);
            if let Some(previous) = abilities.insert(id.to_lowercase(), ability) {
                log::warn!(
                    "Ability {} is declared more than once (ids are case-insensitive), using {}",
                    previous.id(),
                    id
                );
            }
        }
        Self { abilities }
    }

    /// Case-insensitive lookup
    pub fn get(&self, id: &str) -> Option<&Ability> {
        self.abilities.get(&id.to_lowercase())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.abilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.abilities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ability> {
        self.abilities.values()
    }
}

/// Hands out snapshots of the current registry.
/// Readers never see a registry halfway through a reload.
#[derive(Debug, Default)]
pub struct SharedAbilities {
    current: RwLock<Arc<AbilityRegistry>>,
}

impl SharedAbilities {
    pub fn new(registry: AbilityRegistry) -> Self {
        Self {
            current: RwLock::new(Arc::new(registry)),
        }
    }

    pub fn snapshot(&self) -> Arc<AbilityRegistry> {
        self.current.read().clone()
    }

    /// Installs `registry` and returns the one it replaced.
    pub fn replace(&self, registry: AbilityRegistry) -> Arc<AbilityRegistry> {
        let registry = Arc::new(registry);
        std::mem::replace(&mut *self.current.write(), registry)
    }
}
