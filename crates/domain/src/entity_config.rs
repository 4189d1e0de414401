//! Per-entity overrides applied when an entity is described to the voice
//! assistant.

use std::collections::HashMap;

use serde::Deserialize;

use crate::entity_id::EntityId;

/// Overrides for a single entity. Unset fields keep the entity's own values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EntityOverrides {
    /// Name announced to the voice assistant.
    pub name: Option<String>,
    /// Free-form description shown in the companion app.
    pub description: Option<String>,
    /// Display category, e.g. `LIGHT` or `SMARTPLUG`.
    pub display_categories: Option<String>,
}

/// Mapping of entity id to overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct EntityConfig(HashMap<EntityId, EntityOverrides>);

impl EntityConfig {
    #[must_use]
    pub fn new(overrides: HashMap<EntityId, EntityOverrides>) -> Self {
        Self(overrides)
    }

    /// Overrides configured for `entity_id`, if any.
    #[must_use]
    pub fn get(&self, entity_id: &EntityId) -> Option<&EntityOverrides> {
        self.0.get(entity_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(EntityId, EntityOverrides)> for EntityConfig {
    fn from_iter<T: IntoIterator<Item = (EntityId, EntityOverrides)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
