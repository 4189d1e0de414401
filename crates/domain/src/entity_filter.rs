//! Entity-exposure filter: decides which entities the voice assistant sees.
//!
//! Evaluation rules, by which lists are populated:
//!
//! 1. nothing configured: every entity is exposed;
//! 2. includes only: exposed iff the entity or its domain is included;
//! 3. excludes only: exposed iff neither the entity nor its domain is excluded;
//! 4. includes and excludes with included domains: an entity of an included
//!    domain is exposed unless explicitly excluded, any other entity only if
//!    explicitly included;
//! 5. includes and excludes with excluded (but no included) domains: an
//!    entity of an excluded domain is exposed only if explicitly included,
//!    any other entity unless explicitly excluded;
//! 6. includes and excludes without any domain list: exposed iff explicitly
//!    included.

use std::collections::BTreeSet;

use serde::Deserialize;

use crate::entity_id::EntityId;

/// Include/exclude rules over entity ids and entity domains.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EntityFilter {
    /// Domains whose entities are exposed.
    pub include_domains: BTreeSet<String>,
    /// Entities that are exposed.
    pub include_entities: BTreeSet<EntityId>,
    /// Domains whose entities are hidden.
    pub exclude_domains: BTreeSet<String>,
    /// Entities that are hidden.
    pub exclude_entities: BTreeSet<EntityId>,
}

impl EntityFilter {
    /// A filter exposing every entity.
    #[must_use]
    pub fn accept_all() -> Self {
        Self::default()
    }

    /// Whether no rule is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.include_domains.is_empty()
            && self.include_entities.is_empty()
            && self.exclude_domains.is_empty()
            && self.exclude_entities.is_empty()
    }

    /// Decide whether `entity_id` is exposed to the voice assistant.
    #[must_use]
    pub fn should_expose(&self, entity_id: &EntityId) -> bool {
        let has_includes = !self.include_domains.is_empty() || !self.include_entities.is_empty();
        let has_excludes = !self.exclude_domains.is_empty() || !self.exclude_entities.is_empty();

        let included = self.include_entities.contains(entity_id);
        let excluded = self.exclude_entities.contains(entity_id);
        let domain = entity_id.domain();

        match (has_includes, has_excludes) {
            (false, false) => true,
            (true, false) => included || self.include_domains.contains(domain),
            (false, true) => !excluded && !self.exclude_domains.contains(domain),
            (true, true) if !self.include_domains.is_empty() => {
                if self.include_domains.contains(domain) {
                    !excluded
                } else {
                    included
                }
            }
            (true, true) if !self.exclude_domains.is_empty() => {
                if self.exclude_domains.contains(domain) {
                    included
                } else {
                    !excluded
                }
            }
            (true, true) => included,
        }
    }
}
