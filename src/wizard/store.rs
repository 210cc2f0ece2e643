use serde::{Deserialize, Serialize};
use serde_json::Value;

use std::collections::{BTreeMap, BTreeSet};

use crate::models::{Section, SectionConfiguration};

/// Direction for [`SectionStore::reorder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderDirection {
    Up,
    Down,
}

/// Ordered per-section state for the site being built: exactly one
/// [`SectionConfiguration`] per known section id.
///
/// Invariant maintained by every mutation: the `order` values of the
/// enabled subset form a contiguous 1..N sequence. Disabled sections
/// keep whatever `order` they last had and sit outside that sequence.
#[derive(
    Debug, Default, Clone, PartialEq, Serialize, Deserialize,
)]
pub struct SectionStore {
    configs: BTreeMap<String, SectionConfiguration>,
    required: BTreeSet<String>,
}

impl SectionStore {
    /// Seed 1:1 from the catalog: required sections enabled and
    /// numbered 1..N in catalog order, the rest disabled with their
    /// catalog display order.
    pub fn from_catalog(catalog: &[Section]) -> Self {
        let mut ordered: Vec<&Section> = catalog.iter().collect();
        ordered.sort_by_key(|s| (s.order, s.id.clone()));

        let mut configs = BTreeMap::new();
        let mut required = BTreeSet::new();
        let mut next_enabled = 0;

        for section in ordered {
            let order = if section.required {
                next_enabled += 1;
                next_enabled
            } else {
                section.order
            };

            configs.insert(
                section.id.clone(),
                SectionConfiguration::seed(section, order),
            );
            if section.required {
                required.insert(section.id.clone());
            }
        }

        Self { configs, required }
    }

    /// Rebuild a store from a previously saved configuration,
    /// injecting any catalog section the saved list does not cover.
    pub fn from_saved(
        catalog: &[Section],
        saved: &[SectionConfiguration],
    ) -> Self {
        let mut store = Self::from_catalog(catalog);

        for config in saved {
            let mut config = config.clone();
            // Required sections stay enabled no matter what the
            // saved payload says.
            if store.required.contains(&config.id) {
                config.enabled = true;
            }
            store.configs.insert(config.id.clone(), config);
        }

        store.renumber_enabled();
        store
    }

    pub fn get(&self, id: &str) -> Option<&SectionConfiguration> {
        self.configs.get(id)
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    pub fn is_required(&self, id: &str) -> bool {
        self.required.contains(id)
    }

    /// Enabled sections sorted by their order index.
    pub fn enabled_sections(&self) -> Vec<&SectionConfiguration> {
        let mut enabled: Vec<&SectionConfiguration> = self
            .configs
            .values()
            .filter(|c| c.enabled)
            .collect();
        enabled.sort_by_key(|c| c.order);
        enabled
    }

    pub fn enabled_count(&self) -> usize {
        self.configs.values().filter(|c| c.enabled).count()
    }

    /// Flip a section on or off. No-ops: unknown ids, disabling a
    /// required section, and repeating the current state.
    pub fn toggle(&mut self, id: &str, enabled: bool) {
        if !enabled && self.required.contains(id) {
            return;
        }

        let max_enabled_order = self
            .configs
            .values()
            .filter(|c| c.enabled)
            .map(|c| c.order)
            .max()
            .unwrap_or(0);

        let Some(config) = self.configs.get_mut(id) else {
            return;
        };
        if config.enabled == enabled {
            return;
        }

        config.enabled = enabled;
        if enabled {
            // Newly enabled sections join at the end of the list.
            config.order = max_enabled_order + 1;
        }

        self.renumber_enabled();
    }

    /// Swap a section with its neighbor within the enabled subset.
    /// No-op at either boundary or for disabled/unknown ids.
    pub fn reorder(&mut self, id: &str, direction: ReorderDirection) {
        let enabled: Vec<(String, i32)> = self
            .enabled_sections()
            .iter()
            .map(|c| (c.id.clone(), c.order))
            .collect();

        let Some(position) =
            enabled.iter().position(|(eid, _)| eid == id)
        else {
            return;
        };

        let neighbor = match direction {
            ReorderDirection::Up if position > 0 => position - 1,
            ReorderDirection::Down
                if position + 1 < enabled.len() =>
            {
                position + 1
            }
            _ => return,
        };

        let (self_id, self_order) = enabled[position].clone();
        let (neighbor_id, neighbor_order) =
            enabled[neighbor].clone();

        if let Some(config) = self.configs.get_mut(&self_id) {
            config.order = neighbor_order;
        }
        if let Some(config) = self.configs.get_mut(&neighbor_id) {
            config.order = self_order;
        }

        self.renumber_enabled();
    }

    /// Deep-merge a patch into a section's data. Keys not present in
    /// the patch are never removed.
    pub fn update_data(&mut self, id: &str, patch: &Value) {
        if let Some(config) = self.configs.get_mut(id) {
            config.merge_data(patch);
        }
    }

    /// Full submission list covering every catalog section id exactly
    /// once: stored configurations as-is, catalog sections this store
    /// has never seen injected as disabled defaults placed after all
    /// enabled sections.
    pub fn ensure_completeness(
        &self,
        catalog: &[Section],
    ) -> Vec<SectionConfiguration> {
        let mut complete: Vec<SectionConfiguration> = catalog
            .iter()
            .map(|section| {
                self.configs
                    .get(&section.id)
                    .cloned()
                    .unwrap_or_else(|| {
                        SectionConfiguration::appended(section)
                    })
            })
            .collect();

        complete.sort_by(|a, b| {
            b.enabled
                .cmp(&a.enabled)
                .then(a.order.cmp(&b.order))
                .then(a.id.cmp(&b.id))
        });
        complete
    }

    /// Re-number the enabled subset to a contiguous 1..N sequence,
    /// preserving relative order.
    fn renumber_enabled(&mut self) {
        let ids: Vec<String> = self
            .enabled_sections()
            .iter()
            .map(|c| c.id.clone())
            .collect();

        for (index, id) in ids.iter().enumerate() {
            if let Some(config) = self.configs.get_mut(id) {
                config.order = index as i32 + 1;
            }
        }
    }
}
