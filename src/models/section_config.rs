use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{Section, SectionData};

/// Sentinel order for sections injected only to complete a submission;
/// sorts after every user-ordered section.
pub const APPENDED_ORDER: i32 = 999;

/// Enabled/order/data state of one catalog section within a site
/// build. Exactly one exists per known section id; disabling keeps the
/// captured data around.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionConfiguration {
    pub id: String,
    pub enabled: bool,
    pub order: i32,
    pub data: SectionData,
}

impl SectionConfiguration {
    /// Seed configuration for a catalog entry: required sections start
    /// enabled, everything else disabled, with default template data.
    pub fn seed(section: &Section, order: i32) -> Self {
        Self {
            id: section.id.clone(),
            enabled: section.required,
            order,
            data: SectionData::default_for(&section.id),
        }
    }

    /// Disabled placeholder used when a submission must cover a
    /// catalog section the user never touched.
    pub fn appended(section: &Section) -> Self {
        Self {
            id: section.id.clone(),
            enabled: false,
            order: APPENDED_ORDER,
            data: SectionData::default_for(&section.id),
        }
    }

    pub fn merge_data(&mut self, patch: &Value) {
        self.data.merge(patch);
    }
}
