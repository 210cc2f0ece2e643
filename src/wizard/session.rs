use serde::{Deserialize, Serialize};

use crate::models::{
    generate_client_id, BasicInfo, ClientConfiguration,
    DomainChoice, PublishState, Section,
};
use crate::wizard::SectionStore;

/// The four linear wizard steps. No branching, no skip-ahead.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    Sections,
    BasicInfo,
    Content,
    Publish,
}

impl WizardStep {
    /// 1-based step number for display.
    pub fn number(&self) -> u8 {
        match self {
            Self::Sections => 1,
            Self::BasicInfo => 2,
            Self::Content => 3,
            Self::Publish => 4,
        }
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Self::Sections => write!(f, "sections"),
            Self::BasicInfo => write!(f, "basic info"),
            Self::Content => write!(f, "content"),
            Self::Publish => write!(f, "publish"),
        }
    }
}

/// Complete state of one wizard run. A plain value: every transition
/// in [`crate::wizard::machine`] takes a session and returns a new
/// one, so the flow is testable without a UI harness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardSession {
    pub step: WizardStep,
    pub client_id: String,
    pub basic_info: Option<BasicInfo>,
    pub store: SectionStore,
    /// Index into the enabled subset for the step-3 per-section walk.
    pub section_cursor: usize,
    pub loading: bool,
    pub error: Option<String>,
    pub publish: PublishState,
    /// Bumped on reset; in-flight call results carrying an older
    /// epoch are discarded instead of written into this session.
    pub epoch: u64,
}

impl WizardSession {
    pub fn new(catalog: &[Section]) -> Self {
        Self {
            step: WizardStep::Sections,
            client_id: generate_client_id(),
            basic_info: None,
            store: SectionStore::from_catalog(catalog),
            section_cursor: 0,
            loading: false,
            error: None,
            publish: PublishState::default(),
            epoch: 0,
        }
    }

    /// Start a session prefilled from a configuration fetched from
    /// the remote service. The session itself starts unpublished; the
    /// user walks the steps again and republishes explicitly.
    pub fn resume_from(
        catalog: &[Section],
        saved: &ClientConfiguration,
    ) -> Self {
        let basic_info = BasicInfo {
            company: saved.company.clone(),
            domain: DomainChoice::Subdomain {
                subdomain: saved.client_id.clone(),
            },
            style: saved.style,
            theme: saved.theme.clone(),
        };

        Self {
            step: WizardStep::Sections,
            client_id: saved.client_id.clone(),
            basic_info: Some(basic_info),
            store: SectionStore::from_saved(
                catalog,
                &saved.sections,
            ),
            section_cursor: 0,
            loading: false,
            error: None,
            publish: PublishState::default(),
            epoch: 0,
        }
    }
}
