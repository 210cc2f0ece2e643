use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{
    CompanyInfo, SectionConfiguration, SiteStyle, Theme,
};

/// Full site definition submitted to the remote template service.
/// Always carries every catalog section, enabled or not, so the
/// renderer never sees an undefined section reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfiguration {
    pub client_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub style: SiteStyle,
    pub sections: Vec<SectionConfiguration>,
    pub company: CompanyInfo,
    #[serde(default)]
    pub theme: Theme,
}

/// Draft/published state of the session. `is_published` is monotonic:
/// once a publish succeeds it stays true until an explicit reset.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PublishState {
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub url: Option<String>,
}
