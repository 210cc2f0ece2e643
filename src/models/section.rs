use serde::{Deserialize, Serialize};

/// Catalog entry describing one content block a storefront can include.
/// Immutable once fetched; the per-site state lives in
/// [`SectionConfiguration`](crate::models::SectionConfiguration).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: SectionCategory,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub icon: String,
    /// Opaque shape hint for the section's template, as returned by
    /// the remote API. Not interpreted client-side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_schema: Option<serde_json::Value>,
}

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SectionCategory {
    #[default]
    Content,
    Commerce,
    Social,
    Contact,
}

impl std::fmt::Display for SectionCategory {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Self::Content => write!(f, "content"),
            Self::Commerce => write!(f, "commerce"),
            Self::Social => write!(f, "social"),
            Self::Contact => write!(f, "contact"),
        }
    }
}

impl std::str::FromStr for SectionCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "content" => Ok(Self::Content),
            "commerce" => Ok(Self::Commerce),
            "social" => Ok(Self::Social),
            "contact" => Ok(Self::Contact),
            _ => Err(format!("invalid section category: {}", s)),
        }
    }
}
