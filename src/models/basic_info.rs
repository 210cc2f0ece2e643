use serde::{Deserialize, Serialize};

use crate::common::validation::{
    validate_custom_domain, validate_subdomain,
};

/// Identity, domain and theme choices collected at wizard step 2.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicInfo {
    pub company: CompanyInfo,
    pub domain: DomainChoice,
    pub style: SiteStyle,
    pub theme: Theme,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyInfo {
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub logo_url: String,
    pub favicon_url: String,
}

/// Domain selection. The wire tags come from the remote API:
/// `subdominio` for a platform subdomain, `propio` for a customer-owned
/// domain. The variant-specific field must be set for its variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DomainChoice {
    #[serde(rename = "subdominio")]
    Subdomain { subdomain: String },
    #[serde(rename = "propio")]
    Custom {
        #[serde(rename = "customDomain")]
        custom_domain: String,
    },
}

impl Default for DomainChoice {
    fn default() -> Self {
        Self::Subdomain {
            subdomain: String::new(),
        }
    }
}

impl DomainChoice {
    /// The raw host string the user typed, whichever variant is active.
    pub fn host(&self) -> &str {
        match self {
            Self::Subdomain { subdomain } => subdomain,
            Self::Custom { custom_domain } => custom_domain,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        match self {
            Self::Subdomain { subdomain } => {
                validate_subdomain(subdomain)
            }
            Self::Custom { custom_domain } => {
                validate_custom_domain(custom_domain)
            }
        }
    }
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
pub enum SiteStyle {
    #[default]
    Moderno,
    Clasico,
    Colorido,
    Minimalista,
}

impl std::fmt::Display for SiteStyle {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Self::Moderno => write!(f, "moderno"),
            Self::Clasico => write!(f, "clasico"),
            Self::Colorido => write!(f, "colorido"),
            Self::Minimalista => write!(f, "minimalista"),
        }
    }
}

impl std::str::FromStr for SiteStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "moderno" => Ok(Self::Moderno),
            "clasico" => Ok(Self::Clasico),
            "colorido" => Ok(Self::Colorido),
            "minimalista" => Ok(Self::Minimalista),
            _ => Err(format!("invalid site style: {}", s)),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub colors: ThemeColors,
}

/// The eight named color slots every template exposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub surface: String,
    pub text: String,
    pub text_secondary: String,
    pub link: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: "#2563EB".to_string(),
            secondary: "#7C3AED".to_string(),
            accent: "#F59E0B".to_string(),
            background: "#FFFFFF".to_string(),
            surface: "#F3F4F6".to_string(),
            text: "#111827".to_string(),
            text_secondary: "#6B7280".to_string(),
            link: "#2563EB".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ColorSlot {
    Primary,
    Secondary,
    Accent,
    Background,
    Surface,
    Text,
    TextSecondary,
    Link,
}

impl ColorSlot {
    pub const ALL: [ColorSlot; 8] = [
        ColorSlot::Primary,
        ColorSlot::Secondary,
        ColorSlot::Accent,
        ColorSlot::Background,
        ColorSlot::Surface,
        ColorSlot::Text,
        ColorSlot::TextSecondary,
        ColorSlot::Link,
    ];
}

impl ThemeColors {
    pub fn get(&self, slot: ColorSlot) -> &str {
        match slot {
            ColorSlot::Primary => &self.primary,
            ColorSlot::Secondary => &self.secondary,
            ColorSlot::Accent => &self.accent,
            ColorSlot::Background => &self.background,
            ColorSlot::Surface => &self.surface,
            ColorSlot::Text => &self.text,
            ColorSlot::TextSecondary => &self.text_secondary,
            ColorSlot::Link => &self.link,
        }
    }

    pub fn set(&mut self, slot: ColorSlot, value: impl Into<String>) {
        let value = value.into();
        match slot {
            ColorSlot::Primary => self.primary = value,
            ColorSlot::Secondary => self.secondary = value,
            ColorSlot::Accent => self.accent = value,
            ColorSlot::Background => self.background = value,
            ColorSlot::Surface => self.surface = value,
            ColorSlot::Text => self.text = value,
            ColorSlot::TextSecondary => self.text_secondary = value,
            ColorSlot::Link => self.link = value,
        }
    }
}

impl Default for BasicInfo {
    fn default() -> Self {
        Self {
            company: CompanyInfo::default(),
            domain: DomainChoice::default(),
            style: SiteStyle::default(),
            theme: Theme::default(),
        }
    }
}

impl BasicInfo {
    /// Minimum completeness required to leave wizard step 2: a company
    /// name plus a valid value for the active domain variant.
    pub fn validate(&self) -> Result<(), String> {
        if self.company.name.trim().is_empty() {
            return Err("Company name is required".to_string());
        }
        self.domain.validate()
    }
}
