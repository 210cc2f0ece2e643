use std::collections::BTreeSet;

use crate::common::validation::{
    validate_company_name, validate_hex_color,
    validate_optional_url,
};
use crate::models::{
    derive_client_id, BasicInfo, ColorSlot, DomainChoice, SiteStyle,
};

/// Fields of the basic-info form, for touched-state bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormField {
    CompanyName,
    Tagline,
    Description,
    LogoUrl,
    FaviconUrl,
    Domain,
    Style,
    Color(ColorSlot),
}

/// Collector for wizard step 2. Validation messages are field-scoped
/// and only surfaced for fields the user has interacted with, so a
/// half-filled form does not flash errors for untouched fields.
#[derive(Debug, Clone, PartialEq)]
pub struct BasicInfoForm {
    info: BasicInfo,
    touched: BTreeSet<FormField>,
}

impl Default for BasicInfoForm {
    fn default() -> Self {
        Self::new()
    }
}

impl BasicInfoForm {
    pub fn new() -> Self {
        Self {
            info: BasicInfo::default(),
            touched: BTreeSet::new(),
        }
    }

    /// Prefill from an existing session (edit/resume flows). Nothing
    /// counts as touched yet.
    pub fn from_info(info: BasicInfo) -> Self {
        Self {
            info,
            touched: BTreeSet::new(),
        }
    }

    pub fn info(&self) -> &BasicInfo {
        &self.info
    }

    pub fn into_info(self) -> BasicInfo {
        self.info
    }

    pub fn set_company_name(&mut self, value: &str) {
        self.info.company.name = value.to_string();
        self.touched.insert(FormField::CompanyName);
    }

    pub fn set_tagline(&mut self, value: &str) {
        self.info.company.tagline = value.to_string();
        self.touched.insert(FormField::Tagline);
    }

    pub fn set_description(&mut self, value: &str) {
        self.info.company.description = value.to_string();
        self.touched.insert(FormField::Description);
    }

    pub fn set_logo_url(&mut self, value: &str) {
        self.info.company.logo_url = value.to_string();
        self.touched.insert(FormField::LogoUrl);
    }

    pub fn set_favicon_url(&mut self, value: &str) {
        self.info.company.favicon_url = value.to_string();
        self.touched.insert(FormField::FaviconUrl);
    }

    pub fn set_subdomain(&mut self, value: &str) {
        self.info.domain = DomainChoice::Subdomain {
            subdomain: value.to_string(),
        };
        self.touched.insert(FormField::Domain);
    }

    pub fn set_custom_domain(&mut self, value: &str) {
        self.info.domain = DomainChoice::Custom {
            custom_domain: value.to_string(),
        };
        self.touched.insert(FormField::Domain);
    }

    pub fn set_style(&mut self, style: SiteStyle) {
        self.info.style = style;
        self.touched.insert(FormField::Style);
    }

    pub fn set_color(&mut self, slot: ColorSlot, value: &str) {
        self.info.theme.colors.set(slot, value);
        self.touched.insert(FormField::Color(slot));
    }

    /// Validate one field regardless of touched state.
    pub fn validate_field(
        &self,
        field: FormField,
    ) -> Result<(), String> {
        match field {
            FormField::CompanyName => {
                validate_company_name(&self.info.company.name)
            }
            FormField::Tagline | FormField::Description => Ok(()),
            FormField::LogoUrl => {
                validate_optional_url(&self.info.company.logo_url)
            }
            FormField::FaviconUrl => validate_optional_url(
                &self.info.company.favicon_url,
            ),
            FormField::Domain => self.info.domain.validate(),
            FormField::Style => Ok(()),
            FormField::Color(slot) => {
                validate_hex_color(self.info.theme.colors.get(slot))
            }
        }
    }

    /// The message to show next to a field: only set once the field
    /// has been touched, even if the current value is invalid.
    pub fn field_error(&self, field: FormField) -> Option<String> {
        if !self.touched.contains(&field) {
            return None;
        }
        self.validate_field(field).err()
    }

    /// All currently surfaced (touched and invalid) fields.
    pub fn errors(&self) -> Vec<(FormField, String)> {
        self.touched
            .iter()
            .filter_map(|field| {
                self.validate_field(*field)
                    .err()
                    .map(|message| (*field, message))
            })
            .collect()
    }

    /// Whether the form as a whole would pass the step-2 guard,
    /// touched or not.
    pub fn is_complete(&self) -> bool {
        self.all_fields()
            .into_iter()
            .all(|field| self.validate_field(field).is_ok())
    }

    /// Client id this form would give the session, per the derivation
    /// rule: the sanitized domain host wins when non-empty.
    pub fn derived_client_id(&self, current: &str) -> String {
        derive_client_id(current, &self.info.domain)
    }

    fn all_fields(&self) -> Vec<FormField> {
        let mut fields = vec![
            FormField::CompanyName,
            FormField::Tagline,
            FormField::Description,
            FormField::LogoUrl,
            FormField::FaviconUrl,
            FormField::Domain,
            FormField::Style,
        ];
        fields.extend(ColorSlot::ALL.map(FormField::Color));
        fields
    }
}
