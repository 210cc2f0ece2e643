use std::collections::BTreeMap;

use crate::api::{AvailableSections, SiteBackend};
use crate::models::{Section, SectionCategory};

/// Resolved list of sections a storefront can be built from, plus
/// category display names.
///
/// Loading never fails: any remote problem falls back to the built-in
/// catalog, and the result always contains the required `hero`
/// section. Safe to retry.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionCatalog {
    pub sections: Vec<Section>,
    pub categories: BTreeMap<String, String>,
}

impl SectionCatalog {
    pub async fn load(backend: &impl SiteBackend) -> Self {
        match backend.fetch_sections().await {
            Ok(remote) if !remote.sections.is_empty() => {
                Self::from_remote(remote)
            }
            Ok(_) => {
                log::warn!(
                    "section catalog came back empty, using built-in defaults"
                );
                Self::fallback()
            }
            Err(e) => {
                log::warn!(
                    "failed to load section catalog, using built-in defaults: {}",
                    e
                );
                Self::fallback()
            }
        }
    }

    /// The hard-coded catalog used when the remote listing is
    /// unavailable.
    pub fn fallback() -> Self {
        Self {
            sections: default_sections(),
            categories: default_categories(),
        }
    }

    fn from_remote(remote: AvailableSections) -> Self {
        let mut sections = remote.sections;

        // The renderer cannot produce a site without a hero; a
        // catalog that lacks one gets the default injected up front.
        match sections.iter_mut().find(|s| s.id == "hero") {
            Some(hero) => hero.required = true,
            None => {
                log::warn!(
                    "remote catalog has no hero section, injecting the default"
                );
                sections.insert(0, default_hero());
            }
        }

        let categories = if remote.categories.is_empty() {
            default_categories()
        } else {
            remote.categories.into_iter().collect()
        };

        Self {
            sections,
            categories,
        }
    }
}

fn default_hero() -> Section {
    Section {
        id: "hero".to_string(),
        name: "Hero".to_string(),
        description: "Large opening banner with headline and call to action"
            .to_string(),
        category: SectionCategory::Content,
        required: true,
        order: 1,
        icon: "star".to_string(),
        data_schema: None,
    }
}

fn default_sections() -> Vec<Section> {
    let entry = |id: &str,
                 name: &str,
                 description: &str,
                 category: SectionCategory,
                 order: i32,
                 icon: &str| Section {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category,
        required: false,
        order,
        icon: icon.to_string(),
        data_schema: None,
    };

    vec![
        default_hero(),
        entry(
            "about",
            "About",
            "Who you are and what you do",
            SectionCategory::Content,
            2,
            "info",
        ),
        entry(
            "products",
            "Products",
            "Grid of the products you sell",
            SectionCategory::Commerce,
            3,
            "shopping-bag",
        ),
        entry(
            "services",
            "Services",
            "The services you offer",
            SectionCategory::Commerce,
            4,
            "briefcase",
        ),
        entry(
            "contact",
            "Contact",
            "How customers reach you",
            SectionCategory::Contact,
            5,
            "mail",
        ),
        entry(
            "testimonials",
            "Testimonials",
            "What your customers say",
            SectionCategory::Social,
            6,
            "message-circle",
        ),
        entry(
            "gallery",
            "Gallery",
            "Image gallery of your work",
            SectionCategory::Content,
            7,
            "image",
        ),
    ]
}

fn default_categories() -> BTreeMap<String, String> {
    [
        ("content", "Content"),
        ("commerce", "Commerce"),
        ("social", "Social"),
        ("contact", "Contact"),
    ]
    .into_iter()
    .map(|(id, name)| (id.to_string(), name.to_string()))
    .collect()
}
