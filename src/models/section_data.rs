use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Per-section content payload, one variant per known template.
///
/// The wire format is a JSON object carrying a `template` tag for the
/// templates this client knows about. Objects with a missing or
/// unrecognized tag fall into [`SectionData::Unknown`] so that
/// server-defined templates pass through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "template", rename_all = "lowercase")]
pub enum SectionData {
    Hero(HeroData),
    About(AboutData),
    Products(ProductsData),
    Services(ServicesData),
    Contact(ContactData),
    Testimonials(TestimonialsData),
    Gallery(GalleryData),
    #[serde(untagged)]
    Unknown(Map<String, Value>),
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroData {
    pub title: String,
    pub subtitle: String,
    pub button_text: String,
    pub button_link: String,
    pub background_image: String,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutData {
    pub title: String,
    pub content: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductsData {
    pub title: String,
    pub show_prices: bool,
    pub columns: u8,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServicesData {
    pub title: String,
    pub services: Vec<ServiceItem>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceItem {
    pub name: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactData {
    pub title: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub show_form: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestimonialsData {
    pub title: String,
    pub testimonials: Vec<TestimonialItem>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestimonialItem {
    pub author: String,
    pub quote: String,
    pub avatar: String,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryData {
    pub title: String,
    pub images: Vec<String>,
}

impl Default for ProductsData {
    fn default() -> Self {
        Self {
            title: String::new(),
            show_prices: true,
            columns: 3,
        }
    }
}

impl SectionData {
    /// Freshly generated default payload for a catalog section id.
    /// Ids without a known template get an empty opaque map.
    pub fn default_for(section_id: &str) -> Self {
        match section_id {
            "hero" => Self::Hero(HeroData::default()),
            "about" => Self::About(AboutData::default()),
            "products" => Self::Products(ProductsData::default()),
            "services" => Self::Services(ServicesData::default()),
            "contact" => Self::Contact(ContactData::default()),
            "testimonials" => {
                Self::Testimonials(TestimonialsData::default())
            }
            "gallery" => Self::Gallery(GalleryData::default()),
            _ => Self::Unknown(Map::new()),
        }
    }

    pub fn as_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Deep-merge `patch` into this payload. Keys absent from `patch`
    /// are retained; object values merge recursively, everything else
    /// is replaced. If the merged object no longer parses as the typed
    /// variant it is kept verbatim as [`SectionData::Unknown`].
    pub fn merge(&mut self, patch: &Value) {
        let mut value = self.as_value();
        merge_json(&mut value, patch);

        *self = match serde_json::from_value(value.clone()) {
            Ok(data) => data,
            Err(_) => match value {
                Value::Object(map) => Self::Unknown(map),
                _ => return,
            },
        };
    }

    /// Name of the first unfilled field this section's template cannot
    /// render without, or `None` when the section is ready.
    pub fn missing_required_field(&self) -> Option<&'static str> {
        match self {
            Self::Hero(d) if d.title.trim().is_empty() => {
                Some("title")
            }
            Self::About(d) if d.title.trim().is_empty() => {
                Some("title")
            }
            Self::Contact(d) if d.email.trim().is_empty() => {
                Some("email")
            }
            _ => None,
        }
    }
}

/// Recursive JSON merge: objects merge key-by-key, any other value in
/// `patch` replaces the base value outright.
pub fn merge_json(base: &mut Value, patch: &Value) {
    match (base, patch) {
        (Value::Object(base_map), Value::Object(patch_map)) => {
            for (key, patch_value) in patch_map {
                match base_map.get_mut(key) {
                    Some(base_value) => {
                        merge_json(base_value, patch_value)
                    }
                    None => {
                        base_map.insert(
                            key.clone(),
                            patch_value.clone(),
                        );
                    }
                }
            }
        }
        (base, patch) => *base = patch.clone(),
    }
}
