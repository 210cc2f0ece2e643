use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use serde_json::json;

use storepress::api::{
    AvailableSections, SaveResponse, SiteBackend,
};
use storepress::common::ApiError;
use storepress::models::*;
use storepress::wizard::{machine, WizardSession};

pub fn seed_section(
    id: &str,
    category: SectionCategory,
    required: bool,
    order: i32,
) -> Section {
    Section {
        id: id.to_string(),
        name: id.to_string(),
        description: format!("{} section", id),
        category,
        required,
        order,
        icon: "box".to_string(),
        data_schema: None,
    }
}

/// The three-section catalog used by most scenarios: a required hero
/// plus optional about and products.
pub fn seed_catalog() -> Vec<Section> {
    vec![
        seed_section("hero", SectionCategory::Content, true, 1),
        seed_section("about", SectionCategory::Content, false, 2),
        seed_section(
            "products",
            SectionCategory::Commerce,
            false,
            3,
        ),
    ]
}

/// Catalog with no required sections, for zero-enabled guard tests.
pub fn seed_optional_catalog() -> Vec<Section> {
    vec![
        seed_section("about", SectionCategory::Content, false, 1),
        seed_section(
            "gallery",
            SectionCategory::Content,
            false,
            2,
        ),
    ]
}

pub fn seed_basic_info(name: &str, subdomain: &str) -> BasicInfo {
    BasicInfo {
        company: CompanyInfo {
            name: name.to_string(),
            ..Default::default()
        },
        domain: DomainChoice::Subdomain {
            subdomain: subdomain.to_string(),
        },
        style: SiteStyle::Moderno,
        theme: Theme::default(),
    }
}

/// Session walked through steps 1-3 with the seed catalog: about
/// enabled, company "Acme" on subdomain "acme", hero and about
/// content filled in, sitting at the publish step.
pub fn seed_acme_session() -> WizardSession {
    let catalog = seed_catalog();
    let session = WizardSession::new(&catalog);
    let session = machine::toggle_section(&session, "about", true);

    let session = machine::advance(&session)
        .expect("step 1 should pass with hero and about enabled");
    let session = machine::set_basic_info(
        &session,
        seed_basic_info("Acme", "acme"),
    );

    let session = machine::advance(&session)
        .expect("step 2 should pass with valid basic info");
    let session = machine::update_section_data(
        &session,
        "hero",
        &json!({ "title": "Welcome to Acme" }),
    );

    let session = machine::advance(&session)
        .expect("hero should be complete");
    let session = machine::update_section_data(
        &session,
        "about",
        &json!({ "title": "About Acme" }),
    );

    machine::advance(&session)
        .expect("about should be complete, landing on step 4")
}

/// In-memory stand-in for the remote template service, recording
/// every submitted configuration.
pub struct MockBackend {
    pub sections: Vec<Section>,
    pub categories: HashMap<String, String>,
    pub fail_sections: bool,
    pub fail_save: bool,
    pub save_calls: AtomicUsize,
    pub submissions: Mutex<Vec<ClientConfiguration>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            sections: seed_catalog(),
            categories: HashMap::new(),
            fail_sections: false,
            fail_save: false,
            save_calls: AtomicUsize::new(0),
            submissions: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_sections: true,
            fail_save: true,
            ..Self::new()
        }
    }

    pub fn save_call_count(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }
}

impl SiteBackend for MockBackend {
    async fn fetch_sections(
        &self,
    ) -> Result<AvailableSections, ApiError> {
        if self.fail_sections {
            return Err(ApiError::Server(
                "catalog unavailable".to_string(),
            ));
        }

        Ok(AvailableSections {
            sections: self.sections.clone(),
            categories: self.categories.clone(),
        })
    }

    async fn save_configuration(
        &self,
        configuration: &ClientConfiguration,
    ) -> Result<SaveResponse, ApiError> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_save {
            return Err(ApiError::Server(
                "internal error".to_string(),
            ));
        }

        self.submissions
            .lock()
            .expect("submissions lock")
            .push(configuration.clone());

        Ok(SaveResponse {
            url: Some(format!(
                "https://{}.storepress.app",
                configuration.client_id
            )),
        })
    }

    async fn fetch_preview(
        &self,
        client_id: &str,
    ) -> Result<String, ApiError> {
        Ok(format!(
            "<html data-client=\"{}\"></html>",
            client_id
        ))
    }
}
