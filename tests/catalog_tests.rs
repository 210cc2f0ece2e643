mod common;

#[cfg(test)]
pub mod catalog_tests {
    use super::common::*;

    use storepress::models::SectionCategory;
    use storepress::services::SectionCatalog;

    #[tokio::test]
    async fn test_load_uses_remote_sections() {
        let backend = MockBackend::new();

        let catalog = SectionCatalog::load(&backend).await;

        let ids: Vec<&str> = catalog
            .sections
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["hero", "about", "products"]);
        // Empty remote category map falls back to the defaults.
        assert!(!catalog.categories.is_empty());
    }

    #[tokio::test]
    async fn test_load_falls_back_on_remote_failure() {
        let backend = MockBackend::failing();

        let catalog = SectionCatalog::load(&backend).await;

        assert_eq!(catalog, SectionCatalog::fallback());
    }

    #[tokio::test]
    async fn test_load_falls_back_on_empty_listing() {
        let backend = MockBackend {
            sections: Vec::new(),
            ..MockBackend::new()
        };

        let catalog = SectionCatalog::load(&backend).await;

        assert_eq!(catalog, SectionCatalog::fallback());
    }

    #[tokio::test]
    async fn test_load_injects_hero_when_remote_lacks_it() {
        let backend = MockBackend {
            sections: vec![seed_section(
                "about",
                SectionCategory::Content,
                false,
                1,
            )],
            ..MockBackend::new()
        };

        let catalog = SectionCatalog::load(&backend).await;

        let hero = catalog
            .sections
            .iter()
            .find(|s| s.id == "hero")
            .expect("hero injected");
        assert!(hero.required);
        assert_eq!(catalog.sections[0].id, "hero");
    }

    #[test]
    fn test_fallback_covers_baseline_sections() {
        let catalog = SectionCatalog::fallback();

        let ids: Vec<&str> = catalog
            .sections
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec![
                "hero",
                "about",
                "products",
                "services",
                "contact",
                "testimonials",
                "gallery"
            ]
        );

        let hero = &catalog.sections[0];
        assert!(hero.required);
        assert!(catalog
            .sections
            .iter()
            .skip(1)
            .all(|s| !s.required));
        assert_eq!(catalog.categories.len(), 4);
    }
}
