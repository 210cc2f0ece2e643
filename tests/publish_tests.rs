mod common;

#[cfg(test)]
pub mod publish_tests {
    use super::common::*;

    use storepress::common::PublishError;
    use storepress::services::PublishCoordinator;
    use storepress::wizard::{machine, WizardSession};

    #[tokio::test]
    async fn test_publish_end_to_end_success() {
        let catalog = seed_catalog();
        let backend = MockBackend::new();
        let coordinator = PublishCoordinator::new(&backend);
        let mut session = seed_acme_session();

        let success = coordinator
            .publish(&mut session, &catalog)
            .await
            .expect("publish should succeed");

        assert_eq!(success.url, "https://acme.storepress.app");
        assert!(success
            .preview_html
            .as_deref()
            .unwrap()
            .contains("acme"));

        assert!(session.publish.is_published);
        assert!(session.publish.published_at.is_some());
        assert!(!session.loading);
        assert!(session.error.is_none());

        let submissions =
            backend.submissions.lock().unwrap();
        assert_eq!(submissions.len(), 1);

        let submitted = &submissions[0];
        assert_eq!(submitted.client_id, "acme");
        assert_eq!(submitted.name, "Acme");
        assert_eq!(submitted.sections.len(), 3);

        let hero = submitted
            .sections
            .iter()
            .find(|s| s.id == "hero")
            .unwrap();
        assert!(hero.enabled);
        assert_eq!(hero.order, 1);

        let about = submitted
            .sections
            .iter()
            .find(|s| s.id == "about")
            .unwrap();
        assert!(about.enabled);
        assert_eq!(about.order, 2);

        let products = submitted
            .sections
            .iter()
            .find(|s| s.id == "products")
            .unwrap();
        assert!(!products.enabled);
    }

    #[tokio::test]
    async fn test_publish_fails_on_second_attempt() {
        let catalog = seed_catalog();
        let backend = MockBackend::new();
        let coordinator = PublishCoordinator::new(&backend);
        let mut session = seed_acme_session();

        coordinator
            .publish(&mut session, &catalog)
            .await
            .expect("first publish should succeed");

        let second =
            coordinator.publish(&mut session, &catalog).await;

        assert!(matches!(
            second.unwrap_err(),
            PublishError::AlreadyPublished
        ));
        // The guard short-circuits before any network call.
        assert_eq!(backend.save_call_count(), 1);
    }

    #[tokio::test]
    async fn test_reset_publish_state_allows_republishing() {
        let catalog = seed_catalog();
        let backend = MockBackend::new();
        let coordinator = PublishCoordinator::new(&backend);
        let mut session = seed_acme_session();

        coordinator
            .publish(&mut session, &catalog)
            .await
            .expect("first publish should succeed");

        let mut session =
            machine::reset_publish_state(&session);
        assert!(!session.publish.is_published);
        assert!(session.publish.url.is_none());
        // Selections and basic info survive, unlike a full reset.
        assert!(session.basic_info.is_some());

        coordinator
            .publish(&mut session, &catalog)
            .await
            .expect("republish should succeed");
        assert_eq!(backend.save_call_count(), 2);
    }

    #[tokio::test]
    async fn test_publish_fails_on_missing_basic_info() {
        let catalog = seed_catalog();
        let backend = MockBackend::new();
        let coordinator = PublishCoordinator::new(&backend);
        let mut session = WizardSession::new(&catalog);

        let result =
            coordinator.publish(&mut session, &catalog).await;

        assert!(matches!(
            result.unwrap_err(),
            PublishError::MissingBasicInfo
        ));
        assert_eq!(backend.save_call_count(), 0);
    }

    #[tokio::test]
    async fn test_publish_fails_on_zero_enabled_sections() {
        let catalog = seed_optional_catalog();
        let backend = MockBackend::new();
        let coordinator = PublishCoordinator::new(&backend);

        let mut session = WizardSession::new(&catalog);
        session.basic_info =
            Some(seed_basic_info("Acme", "acme"));

        let result =
            coordinator.publish(&mut session, &catalog).await;

        assert!(matches!(
            result.unwrap_err(),
            PublishError::NoSectionsEnabled
        ));
        assert_eq!(backend.save_call_count(), 0);
    }

    #[tokio::test]
    async fn test_publish_failure_leaves_session_retryable() {
        let catalog = seed_catalog();
        let failing = MockBackend {
            fail_save: true,
            ..MockBackend::new()
        };
        let mut session = seed_acme_session();

        let result = PublishCoordinator::new(&failing)
            .publish(&mut session, &catalog)
            .await;

        assert!(matches!(
            result.unwrap_err(),
            PublishError::Api(_)
        ));
        assert!(!session.publish.is_published);
        assert!(!session.loading);
        assert!(session.error.is_some());

        // The user re-clicks once the backend recovers.
        let recovered = MockBackend::new();
        PublishCoordinator::new(&recovered)
            .publish(&mut session, &catalog)
            .await
            .expect("retry should succeed");

        assert!(session.publish.is_published);
    }

    #[tokio::test]
    async fn test_publish_discards_result_for_reset_session() {
        let catalog = seed_catalog();
        let backend = MockBackend::new();
        let coordinator = PublishCoordinator::new(&backend);
        let session = seed_acme_session();

        // Request goes out against the original session...
        let submission = PublishCoordinator::<MockBackend>::prepare(
            &session, &catalog,
        )
        .unwrap();
        let epoch = session.epoch;
        let outcome = coordinator.submit(&submission).await;

        // ...but the user resets the wizard while it is in flight.
        let mut session = machine::reset(&session, &catalog);

        let applied = PublishCoordinator::<MockBackend>::apply(
            &mut session,
            epoch,
            outcome,
        );

        assert!(matches!(
            applied.unwrap_err(),
            PublishError::StaleSession
        ));
        assert!(!session.publish.is_published);
        assert!(session.publish.published_at.is_none());
    }
}
