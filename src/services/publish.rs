use chrono::Utc;

use crate::api::SiteBackend;
use crate::common::PublishError;
use crate::models::{ClientConfiguration, Section};
use crate::wizard::WizardSession;

/// Result of a successful publish: the public URL plus the rendered
/// preview when the follow-up fetch succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishSuccess {
    pub url: String,
    pub preview_html: Option<String>,
}

/// Drives the final wizard step in three phases: [`prepare`] builds
/// the complete submission without side effects, [`submit`] performs
/// the network calls, and [`apply`] folds the outcome back into the
/// session. [`publish`] composes all three for the common case.
///
/// Publishing is at-most-once effective per session: once
/// `is_published` is set, further attempts short-circuit with
/// [`PublishError::AlreadyPublished`] and no network call is made.
///
/// [`prepare`]: PublishCoordinator::prepare
/// [`submit`]: PublishCoordinator::submit
/// [`apply`]: PublishCoordinator::apply
/// [`publish`]: PublishCoordinator::publish
pub struct PublishCoordinator<'a, B: SiteBackend> {
    backend: &'a B,
}

impl<'a, B: SiteBackend> PublishCoordinator<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    /// Precondition checks and submission assembly: fails fast before
    /// any network traffic when the session is already published, has
    /// no basic info, or has no enabled section. The submission
    /// covers every catalog section so the remote renderer never sees
    /// an undefined reference.
    pub fn prepare(
        session: &WizardSession,
        catalog: &[Section],
    ) -> Result<ClientConfiguration, PublishError> {
        if session.publish.is_published {
            return Err(PublishError::AlreadyPublished);
        }

        let info = session
            .basic_info
            .as_ref()
            .ok_or(PublishError::MissingBasicInfo)?;

        if session.store.enabled_count() == 0 {
            return Err(PublishError::NoSectionsEnabled);
        }

        Ok(ClientConfiguration {
            client_id: session.client_id.clone(),
            name: info.company.name.clone(),
            description: info.company.description.clone(),
            style: info.style,
            sections: session.store.ensure_completeness(catalog),
            company: info.company.clone(),
            theme: info.theme.clone(),
        })
    }

    /// Network half: save the configuration, then fetch the preview
    /// render. A preview failure after a successful save is logged
    /// and reported as `preview_html: None`, not as an error.
    pub async fn submit(
        &self,
        submission: &ClientConfiguration,
    ) -> Result<PublishSuccess, PublishError> {
        let saved = self
            .backend
            .save_configuration(submission)
            .await
            .map_err(|e| {
                log::error!(
                    "publish failed for {}: {}",
                    submission.client_id,
                    e
                );
                e
            })?;

        let url = saved.url.unwrap_or_else(|| {
            format!(
                "https://{}.storepress.app",
                submission.client_id
            )
        });

        let preview_html = match self
            .backend
            .fetch_preview(&submission.client_id)
            .await
        {
            Ok(html) => Some(html),
            Err(e) => {
                log::warn!(
                    "preview fetch failed after publish: {}",
                    e
                );
                None
            }
        };

        Ok(PublishSuccess { url, preview_html })
    }

    /// Fold a completed submit back into the session. `epoch` is the
    /// session epoch captured before the request went out; if the
    /// session was reset in the meantime the outcome belongs to a
    /// dead session and is discarded. On success the session becomes
    /// published; on failure it keeps `is_published == false` and
    /// carries the user-visible message, so a re-click retries.
    pub fn apply(
        session: &mut WizardSession,
        epoch: u64,
        outcome: Result<PublishSuccess, PublishError>,
    ) -> Result<PublishSuccess, PublishError> {
        if session.epoch != epoch {
            log::warn!(
                "discarding publish result for reset session {}",
                session.client_id
            );
            return Err(PublishError::StaleSession);
        }

        match outcome {
            Ok(success) => {
                session.publish.is_published = true;
                session.publish.published_at = Some(Utc::now());
                session.publish.url = Some(success.url.clone());
                Ok(success)
            }
            Err(e) => {
                session.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// prepare + submit + apply against a live session, with the
    /// loading flag held for the duration of the network phase and
    /// cleared on every exit path.
    pub async fn publish(
        &self,
        session: &mut WizardSession,
        catalog: &[Section],
    ) -> Result<PublishSuccess, PublishError> {
        let submission = Self::prepare(session, catalog)?;
        let epoch = session.epoch;

        session.loading = true;
        session.error = None;
        let outcome = self.submit(&submission).await;
        session.loading = false;

        Self::apply(session, epoch, outcome)
    }
}
