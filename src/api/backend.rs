use crate::api::{AvailableSections, SaveResponse, TemplateApi};
use crate::common::ApiError;
use crate::models::ClientConfiguration;

/// The seam the catalog loader and publish coordinator talk through.
/// [`TemplateApi`] is the production implementation; tests substitute
/// a mock that records submissions.
#[allow(async_fn_in_trait)]
pub trait SiteBackend {
    async fn fetch_sections(
        &self,
    ) -> Result<AvailableSections, ApiError>;

    /// Create-or-update: persist the configuration under its client
    /// id, whether or not one already exists remotely.
    async fn save_configuration(
        &self,
        configuration: &ClientConfiguration,
    ) -> Result<SaveResponse, ApiError>;

    async fn fetch_preview(
        &self,
        client_id: &str,
    ) -> Result<String, ApiError>;
}

impl SiteBackend for TemplateApi {
    async fn fetch_sections(
        &self,
    ) -> Result<AvailableSections, ApiError> {
        self.available_sections().await
    }

    async fn save_configuration(
        &self,
        configuration: &ClientConfiguration,
    ) -> Result<SaveResponse, ApiError> {
        // Try the update path first; a configuration that was never
        // created comes back 404 and falls through to create.
        match self
            .update_configuration(
                &configuration.client_id,
                configuration,
            )
            .await
        {
            Ok(saved) => Ok(saved),
            Err(ApiError::NotFound(_)) => {
                self.create_configuration(configuration).await
            }
            Err(e) => Err(e),
        }
    }

    async fn fetch_preview(
        &self,
        client_id: &str,
    ) -> Result<String, ApiError> {
        self.preview(client_id).await
    }
}
