//! REST client for the remote template service: catalog resolution,
//! configuration persistence, HTML rendering and image storage.

use serde::Deserialize;
use serde_json::Value;

use std::collections::HashMap;

use crate::common::{ApiConfig, ApiError};
use crate::models::{ClientConfiguration, Product, Section};

/// HTTP client for the template service. Cheap to clone per request
/// site; holds a pooled [`reqwest::Client`] and the base URL.
#[derive(Debug, Clone)]
pub struct TemplateApi {
    client: reqwest::Client,
    base_url: String,
}

/// Payload of `GET /client-templates/available-sections`.
#[derive(Debug, Clone, Deserialize)]
pub struct AvailableSections {
    pub sections: Vec<Section>,
    /// Category id to display name.
    #[serde(default)]
    pub categories: HashMap<String, String>,
}

/// Payload of the configuration create/update endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveResponse {
    #[serde(default)]
    pub url: Option<String>,
}

/// Payload of `POST /storage/images/{clientId}/upload`.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadedImage {
    pub url: String,
}

/// Entry of the `GET /client-templates` listing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSummary {
    pub client_id: String,
    #[serde(default)]
    pub name: String,
}

impl TemplateApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    /// Reuse an existing [`reqwest::Client`] for connection pooling.
    pub fn with_client(
        client: reqwest::Client,
        config: &ApiConfig,
    ) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    /// `GET /client-templates/available-sections`
    pub async fn available_sections(
        &self,
    ) -> Result<AvailableSections, ApiError> {
        let response = self
            .client
            .get(format!(
                "{}/client-templates/available-sections",
                self.base_url
            ))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// `POST /client-templates` - create a new client configuration.
    pub async fn create_configuration(
        &self,
        configuration: &ClientConfiguration,
    ) -> Result<SaveResponse, ApiError> {
        let response = self
            .client
            .post(format!("{}/client-templates", self.base_url))
            .json(configuration)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// `PUT /client-templates/{clientId}/configuration` - update an
    /// existing client configuration.
    pub async fn update_configuration(
        &self,
        client_id: &str,
        configuration: &ClientConfiguration,
    ) -> Result<SaveResponse, ApiError> {
        let response = self
            .client
            .put(format!(
                "{}/client-templates/{}/configuration",
                self.base_url, client_id
            ))
            .json(configuration)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// `GET /client-templates/{clientId}/configuration`
    pub async fn get_configuration(
        &self,
        client_id: &str,
    ) -> Result<ClientConfiguration, ApiError> {
        let response = self
            .client
            .get(format!(
                "{}/client-templates/{}/configuration",
                self.base_url, client_id
            ))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// `GET /client-templates/{clientId}/preview` - rendered HTML of
    /// the stored configuration.
    pub async fn preview(
        &self,
        client_id: &str,
    ) -> Result<String, ApiError> {
        let response = self
            .client
            .get(format!(
                "{}/client-templates/{}/preview",
                self.base_url, client_id
            ))
            .send()
            .await?;

        Self::parse_text(response).await
    }

    /// `POST /client-templates/{clientId}/render` - rendered HTML for
    /// override data, without persisting anything.
    pub async fn render_with(
        &self,
        client_id: &str,
        overrides: &Value,
    ) -> Result<String, ApiError> {
        let response = self
            .client
            .post(format!(
                "{}/client-templates/{}/render",
                self.base_url, client_id
            ))
            .json(overrides)
            .send()
            .await?;

        Self::parse_text(response).await
    }

    /// `GET /client-templates`
    pub async fn list_clients(
        &self,
    ) -> Result<Vec<ClientSummary>, ApiError> {
        let response = self
            .client
            .get(format!("{}/client-templates", self.base_url))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// `DELETE /client-templates/{clientId}`
    pub async fn delete_client(
        &self,
        client_id: &str,
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(format!(
                "{}/client-templates/{}",
                self.base_url, client_id
            ))
            .send()
            .await?;

        Self::check_status(response).await
    }

    /// `GET /client-templates/{clientId}/products`
    pub async fn list_products(
        &self,
        client_id: &str,
    ) -> Result<Vec<Product>, ApiError> {
        let response = self
            .client
            .get(format!(
                "{}/client-templates/{}/products",
                self.base_url, client_id
            ))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// `POST /client-templates/{clientId}/products`
    pub async fn save_products(
        &self,
        client_id: &str,
        products: &[Product],
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .post(format!(
                "{}/client-templates/{}/products",
                self.base_url, client_id
            ))
            .json(&products)
            .send()
            .await?;

        Self::check_status(response).await
    }

    /// `POST /storage/images/{clientId}/upload` - multipart form with
    /// the `image` file and its `category`.
    pub async fn upload_image(
        &self,
        client_id: &str,
        category: &str,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadedImage, ApiError> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(content_type)?;

        let form = reqwest::multipart::Form::new()
            .part("image", part)
            .text("category", category.to_string());

        let response = self
            .client
            .post(format!(
                "{}/storage/images/{}/upload",
                self.base_url, client_id
            ))
            .multipart(form)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Return the response unchanged on a success status, otherwise
    /// map the status and body text into an [`ApiError`].
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            log::debug!(
                "template API returned {}: {}",
                status,
                body
            );
            return Err(ApiError::from_status(status.as_u16(), body));
        }
        Ok(response)
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn parse_text(
        response: reqwest::Response,
    ) -> Result<String, ApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.text().await?)
    }

    async fn check_status(
        response: reqwest::Response,
    ) -> Result<(), ApiError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}
