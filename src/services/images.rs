use crate::api::{TemplateApi, UploadedImage};
use crate::common::UploadError;

/// Image upload with client-side validation. Wrong MIME types and
/// oversize files are rejected before any network call.
///
/// There is no compensating cleanup: an image uploaded for a
/// configuration whose submit later fails stays in remote storage.
pub struct ImageUploader;

impl ImageUploader {
    pub const MAX_BYTES: usize = 5 * 1024 * 1024;

    const ALLOWED_TYPES: [&'static str; 5] = [
        "image/png",
        "image/jpeg",
        "image/webp",
        "image/gif",
        "image/svg+xml",
    ];

    pub fn validate(
        content_type: &str,
        size: usize,
    ) -> Result<(), UploadError> {
        if !Self::ALLOWED_TYPES.contains(&content_type) {
            return Err(UploadError::UnsupportedType(
                content_type.to_string(),
            ));
        }

        if size > Self::MAX_BYTES {
            return Err(UploadError::TooLarge {
                max_mb: Self::MAX_BYTES / (1024 * 1024),
            });
        }

        Ok(())
    }

    pub async fn upload(
        api: &TemplateApi,
        client_id: &str,
        category: &str,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadedImage, UploadError> {
        Self::validate(content_type, bytes.len())?;

        let uploaded = api
            .upload_image(
                client_id,
                category,
                file_name,
                content_type,
                bytes,
            )
            .await
            .map_err(|e| {
                log::error!(
                    "image upload failed for {}: {}",
                    client_id,
                    e
                );
                e
            })?;

        Ok(uploaded)
    }
}
