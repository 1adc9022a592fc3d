//! File upload endpoints (admin).

use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use storefront_client::{ApiError, Http, Result};

/// Metadata of an uploaded file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    /// Public URL of the stored file.
    pub url: String,
    /// Name of the file as uploaded.
    pub original_filename: Option<String>,
    /// Size in bytes.
    pub size: Option<u64>,
    /// MIME type.
    pub content_type: Option<String>,
    /// Admin account that performed the upload.
    pub uploader_admin_id: Option<i64>,
}

#[derive(Serialize)]
struct DeleteFilePayload<'a> {
    url: &'a str,
}

/// Client for `/admin/files`.
pub struct FilesApi<'a> {
    http: &'a Http,
}

impl<'a> FilesApi<'a> {
    /// Create the resource client.
    #[must_use]
    pub const fn new(http: &'a Http) -> Self {
        Self { http }
    }

    /// Upload an image (admin). Sent as multipart form data, overriding
    /// the pipeline's JSON default.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestSetup`] if `content_type` is not a valid
    /// MIME string, otherwise the pipeline's classified error on failure.
    pub async fn admin_upload_image(
        &self,
        file_name: impl Into<String>,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadedFile> {
        let part = Part::bytes(bytes)
            .file_name(file_name.into())
            .mime_str(content_type)
            .map_err(|e| ApiError::RequestSetup(e.to_string()))?;

        self.http
            .post_multipart("/admin/files/images", Form::new().part("file", part))
            .await
    }

    /// Delete a previously uploaded file by URL (admin).
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error on failure.
    pub async fn admin_delete_file(&self, url: &str) -> Result<String> {
        self.http
            .delete_json("/admin/files", &DeleteFilePayload { url })
            .await
    }
}
