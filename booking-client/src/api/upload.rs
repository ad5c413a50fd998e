//! Image upload (`POST /upload`)

use std::path::Path;

use reqwest::Method;
use reqwest::multipart::{Form, Part};
use shared::ValidationError;
use shared::models::UploadedImage;

use crate::http::into_data;
use crate::{ClientResult, HttpClient};

/// Largest image the backend accepts
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

impl HttpClient {
    /// Upload an image file from disk
    ///
    /// Type and size are checked from the file name and metadata before the
    /// file is read.
    pub async fn upload_image(&self, path: &Path) -> ClientResult<UploadedImage> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();
        image_mime(&file_name)?;

        let unreadable = |e: std::io::Error| {
            ValidationError::invalid("file", format!("cannot read {}: {e}", path.display()))
        };
        let metadata = tokio::fs::metadata(path).await.map_err(unreadable)?;
        check_size(metadata.len())?;

        let bytes = tokio::fs::read(path).await.map_err(unreadable)?;
        self.upload_image_bytes(&file_name, bytes).await
    }

    /// Upload in-memory image bytes under `file_name`
    pub async fn upload_image_bytes(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> ClientResult<UploadedImage> {
        let mime = image_mime(file_name)?;
        check_size(bytes.len() as u64)?;

        let size = bytes.len();
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime.essence_str())
            .map_err(|e| ValidationError::invalid("file", format!("bad content type: {e}")))?;
        let form = Form::new().part("file", part);

        tracing::debug!(file_name, size, %mime, "Uploading image");
        let request = self.builder(Method::POST, "upload").await.multipart(form);
        let (status, envelope) = self.execute(request).await?;
        into_data(status, envelope)
    }
}

fn image_mime(file_name: &str) -> Result<mime_guess::Mime, ValidationError> {
    let mime = mime_guess::from_path(file_name).first_or_octet_stream();
    if mime.type_() != mime_guess::mime::IMAGE {
        return Err(ValidationError::invalid("file", "only image files can be uploaded"));
    }
    Ok(mime)
}

fn check_size(len: u64) -> Result<(), ValidationError> {
    if len == 0 {
        return Err(ValidationError::invalid("file", "file is empty"));
    }
    if len > MAX_UPLOAD_BYTES as u64 {
        return Err(ValidationError::invalid(
            "file",
            format!("file is larger than {} MB", MAX_UPLOAD_BYTES / (1024 * 1024)),
        ));
    }
    Ok(())
}
