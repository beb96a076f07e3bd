use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::time::Duration;

use crate::store::http::join_url;
use crate::upload::{AssetFile, AssetUploader, UploadError, check_type, object_key};

/// Uploads through the API's multipart endpoint, which answers `{ "url": ... }`.
#[derive(Debug, Clone)]
pub struct HttpAssetUploader {
    client: reqwest::Client,
    upload_url: String,
    folder: String,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(default)]
    url: String,
}

impl HttpAssetUploader {
    pub fn new(
        base_url: &str,
        upload_path: &str,
        folder: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, UploadError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| UploadError::Network(e.to_string()))?;
        Ok(Self {
            client,
            upload_url: join_url(base_url, &[upload_path]),
            folder: folder.into(),
        })
    }

    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }
}

impl AssetUploader for HttpAssetUploader {
    async fn upload(&self, file: AssetFile) -> Result<String, UploadError> {
        check_type(&file)?;
        let key = object_key(&self.folder, &file.name);
        log::debug!("uploading {} ({} bytes) as {key}", file.name, file.bytes.len());

        let part = Part::bytes(file.bytes)
            .file_name(file.name.clone())
            .mime_str(&file.content_type)
            .map_err(|_| UploadError::UnsupportedType {
                name: file.name.clone(),
                content_type: file.content_type.clone(),
            })?;
        let form = Form::new().text("key", key).part("file", part);

        let resp = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(UploadError::Rejected { status, body });
        }

        let body: UploadResponse = resp
            .json()
            .await
            .map_err(|e| UploadError::InvalidResponse(e.to_string()))?;
        if body.url.is_empty() {
            return Err(UploadError::InvalidResponse(
                "response has no url".to_string(),
            ));
        }
        log::info!("uploaded {} to {}", file.name, body.url);
        Ok(body.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_upload_url() {
        let uploader = HttpAssetUploader::new(
            "https://api.example.org/",
            "/uploads",
            "paginas",
            Duration::from_secs(30),
        )
        .unwrap();
        assert_eq!(uploader.upload_url(), "https://api.example.org/uploads");
    }

    #[test]
    fn test_rejects_unsupported_type_without_a_request() {
        let uploader = HttpAssetUploader::new(
            "http://127.0.0.1:9",
            "uploads",
            "paginas",
            Duration::from_secs(1),
        )
        .unwrap();

        let result = block_on(uploader.upload(AssetFile::from_name("page.html", Vec::new())));

        assert!(matches!(result, Err(UploadError::UnsupportedType { .. })));
    }
}
