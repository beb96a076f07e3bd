use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;

use crate::store::{PageKind, PageRecord, PageStore, SavePageRequest, StoreError};

/// Page store backed by the site's REST API:
/// `GET` and `PUT` on `{base}/{pages_path}/{slug}`.
#[derive(Debug, Clone)]
pub struct HttpPageStore {
    client: reqwest::Client,
    base_url: String,
    pages_path: String,
}

impl HttpPageStore {
    pub fn new(
        base_url: impl Into<String>,
        pages_path: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StoreError::Network(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            pages_path: pages_path.into(),
        })
    }

    pub fn page_url(&self, page: PageKind) -> String {
        join_url(&self.base_url, &[&self.pages_path, page.slug()])
    }
}

impl PageStore for HttpPageStore {
    async fn load(&self, page: PageKind) -> Result<PageRecord, StoreError> {
        let url = self.page_url(page);
        log::debug!("GET {url}");
        let resp = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if resp.status() == StatusCode::NOT_FOUND {
            log::info!("page {page} has not been saved yet");
            return Ok(PageRecord::default());
        }
        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(StoreError::Rejected { status, body });
        }

        let value: Value = resp
            .json()
            .await
            .map_err(|e| StoreError::InvalidResponse(e.to_string()))?;
        PageRecord::from_json(value)
    }

    async fn save(&self, page: PageKind, request: &SavePageRequest) -> Result<(), StoreError> {
        let url = self.page_url(page);
        log::debug!("PUT {url} ({} blocks)", request.content_blocks.len());
        let resp = self
            .client
            .put(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(StoreError::Rejected { status, body });
        }
        log::info!("saved page {page}");
        Ok(())
    }
}

/// Join a base URL and path segments with single slashes. Empty segments are
/// skipped.
pub(crate) fn join_url(base: &str, segments: &[&str]) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    for segment in segments {
        let segment = segment.trim_matches('/');
        if !segment.is_empty() {
            url.push('/');
            url.push_str(segment);
        }
    }
    url
}
