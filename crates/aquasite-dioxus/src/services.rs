//! Concrete collaborators handed to the UI through context.

use aquasite_config::Config;
use aquasite_engine::store::{
    HttpPageStore, MemoryPageStore, PageKind, PageRecord, PageStore, SavePageRequest, StoreError,
};
use aquasite_engine::upload::{
    AssetFile, AssetUploader, HttpAssetUploader, MemoryAssetUploader, UploadError,
};

#[derive(Debug, Clone)]
pub enum StoreBackend {
    Http(HttpPageStore),
    Memory(MemoryPageStore),
}

impl PageStore for StoreBackend {
    async fn load(&self, page: PageKind) -> Result<PageRecord, StoreError> {
        match self {
            StoreBackend::Http(store) => store.load(page).await,
            StoreBackend::Memory(store) => store.load(page).await,
        }
    }

    async fn save(&self, page: PageKind, request: &SavePageRequest) -> Result<(), StoreError> {
        match self {
            StoreBackend::Http(store) => store.save(page, request).await,
            StoreBackend::Memory(store) => store.save(page, request).await,
        }
    }
}

#[derive(Debug, Clone)]
pub enum UploadBackend {
    Http(HttpAssetUploader),
    Memory(MemoryAssetUploader),
}

impl AssetUploader for UploadBackend {
    async fn upload(&self, file: AssetFile) -> Result<String, UploadError> {
        match self {
            UploadBackend::Http(uploader) => uploader.upload(file).await,
            UploadBackend::Memory(uploader) => uploader.upload(file).await,
        }
    }
}

/// Everything the editor talks to outside the process.
#[derive(Debug, Clone)]
pub struct Services {
    pub store: StoreBackend,
    pub uploader: UploadBackend,
}

impl Services {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let timeout = config.request_timeout();
        let store = HttpPageStore::new(&config.api_base_url, &config.pages_path, timeout)?;
        let uploader = HttpAssetUploader::new(
            &config.api_base_url,
            &config.upload_path,
            &config.upload_folder,
            timeout,
        )?;
        Ok(Self {
            store: StoreBackend::Http(store),
            uploader: UploadBackend::Http(uploader),
        })
    }

    /// Nothing leaves the process; pages last until the app closes.
    pub fn offline() -> Self {
        Self {
            store: StoreBackend::Memory(MemoryPageStore::new()),
            uploader: UploadBackend::Memory(MemoryAssetUploader::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aquasite_engine::blocks::PageContent;
    use futures::executor::block_on;

    #[test]
    fn test_from_config_builds_http_backends() {
        let services = Services::from_config(&Config::default()).unwrap();
        assert!(matches!(services.store, StoreBackend::Http(_)));
        assert!(matches!(services.uploader, UploadBackend::Http(_)));
    }

    #[test]
    fn test_offline_services_keep_pages_in_memory() {
        let services = Services::offline();
        let request = SavePageRequest::new(&PageContent::new("Turismo", ""), None);

        block_on(services.store.save(PageKind::Turismo, &request)).unwrap();
        let record = block_on(services.store.load(PageKind::Turismo)).unwrap();

        assert_eq!(record.content.title, "Turismo");
    }
}
