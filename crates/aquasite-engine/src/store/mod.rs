//! Persistence of whole pages.
//!
//! A page is loaded once per edit session and saved wholesale. The store never
//! sees individual block edits.

pub mod http;
pub mod wire;

use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;

pub use http::HttpPageStore;
pub use wire::{PageHeader, PageRecord, SavePageRequest};

/// The project pages built from blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Maricultura,
    Turismo,
    Socioambiental,
    QuemSomos,
}

impl PageKind {
    pub const ALL: [PageKind; 4] = [
        PageKind::Maricultura,
        PageKind::Turismo,
        PageKind::Socioambiental,
        PageKind::QuemSomos,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            PageKind::Maricultura => "maricultura",
            PageKind::Turismo => "turismo",
            PageKind::Socioambiental => "socioambiental",
            PageKind::QuemSomos => "quem-somos",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PageKind::Maricultura => "Maricultura",
            PageKind::Turismo => "Turismo",
            PageKind::Socioambiental => "Socioambiental",
            PageKind::QuemSomos => "Quem Somos",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.slug() == slug)
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server rejected the request ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Remote persistence for page records.
pub trait PageStore {
    /// A page that was never saved loads as an empty record.
    fn load(&self, page: PageKind) -> impl Future<Output = Result<PageRecord, StoreError>>;

    fn save(
        &self,
        page: PageKind,
        request: &SavePageRequest,
    ) -> impl Future<Output = Result<(), StoreError>>;
}

/// In-process store. Pages are kept in their GET shape and decoded on every
/// load, exactly as a remote response would be.
#[derive(Debug, Clone, Default)]
pub struct MemoryPageStore {
    inner: Arc<Mutex<MemoryPages>>,
}

#[derive(Debug, Default)]
struct MemoryPages {
    pages: HashMap<PageKind, Value>,
    fail_next_save: bool,
    saves: usize,
}

impl MemoryPageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a page with a raw GET response body.
    pub fn with_page(self, page: PageKind, response: Value) -> Self {
        self.lock().pages.insert(page, response);
        self
    }

    /// Make the next save fail with a 500.
    pub fn fail_next_save(&self) {
        self.lock().fail_next_save = true;
    }

    pub fn save_count(&self) -> usize {
        self.lock().saves
    }

    pub fn raw(&self, page: PageKind) -> Option<Value> {
        self.lock().pages.get(&page).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryPages> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PageStore for MemoryPageStore {
    async fn load(&self, page: PageKind) -> Result<PageRecord, StoreError> {
        let stored = self.lock().pages.get(&page).cloned();
        match stored {
            Some(value) => PageRecord::from_json(value),
            None => Ok(PageRecord::default()),
        }
    }

    async fn save(&self, page: PageKind, request: &SavePageRequest) -> Result<(), StoreError> {
        let mut pages = self.lock();
        if std::mem::take(&mut pages.fail_next_save) {
            return Err(StoreError::Rejected {
                status: 500,
                body: "simulated failure".to_string(),
            });
        }
        let record = request.clone().into_record();
        log::debug!(
            "stored {} blocks for page {page}",
            record.content.blocks.len()
        );
        pages.pages.insert(page, record.to_json());
        pages.saves += 1;
        Ok(())
    }
}
