//! Asset uploads to object storage.
//!
//! An upload turns one file into a public URL. The editor session decides
//! where that URL goes; this module only moves bytes.

pub mod http;

use futures::Stream;
use futures::stream::FuturesUnordered;
use std::collections::HashSet;
use std::future::Future;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use uuid::Uuid;

pub use http::HttpAssetUploader;

/// A file picked by the author, read fully into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl AssetFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Content type guessed from the file extension.
    pub fn from_name(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let content_type = guess_content_type(&name).to_string();
        Self {
            name,
            content_type,
            bytes,
        }
    }
}

fn guess_content_type(name: &str) -> &'static str {
    let extension = Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

/// What object storage accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    Pdf,
}

impl AssetKind {
    pub fn of(content_type: &str) -> Option<Self> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        if essence.starts_with("image/") && essence.len() > "image/".len() {
            Some(AssetKind::Image)
        } else if essence == "application/pdf" {
            Some(AssetKind::Pdf)
        } else {
            None
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("{name}: file type {content_type} is not accepted (images and PDF only)")]
    UnsupportedType { name: String, content_type: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("upload rejected ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("invalid upload response: {0}")]
    InvalidResponse(String),
}

/// Reject anything object storage would not take, before touching the network.
pub fn check_type(file: &AssetFile) -> Result<AssetKind, UploadError> {
    AssetKind::of(&file.content_type).ok_or_else(|| UploadError::UnsupportedType {
        name: file.name.clone(),
        content_type: file.content_type.clone(),
    })
}

/// `<folder>/<uuid>-<sanitised name>`
pub fn object_key(folder: &str, name: &str) -> String {
    let folder = folder.trim_matches('/');
    let file = format!("{}-{}", Uuid::new_v4(), sanitize_name(name));
    if folder.is_empty() {
        file
    } else {
        format!("{folder}/{file}")
    }
}

/// Lowercase ASCII letters, digits, `.` and `_`; every other run of
/// characters becomes a single `-`.
pub fn sanitize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() || c == '.' || c == '_' {
            out.push(c.to_ascii_lowercase());
        } else if !out.ends_with('-') {
            out.push('-');
        }
    }
    let trimmed = out.trim_matches('-');
    if trimmed.is_empty() {
        "arquivo".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Object storage for uploaded assets.
pub trait AssetUploader {
    /// Store `file` and return its public URL.
    fn upload(&self, file: AssetFile) -> impl Future<Output = Result<String, UploadError>>;
}

/// Run every upload concurrently. Results come out in completion order, each
/// with the tag it went in with.
pub fn upload_each<U, T>(
    uploader: &U,
    files: Vec<(T, AssetFile)>,
) -> impl Stream<Item = (T, Result<String, UploadError>)>
where
    U: AssetUploader,
{
    files
        .into_iter()
        .map(|(tag, file)| async move { (tag, uploader.upload(file).await) })
        .collect::<FuturesUnordered<_>>()
}

/// Uploader that keeps nothing and hands back `memory://` URLs.
#[derive(Debug, Clone)]
pub struct MemoryAssetUploader {
    folder: String,
    state: Arc<Mutex<MemoryUploads>>,
}

#[derive(Debug, Default)]
struct MemoryUploads {
    failing: HashSet<String>,
    uploaded: Vec<String>,
}

impl Default for MemoryAssetUploader {
    fn default() -> Self {
        Self::new("uploads")
    }
}

impl MemoryAssetUploader {
    pub fn new(folder: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            state: Arc::default(),
        }
    }

    /// Every upload of a file with this name fails with a network error.
    pub fn fail_name(&self, name: impl Into<String>) {
        self.lock().failing.insert(name.into());
    }

    /// URLs handed out so far, in completion order.
    pub fn uploaded(&self) -> Vec<String> {
        self.lock().uploaded.clone()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryUploads> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl AssetUploader for MemoryAssetUploader {
    async fn upload(&self, file: AssetFile) -> Result<String, UploadError> {
        check_type(&file)?;
        let mut state = self.lock();
        if state.failing.contains(&file.name) {
            return Err(UploadError::Network(format!(
                "simulated failure for {}",
                file.name
            )));
        }
        let url = format!("memory://{}", object_key(&self.folder, &file.name));
        log::debug!("stored {} bytes at {url}", file.bytes.len());
        state.uploaded.push(url.clone());
        Ok(url)
    }
}
