pub mod blocks;
pub mod editing;
pub mod render;
pub mod store;
pub mod upload;

// Re-export key types for easier usage
pub use blocks::{Block, BlockData, BlockId, BlockKind, PageContent};
pub use editing::{
    AssetSlot, EditCmd, EditError, EditorSession, Notice, NoticeLevel, Patch, SaveState,
    UploadOutcome, UploadTicket,
};
pub use render::{BlockLayout, RenderPlan, Surface, plan_page};
pub use store::{
    HttpPageStore, MemoryPageStore, PageKind, PageRecord, PageStore, SavePageRequest, StoreError,
};
pub use upload::{
    AssetFile, AssetUploader, HttpAssetUploader, MemoryAssetUploader, UploadError, upload_each,
};
