pub mod asset_input;
pub mod block_card;
pub mod block_editor;
pub mod block_form;
pub mod block_palette;
pub mod block_view;
pub mod error_screen;
pub mod notices;
pub mod preview;
pub mod reader_modal;

pub use asset_input::{AssetInput, UploadRequest};
pub use block_card::BlockCard;
pub use block_editor::BlockEditor;
pub use block_form::BlockForm;
pub use block_palette::BlockPalette;
pub use block_view::{BlockView, PageBlocks, PlanImage};
pub use error_screen::ErrorScreen;
pub use notices::NoticeList;
pub use preview::{PageView, PreviewRenderer, PreviewRendererProps};
pub use reader_modal::{ReaderModal, ReaderModalProps};
