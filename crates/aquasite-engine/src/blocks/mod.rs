//! Block model: the typed content units a project page is made of.

pub(crate) mod lenient;
pub mod model;
pub mod payload;
pub mod summary;

pub use model::{Block, BlockData, BlockId, BlockKind, PageContent};
pub(crate) use model::block_list;
pub use payload::{
    AccordionData, BannerData, BannerSize, DescriptionData, GalleryData, GalleryLayout, LogoData,
    LogoEntry, LogoSize, LogosData, PhotoData, PixelSize, TeamData, TeamMember, TitleData,
};
pub use summary::{is_blank_html, plain_text, summary};
