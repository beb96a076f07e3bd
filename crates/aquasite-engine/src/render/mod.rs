//! Render planning shared by the preview and the public reader.
//!
//! [`plan_page`] decides what each block looks like; the UI surfaces only
//! draw the resulting [`RenderPlan`] inside their own chrome.

pub mod gallery;
pub mod layout;
pub mod plan;
pub mod policy;

pub use gallery::chunk_block4;
pub use layout::{
    BlockLayout, GalleryPlan, ImageLoading, ImageRef, LogoPlan, MemberPlan, PlannedBlock,
    RenderPlan,
};
pub use plan::{plan_block, plan_blocks, plan_page};
pub use policy::Surface;
