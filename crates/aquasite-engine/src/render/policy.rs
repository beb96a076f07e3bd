use crate::render::layout::{ImageLoading, PlannedBlock};

/// Where a page is drawn. Surfaces differ only in chrome and image loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    /// Inline preview next to the editor. Every image loads eagerly.
    Preview,
    /// Public read-only modal. One image loads with high priority, the rest
    /// lazily.
    Reader,
}

impl Surface {
    pub fn default_loading(self) -> ImageLoading {
        match self {
            Surface::Preview => ImageLoading::Eager,
            Surface::Reader => ImageLoading::Lazy,
        }
    }
}

/// Which image gets priority in the reader, lowest first. Ties go to the
/// image that comes first on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum ImageClass {
    Banner,
    Photo,
    Gallery,
    TeamAvatar,
    Logo,
}

pub(crate) fn prioritize(blocks: &mut [PlannedBlock], surface: Surface) {
    if surface != Surface::Reader {
        return;
    }
    let first = blocks
        .iter_mut()
        .flat_map(|block| block.layout.images_mut())
        .min_by_key(|(class, _)| *class);
    if let Some((_, image)) = first {
        image.loading = ImageLoading::Priority;
    }
}
