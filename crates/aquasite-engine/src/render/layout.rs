use crate::blocks::{BlockId, LogoSize};
use crate::render::policy::ImageClass;

/// How the browser should fetch an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageLoading {
    Eager,
    /// Eager and requested ahead of other images.
    Priority,
    Lazy,
}

impl ImageLoading {
    /// Value for the `loading` attribute.
    pub fn html_loading(self) -> &'static str {
        match self {
            ImageLoading::Eager | ImageLoading::Priority => "eager",
            ImageLoading::Lazy => "lazy",
        }
    }

    /// Value for the `fetchpriority` attribute, if any.
    pub fn fetch_priority(self) -> Option<&'static str> {
        match self {
            ImageLoading::Priority => Some("high"),
            ImageLoading::Eager | ImageLoading::Lazy => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub url: String,
    pub loading: ImageLoading,
}

impl ImageRef {
    pub fn new(url: impl Into<String>, loading: ImageLoading) -> Self {
        Self {
            url: url.into(),
            loading,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryPlan {
    Grid {
        images: Vec<ImageRef>,
    },
    /// Groups of at most four images, each laid out as its own 2×2 grid.
    Block4 {
        groups: Vec<Vec<ImageRef>>,
    },
    Carousel {
        images: Vec<ImageRef>,
        /// Previous/next controls and dots; pointless for a single image.
        show_controls: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoPlan {
    pub image: ImageRef,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberPlan {
    pub avatar: Option<ImageRef>,
    pub name: String,
    pub role: String,
}

/// Everything a surface needs to draw one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockLayout {
    /// Full-width image, scaled to fit (`object-contain`) under `max_height`.
    Banner { image: ImageRef, max_height: u32 },
    Title { text: String },
    Photo { image: ImageRef },
    /// Author HTML, inserted as-is.
    Description { html: String },
    Gallery(GalleryPlan),
    Logos {
        image: ImageRef,
        width: u32,
        height: u32,
    },
    LogoSet {
        title: String,
        size: LogoSize,
        logos: Vec<LogoPlan>,
    },
    Team { members: Vec<MemberPlan> },
    Accordion {
        title: String,
        html: String,
        expanded: bool,
    },
}

impl BlockLayout {
    /// Every image in drawing order.
    pub fn images(&self) -> Vec<&ImageRef> {
        match self {
            BlockLayout::Banner { image, .. }
            | BlockLayout::Photo { image }
            | BlockLayout::Logos { image, .. } => vec![image],
            BlockLayout::Gallery(GalleryPlan::Grid { images })
            | BlockLayout::Gallery(GalleryPlan::Carousel { images, .. }) => images.iter().collect(),
            BlockLayout::Gallery(GalleryPlan::Block4 { groups }) => groups.iter().flatten().collect(),
            BlockLayout::LogoSet { logos, .. } => logos.iter().map(|logo| &logo.image).collect(),
            BlockLayout::Team { members } => members
                .iter()
                .filter_map(|member| member.avatar.as_ref())
                .collect(),
            BlockLayout::Title { .. }
            | BlockLayout::Description { .. }
            | BlockLayout::Accordion { .. } => Vec::new(),
        }
    }

    pub(crate) fn images_mut(&mut self) -> Vec<(ImageClass, &mut ImageRef)> {
        match self {
            BlockLayout::Banner { image, .. } => vec![(ImageClass::Banner, image)],
            BlockLayout::Photo { image } => vec![(ImageClass::Photo, image)],
            BlockLayout::Logos { image, .. } => vec![(ImageClass::Logo, image)],
            BlockLayout::Gallery(GalleryPlan::Grid { images })
            | BlockLayout::Gallery(GalleryPlan::Carousel { images, .. }) => images
                .iter_mut()
                .map(|image| (ImageClass::Gallery, image))
                .collect(),
            BlockLayout::Gallery(GalleryPlan::Block4 { groups }) => groups
                .iter_mut()
                .flatten()
                .map(|image| (ImageClass::Gallery, image))
                .collect(),
            BlockLayout::LogoSet { logos, .. } => logos
                .iter_mut()
                .map(|logo| (ImageClass::Logo, &mut logo.image))
                .collect(),
            BlockLayout::Team { members } => members
                .iter_mut()
                .filter_map(|member| member.avatar.as_mut())
                .map(|avatar| (ImageClass::TeamAvatar, avatar))
                .collect(),
            BlockLayout::Title { .. }
            | BlockLayout::Description { .. }
            | BlockLayout::Accordion { .. } => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedBlock {
    pub id: BlockId,
    pub layout: BlockLayout,
}

/// A page ready to draw. Blocks with nothing to show are already left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderPlan {
    pub title: String,
    pub subtitle: String,
    pub blocks: Vec<PlannedBlock>,
}

impl RenderPlan {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn images(&self) -> impl Iterator<Item = &ImageRef> {
        self.blocks.iter().flat_map(|block| block.layout.images())
    }
}
