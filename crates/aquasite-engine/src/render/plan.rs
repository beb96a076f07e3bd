use crate::blocks::{
    AccordionData, Block, BlockData, GalleryData, GalleryLayout, LogoData, PageContent, TeamData,
    is_blank_html,
};
use crate::render::gallery::chunk_block4;
use crate::render::layout::{
    BlockLayout, GalleryPlan, ImageLoading, ImageRef, LogoPlan, MemberPlan, PlannedBlock,
    RenderPlan,
};
use crate::render::policy::{Surface, prioritize};

/// Plan a whole page for `surface`.
pub fn plan_page(content: &PageContent, surface: Surface) -> RenderPlan {
    RenderPlan {
        title: content.title.trim().to_string(),
        subtitle: content.subtitle.trim().to_string(),
        blocks: plan_blocks(&content.blocks, surface),
    }
}

/// Plan a block sequence, dropping blocks with nothing to show.
pub fn plan_blocks(blocks: &[Block], surface: Surface) -> Vec<PlannedBlock> {
    let mut planned: Vec<PlannedBlock> = blocks
        .iter()
        .filter_map(|block| {
            plan_block(block, surface).map(|layout| PlannedBlock {
                id: block.id.clone(),
                layout,
            })
        })
        .collect();
    prioritize(&mut planned, surface);
    planned
}

/// Layout for a single block, or `None` when the block renders nothing.
pub fn plan_block(block: &Block, surface: Surface) -> Option<BlockLayout> {
    let loading = surface.default_loading();
    let image = |url: &str| ImageRef::new(url, loading);

    match &block.data {
        BlockData::Banner(banner) => {
            let url = non_empty(&banner.image_url)?;
            Some(BlockLayout::Banner {
                image: image(url),
                max_height: banner.effective_size().max_height_px(),
            })
        }
        BlockData::Title(title) => Some(BlockLayout::Title {
            text: non_empty(&title.title)?.to_string(),
        }),
        BlockData::Photo(photo) => Some(BlockLayout::Photo {
            image: image(non_empty(&photo.image_url)?),
        }),
        BlockData::Description(description) => {
            if is_blank_html(&description.text) {
                return None;
            }
            Some(BlockLayout::Description {
                html: description.text.clone(),
            })
        }
        BlockData::Gallery(gallery) => plan_gallery(gallery, loading),
        BlockData::Logos(logos) => Some(BlockLayout::Logos {
            image: image(non_empty(&logos.logo_url)?),
            width: logos.size.width,
            height: logos.size.height,
        }),
        BlockData::Logo(logo) => plan_logo_set(logo, loading),
        BlockData::Team(team) => plan_team(team, loading),
        BlockData::Accordion(accordion) => plan_accordion(accordion),
        BlockData::Unknown { tag, .. } => {
            log::debug!("block {} has unknown type {tag:?}, not rendered", block.id);
            None
        }
    }
}

fn non_empty(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn plan_gallery(gallery: &GalleryData, loading: ImageLoading) -> Option<BlockLayout> {
    let images: Vec<ImageRef> = gallery
        .images
        .iter()
        .filter_map(|url| non_empty(url))
        .map(|url| ImageRef::new(url, loading))
        .collect();
    if images.is_empty() {
        return None;
    }
    let plan = match gallery.layout {
        GalleryLayout::Grid => GalleryPlan::Grid { images },
        GalleryLayout::Block4 => GalleryPlan::Block4 {
            groups: chunk_block4(&images),
        },
        GalleryLayout::Carousel => GalleryPlan::Carousel {
            show_controls: images.len() > 1,
            images,
        },
    };
    Some(BlockLayout::Gallery(plan))
}

fn plan_logo_set(logo: &LogoData, loading: ImageLoading) -> Option<BlockLayout> {
    let logos: Vec<LogoPlan> = logo
        .logos
        .iter()
        .filter_map(|entry| {
            let url = non_empty(&entry.logo_url)?;
            Some(LogoPlan {
                image: ImageRef::new(url, loading),
                name: entry.name.trim().to_string(),
            })
        })
        .collect();
    let title = logo.title.trim();
    if logos.is_empty() && title.is_empty() {
        return None;
    }
    Some(BlockLayout::LogoSet {
        title: title.to_string(),
        size: logo.size,
        logos,
    })
}

fn plan_team(team: &TeamData, loading: ImageLoading) -> Option<BlockLayout> {
    let members: Vec<MemberPlan> = team
        .members
        .iter()
        .filter(|member| !member.is_blank())
        .map(|member| MemberPlan {
            avatar: non_empty(&member.avatar_url).map(|url| ImageRef::new(url, loading)),
            name: member.name.trim().to_string(),
            role: member.role.trim().to_string(),
        })
        .collect();
    if members.is_empty() {
        return None;
    }
    Some(BlockLayout::Team { members })
}

fn plan_accordion(accordion: &AccordionData) -> Option<BlockLayout> {
    let title = accordion.title.trim();
    let has_content = !is_blank_html(&accordion.content);
    if title.is_empty() && !has_content {
        return None;
    }
    Some(BlockLayout::Accordion {
        title: title.to_string(),
        html: if has_content {
            accordion.content.clone()
        } else {
            String::new()
        },
        expanded: false,
    })
}
