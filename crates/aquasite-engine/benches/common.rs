// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
use aquasite_engine::blocks::{
    AccordionData, BannerData, Block, BlockData, BlockId, DescriptionData, GalleryData,
    GalleryLayout, PageContent, TeamData, TeamMember, TitleData,
};

#[allow(dead_code)]
pub fn generate_page(sections: usize) -> PageContent {
    let mut blocks = Vec::with_capacity(sections * 6);
    for section in 0..sections {
        let id = |kind: &str| BlockId::new(format!("{kind}-{section}"));
        blocks.push(Block::new(
            id("banner"),
            BlockData::Banner(BannerData {
                image_url: format!("https://cdn.example.org/banner-{section}.jpg"),
                size: None,
            }),
        ));
        blocks.push(Block::new(
            id("title"),
            BlockData::Title(TitleData {
                title: format!("Seção {section}"),
            }),
        ));
        blocks.push(Block::new(
            id("description"),
            BlockData::Description(DescriptionData {
                text: "<p>Cultivo de <strong>ostras</strong> e mexilhões na baía.</p>".repeat(3),
            }),
        ));
        blocks.push(Block::new(
            id("gallery"),
            BlockData::Gallery(GalleryData {
                images: (0..10)
                    .map(|i| format!("https://cdn.example.org/g-{section}-{i}.jpg"))
                    .collect(),
                layout: GalleryLayout::Block4,
            }),
        ));
        blocks.push(Block::new(
            id("team"),
            BlockData::Team(TeamData {
                members: (0..4)
                    .map(|i| TeamMember {
                        avatar_url: format!("https://cdn.example.org/m-{i}.jpg"),
                        name: format!("Membro {i}"),
                        role: "Produtor".to_string(),
                    })
                    .collect(),
            }),
        ));
        blocks.push(Block::new(
            id("accordion"),
            BlockData::Accordion(AccordionData {
                title: "Perguntas frequentes".to_string(),
                content: "<p>Resposta</p>".to_string(),
            }),
        ));
    }
    PageContent::new("Maricultura", "Produção sustentável").with_blocks(blocks)
}
