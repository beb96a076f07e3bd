use aquasite_engine::blocks::{
    AccordionData, BannerData, BannerSize, Block, BlockData, GalleryData, GalleryLayout, LogoData,
    LogoEntry, LogoSize, LogosData, PageContent, PixelSize, TeamData, TeamMember, TitleData,
};
use aquasite_engine::store::{PageRecord, SavePageRequest};
use pretty_assertions::assert_eq;
use serde_json::json;

fn sample_page() -> PageContent {
    PageContent::new("Maricultura", "Cultivo no mar").with_blocks(vec![
        Block::new(
            "banner-1700000000000".into(),
            BlockData::Banner(BannerData {
                image_url: "https://cdn.example.org/banner.jpg".to_string(),
                size: Some(BannerSize::Hero),
            }),
        ),
        Block::new(
            "title-1700000000001".into(),
            BlockData::Title(TitleData {
                title: "Nossa produção".to_string(),
            }),
        ),
        Block::new(
            "gallery-1700000000002".into(),
            BlockData::Gallery(GalleryData {
                images: vec!["a.jpg".to_string(), "b.jpg".to_string()],
                layout: GalleryLayout::Carousel,
            }),
        ),
        Block::new(
            "logos-1700000000003".into(),
            BlockData::Logos(LogosData {
                logo_url: "l.png".to_string(),
                size: PixelSize::new(240, 120),
            }),
        ),
        Block::new(
            "logo-1700000000004".into(),
            BlockData::Logo(LogoData {
                title: "Parceiros".to_string(),
                size: LogoSize::Small,
                logos: vec![LogoEntry {
                    logo_url: "p.png".to_string(),
                    name: "Prefeitura".to_string(),
                }],
            }),
        ),
        Block::new(
            "team-1700000000005".into(),
            BlockData::Team(TeamData {
                members: vec![TeamMember {
                    avatar_url: "m.jpg".to_string(),
                    name: "Ana".to_string(),
                    role: "Presidente".to_string(),
                }],
            }),
        ),
        Block::new(
            "accordion-1700000000006".into(),
            BlockData::Accordion(AccordionData {
                title: "Como visitar?".to_string(),
                content: "<p>Agende.</p>".to_string(),
            }),
        ),
    ])
}

#[test]
fn save_request_wire_shape() {
    let request = SavePageRequest::new(&sample_page(), Some(json!({"highlight": true})));
    insta::assert_json_snapshot!("save_request_wire_shape", request);
}

#[test]
fn save_request_round_trips_through_json() {
    let request = SavePageRequest::new(&sample_page(), None);

    let body = serde_json::to_string(&request).unwrap();
    let decoded: SavePageRequest = serde_json::from_str(&body).unwrap();

    assert_eq!(decoded, request);
}

#[test]
fn stored_page_round_trips_losslessly() {
    let record = PageRecord {
        content: sample_page(),
        features: Some(json!({"highlight": true})),
    };

    let text = serde_json::to_string(&record.to_json()).unwrap();
    let reloaded = PageRecord::from_json(serde_json::from_str(&text).unwrap()).unwrap();

    assert_eq!(reloaded, record);
}

#[test]
fn unknown_blocks_survive_load_and_save() {
    let stored = json!({
        "content": {
            "title": "Turismo",
            "content": [
                {"id": "video-1", "type": "video", "data": {"url": "v.mp4", "autoplay": false}},
                {"id": "title-2", "type": "title", "data": {"title": "Roteiros"}},
            ],
        },
    });

    let record = PageRecord::from_json(stored).unwrap();
    let body = serde_json::to_value(SavePageRequest::new(&record.content, record.features)).unwrap();

    assert_eq!(
        body["contentBlocks"][0],
        json!({"id": "video-1", "type": "video", "data": {"url": "v.mp4", "autoplay": false}})
    );
}
