use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::lenient;

/// Height class of a banner image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerSize {
    Hero,
    #[default]
    Panoramic,
    Wide,
    Standard,
}

impl BannerSize {
    pub const ALL: [BannerSize; 4] = [
        BannerSize::Hero,
        BannerSize::Panoramic,
        BannerSize::Wide,
        BannerSize::Standard,
    ];

    /// Maximum rendered height in pixels. Banners are never cropped.
    pub fn max_height_px(self) -> u32 {
        match self {
            BannerSize::Hero => 600,
            BannerSize::Panoramic => 500,
            BannerSize::Wide | BannerSize::Standard => 400,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BannerSize::Hero => "hero",
            BannerSize::Panoramic => "panoramic",
            BannerSize::Wide => "wide",
            BannerSize::Standard => "standard",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.as_str() == tag)
    }

    pub fn label(self) -> &'static str {
        match self {
            BannerSize::Hero => "Destaque (600px)",
            BannerSize::Panoramic => "Panorâmico (500px)",
            BannerSize::Wide => "Largo (400px)",
            BannerSize::Standard => "Padrão (400px)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryLayout {
    #[default]
    Grid,
    Block4,
    Carousel,
}

impl GalleryLayout {
    pub const ALL: [GalleryLayout; 3] = [
        GalleryLayout::Grid,
        GalleryLayout::Block4,
        GalleryLayout::Carousel,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GalleryLayout::Grid => "grid",
            GalleryLayout::Block4 => "block4",
            GalleryLayout::Carousel => "carousel",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|layout| layout.as_str() == tag)
    }

    pub fn label(self) -> &'static str {
        match self {
            GalleryLayout::Grid => "Grade",
            GalleryLayout::Block4 => "Blocos de 4",
            GalleryLayout::Carousel => "Carrossel",
        }
    }
}

/// Size class shared by every logo of a `logo` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl LogoSize {
    pub const ALL: [LogoSize; 3] = [LogoSize::Small, LogoSize::Medium, LogoSize::Large];

    pub fn max_height_px(self) -> u32 {
        match self {
            LogoSize::Small => 48,
            LogoSize::Medium => 80,
            LogoSize::Large => 120,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LogoSize::Small => "small",
            LogoSize::Medium => "medium",
            LogoSize::Large => "large",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.as_str() == tag)
    }

    pub fn label(self) -> &'static str {
        match self {
            LogoSize::Small => "Pequeno",
            LogoSize::Medium => "Médio",
            LogoSize::Large => "Grande",
        }
    }
}

/// Literal pixel size of the single resizable image in a `logos` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    pub const DEFAULT_WIDTH: u32 = 200;
    pub const DEFAULT_HEIGHT: u32 = 100;

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for PixelSize {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}

impl<'de> Deserialize<'de> for PixelSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let defaults = PixelSize::default();
        Ok(PixelSize {
            width: lenient::pixels_from(value.get("width")).unwrap_or(defaults.width),
            height: lenient::pixels_from(value.get("height")).unwrap_or(defaults.height),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerData {
    #[serde(deserialize_with = "lenient::string")]
    pub image_url: String,
    /// Absent means panoramic; kept as `None` so stored JSON round-trips untouched.
    #[serde(
        deserialize_with = "lenient::tag",
        skip_serializing_if = "Option::is_none"
    )]
    pub size: Option<BannerSize>,
}

impl BannerData {
    pub fn effective_size(&self) -> BannerSize {
        self.size.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleData {
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotoData {
    #[serde(deserialize_with = "lenient::string")]
    pub image_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescriptionData {
    /// Rich text as HTML.
    #[serde(deserialize_with = "lenient::string")]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryData {
    #[serde(deserialize_with = "lenient::string_list")]
    pub images: Vec<String>,
    #[serde(deserialize_with = "lenient::tag_or_default")]
    pub layout: GalleryLayout,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogosData {
    #[serde(deserialize_with = "lenient::string")]
    pub logo_url: String,
    pub size: PixelSize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoEntry {
    #[serde(deserialize_with = "lenient::string")]
    pub logo_url: String,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoData {
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(deserialize_with = "lenient::tag_or_default")]
    pub size: LogoSize,
    #[serde(deserialize_with = "lenient::entries")]
    pub logos: Vec<LogoEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamMember {
    #[serde(deserialize_with = "lenient::string")]
    pub avatar_url: String,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub role: String,
}

impl TeamMember {
    pub fn is_blank(&self) -> bool {
        self.avatar_url.trim().is_empty()
            && self.name.trim().is_empty()
            && self.role.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamData {
    #[serde(deserialize_with = "lenient::entries")]
    pub members: Vec<TeamMember>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccordionData {
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    /// Panel body as HTML.
    #[serde(deserialize_with = "lenient::string")]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(BannerSize::Hero, 600)]
    #[case(BannerSize::Panoramic, 500)]
    #[case(BannerSize::Wide, 400)]
    #[case(BannerSize::Standard, 400)]
    fn test_banner_max_heights(#[case] size: BannerSize, #[case] expected: u32) {
        assert_eq!(size.max_height_px(), expected);
    }

    #[test]
    fn test_banner_size_absent_or_unknown_is_panoramic() {
        let absent: BannerData = serde_json::from_value(json!({"image_url": "a.png"})).unwrap();
        let unknown: BannerData =
            serde_json::from_value(json!({"image_url": "a.png", "size": "gigantic"})).unwrap();

        assert_eq!(absent.size, None);
        assert_eq!(absent.effective_size(), BannerSize::Panoramic);
        assert_eq!(unknown.effective_size(), BannerSize::Panoramic);
    }

    #[test]
    fn test_absent_banner_size_is_not_written_back() {
        let banner = BannerData {
            image_url: "a.png".to_string(),
            size: None,
        };
        assert_eq!(
            serde_json::to_value(&banner).unwrap(),
            json!({"image_url": "a.png"})
        );
    }

    #[test]
    fn test_gallery_layout_defaults_to_grid() {
        let gallery: GalleryData = serde_json::from_value(json!({"images": []})).unwrap();
        assert_eq!(gallery.layout, GalleryLayout::Grid);
    }

    #[test]
    fn test_pixel_size_tolerates_partial_objects() {
        let logos: LogosData = serde_json::from_value(json!({
            "logo_url": "l.png",
            "size": {"width": "150"}
        }))
        .unwrap();
        assert_eq!(logos.size, PixelSize::new(150, PixelSize::DEFAULT_HEIGHT));

        let logos: LogosData =
            serde_json::from_value(json!({"logo_url": "l.png", "size": "big"})).unwrap();
        assert_eq!(logos.size, PixelSize::default());
    }

    #[test]
    fn test_logo_entries_skip_non_objects() {
        let logo: LogoData = serde_json::from_value(json!({
            "title": "Parceiros",
            "size": "large",
            "logos": [{"logo_url": "a.png", "name": "A"}, "b.png", {"name": "C"}]
        }))
        .unwrap();

        assert_eq!(logo.size, LogoSize::Large);
        assert_eq!(
            logo.logos,
            vec![
                LogoEntry {
                    logo_url: "a.png".to_string(),
                    name: "A".to_string()
                },
                LogoEntry {
                    logo_url: String::new(),
                    name: "C".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_tags_round_trip_through_strings() {
        for size in BannerSize::ALL {
            assert_eq!(BannerSize::from_tag(size.as_str()), Some(size));
        }
        for layout in GalleryLayout::ALL {
            assert_eq!(GalleryLayout::from_tag(layout.as_str()), Some(layout));
        }
        for size in LogoSize::ALL {
            assert_eq!(LogoSize::from_tag(size.as_str()), Some(size));
        }
    }
}
