use serde::de::DeserializeOwned;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

use super::lenient;
use super::payload::{
    AccordionData, BannerData, DescriptionData, GalleryData, LogoData, LogosData, PhotoData,
    TeamData, TitleData,
};

/// Stable block identifier, unique within a page and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// The closed set of block types, as stored in the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Banner,
    Title,
    Photo,
    Description,
    Gallery,
    Logos,
    Logo,
    Team,
    Accordion,
}

impl BlockKind {
    /// Palette order.
    pub const ALL: [BlockKind; 9] = [
        BlockKind::Banner,
        BlockKind::Title,
        BlockKind::Photo,
        BlockKind::Description,
        BlockKind::Gallery,
        BlockKind::Logos,
        BlockKind::Logo,
        BlockKind::Team,
        BlockKind::Accordion,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Banner => "banner",
            BlockKind::Title => "title",
            BlockKind::Photo => "photo",
            BlockKind::Description => "description",
            BlockKind::Gallery => "gallery",
            BlockKind::Logos => "logos",
            BlockKind::Logo => "logo",
            BlockKind::Team => "team",
            BlockKind::Accordion => "accordion",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }

    /// Palette label shown to authors.
    pub fn label(self) -> &'static str {
        match self {
            BlockKind::Banner => "Banner",
            BlockKind::Title => "Título",
            BlockKind::Photo => "Foto",
            BlockKind::Description => "Descrição",
            BlockKind::Gallery => "Galeria",
            BlockKind::Logos => "Imagem redimensionável",
            BlockKind::Logo => "Logos",
            BlockKind::Team => "Equipe",
            BlockKind::Accordion => "Acordeão",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type-specific block payload.
///
/// One variant per [`BlockKind`], plus `Unknown` for tags this build does not
/// know. Unknown blocks are carried through load/save untouched and render
/// nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockData {
    Banner(BannerData),
    Title(TitleData),
    Photo(PhotoData),
    Description(DescriptionData),
    Gallery(GalleryData),
    Logos(LogosData),
    Logo(LogoData),
    Team(TeamData),
    Accordion(AccordionData),
    Unknown { tag: String, data: Value },
}

impl BlockData {
    /// The empty payload a freshly added block starts with.
    pub fn default_for(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Banner => BlockData::Banner(BannerData::default()),
            BlockKind::Title => BlockData::Title(TitleData::default()),
            BlockKind::Photo => BlockData::Photo(PhotoData::default()),
            BlockKind::Description => BlockData::Description(DescriptionData::default()),
            BlockKind::Gallery => BlockData::Gallery(GalleryData::default()),
            BlockKind::Logos => BlockData::Logos(LogosData::default()),
            BlockKind::Logo => BlockData::Logo(LogoData::default()),
            BlockKind::Team => BlockData::Team(TeamData::default()),
            BlockKind::Accordion => BlockData::Accordion(AccordionData::default()),
        }
    }

    /// `None` for unknown tags.
    pub fn kind(&self) -> Option<BlockKind> {
        Some(match self {
            BlockData::Banner(_) => BlockKind::Banner,
            BlockData::Title(_) => BlockKind::Title,
            BlockData::Photo(_) => BlockKind::Photo,
            BlockData::Description(_) => BlockKind::Description,
            BlockData::Gallery(_) => BlockKind::Gallery,
            BlockData::Logos(_) => BlockKind::Logos,
            BlockData::Logo(_) => BlockKind::Logo,
            BlockData::Team(_) => BlockKind::Team,
            BlockData::Accordion(_) => BlockKind::Accordion,
            BlockData::Unknown { .. } => return None,
        })
    }

    /// The `type` tag this payload is stored under.
    pub fn tag(&self) -> &str {
        match self {
            BlockData::Unknown { tag, .. } => tag.as_str(),
            known => known.kind().map(BlockKind::as_str).unwrap_or_default(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.kind().map(BlockKind::label).unwrap_or("Bloco desconhecido")
    }

    /// Decode a stored payload. Never fails: a payload of the wrong shape
    /// yields the default payload for its kind.
    pub fn decode(tag: &str, data: Value) -> Self {
        let Some(kind) = BlockKind::from_tag(tag) else {
            log::debug!("keeping block with unknown type {tag:?} as opaque data");
            return BlockData::Unknown {
                tag: tag.to_string(),
                data,
            };
        };
        if !data.is_object() {
            return Self::default_for(kind);
        }
        match kind {
            BlockKind::Banner => BlockData::Banner(payload(kind, data)),
            BlockKind::Title => BlockData::Title(payload(kind, data)),
            BlockKind::Photo => BlockData::Photo(payload(kind, data)),
            BlockKind::Description => BlockData::Description(payload(kind, data)),
            BlockKind::Gallery => BlockData::Gallery(payload(kind, data)),
            BlockKind::Logos => BlockData::Logos(payload(kind, data)),
            BlockKind::Logo => BlockData::Logo(payload(kind, data)),
            BlockKind::Team => BlockData::Team(payload(kind, data)),
            BlockKind::Accordion => BlockData::Accordion(payload(kind, data)),
        }
    }
}

fn payload<T: DeserializeOwned + Default>(kind: BlockKind, data: Value) -> T {
    serde_json::from_value(data).unwrap_or_else(|e| {
        log::debug!("{kind} payload did not decode ({e}), using defaults");
        T::default()
    })
}

/// One typed, independently renderable unit of page content.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub id: BlockId,
    pub data: BlockData,
}

impl Block {
    pub fn new(id: BlockId, data: BlockData) -> Self {
        Self { id, data }
    }

    pub fn kind(&self) -> Option<BlockKind> {
        self.data.kind()
    }
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("type", self.data.tag())?;
        match &self.data {
            BlockData::Banner(data) => map.serialize_entry("data", data)?,
            BlockData::Title(data) => map.serialize_entry("data", data)?,
            BlockData::Photo(data) => map.serialize_entry("data", data)?,
            BlockData::Description(data) => map.serialize_entry("data", data)?,
            BlockData::Gallery(data) => map.serialize_entry("data", data)?,
            BlockData::Logos(data) => map.serialize_entry("data", data)?,
            BlockData::Logo(data) => map.serialize_entry("data", data)?,
            BlockData::Team(data) => map.serialize_entry("data", data)?,
            BlockData::Accordion(data) => map.serialize_entry("data", data)?,
            BlockData::Unknown { data, .. } => map.serialize_entry("data", data)?,
        }
        map.end()
    }
}

#[derive(Deserialize)]
struct StoredBlock {
    #[serde(deserialize_with = "lenient::string")]
    id: String,
    #[serde(rename = "type")]
    tag: String,
    #[serde(default)]
    data: Value,
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let stored = StoredBlock::deserialize(deserializer)?;
        if stored.id.is_empty() {
            return Err(serde::de::Error::custom("block id must not be empty"));
        }
        Ok(Block {
            id: BlockId(stored.id),
            data: BlockData::decode(&stored.tag, stored.data),
        })
    }
}

/// Decode a block sequence, skipping entries that are not blocks at all
/// (no id or no type) rather than failing the whole page.
pub(crate) fn block_list<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<Block>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<Block>(item) {
            Ok(block) => Some(block),
            Err(e) => {
                log::warn!("skipping stored block at index {index}: {e}");
                None
            }
        })
        .collect())
}

/// An editable page: header plus the ordered block sequence. Sequence index
/// is render order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageContent {
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub subtitle: String,
    #[serde(deserialize_with = "block_list")]
    pub blocks: Vec<Block>,
}

impl PageContent {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            blocks: Vec::new(),
        }
    }

    pub fn with_blocks(mut self, blocks: Vec<Block>) -> Self {
        self.blocks = blocks;
        self
    }

    pub fn position(&self, id: &BlockId) -> Option<usize> {
        self.blocks.iter().position(|block| &block.id == id)
    }

    pub fn block(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.iter().find(|block| &block.id == id)
    }

    pub fn block_mut(&mut self, id: &BlockId) -> Option<&mut Block> {
        self.blocks.iter_mut().find(|block| &block.id == id)
    }
}
