//! JSON shapes exchanged with the page endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::blocks::lenient;
use crate::blocks::{Block, PageContent, block_list};
use crate::store::StoreError;

/// Keys under `content` that may hold the block array, in lookup order.
const BLOCK_KEYS: [&str; 3] = ["content", "blocks", "contentBlocks"];

/// A page as stored: editable content plus the opaque `features` value that
/// rides along untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageRecord {
    pub content: PageContent,
    pub features: Option<Value>,
}

impl PageRecord {
    /// Decode a GET response. Anything that is not a JSON object is invalid;
    /// inside the object every field is optional.
    pub fn from_json(value: Value) -> Result<Self, StoreError> {
        let Value::Object(mut root) = value else {
            return Err(StoreError::InvalidResponse(
                "page response is not a JSON object".to_string(),
            ));
        };
        let features = root.remove("features").filter(|f| !f.is_null());
        let mut content = match root.remove("content") {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        };

        let title = content
            .get("title")
            .map(lenient::string_from)
            .unwrap_or_default();
        let subtitle = content
            .get("subtitle")
            .map(lenient::string_from)
            .unwrap_or_default();
        let blocks = BLOCK_KEYS
            .iter()
            .find_map(|key| content.remove(*key).filter(Value::is_array))
            .or_else(|| root.remove("contentBlocks").filter(Value::is_array))
            .map(decode_blocks)
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            content: PageContent {
                title,
                subtitle,
                blocks,
            },
            features,
        })
    }

    /// The GET shape of this record.
    pub fn to_json(&self) -> Value {
        let mut root = json!({
            "content": {
                "title": self.content.title,
                "subtitle": self.content.subtitle,
                "content": self.content.blocks,
            }
        });
        if let (Some(features), Value::Object(map)) = (&self.features, &mut root) {
            map.insert("features".to_string(), features.clone());
        }
        root
    }
}

fn decode_blocks(value: Value) -> Result<Vec<Block>, StoreError> {
    block_list(value).map_err(|e| StoreError::InvalidResponse(e.to_string()))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageHeader {
    pub title: String,
    pub subtitle: String,
}

/// Body of a save: the whole page, written wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavePageRequest {
    pub content: PageHeader,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Value>,
    #[serde(rename = "contentBlocks", default, deserialize_with = "block_list")]
    pub content_blocks: Vec<Block>,
}

impl SavePageRequest {
    pub fn new(content: &PageContent, features: Option<Value>) -> Self {
        Self {
            content: PageHeader {
                title: content.title.clone(),
                subtitle: content.subtitle.clone(),
            },
            features,
            content_blocks: content.blocks.clone(),
        }
    }

    /// What a subsequent load of this page returns.
    pub fn into_record(self) -> PageRecord {
        PageRecord {
            content: PageContent {
                title: self.content.title,
                subtitle: self.content.subtitle,
                blocks: self.content_blocks,
            },
            features: self.features,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::{BlockData, BlockKind, TitleData};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn title_block(id: &str, text: &str) -> Value {
        json!({"id": id, "type": "title", "data": {"title": text}})
    }

    #[rstest]
    #[case::content_key(json!({"content": {"title": "T", "content": [title_block("title-1", "A")]}}))]
    #[case::blocks_key(json!({"content": {"title": "T", "blocks": [title_block("title-1", "A")]}}))]
    #[case::inner_content_blocks(json!({"content": {"title": "T", "contentBlocks": [title_block("title-1", "A")]}}))]
    #[case::top_level_content_blocks(json!({"content": {"title": "T"}, "contentBlocks": [title_block("title-1", "A")]}))]
    fn test_block_array_locations(#[case] response: Value) {
        let record = PageRecord::from_json(response).unwrap();

        assert_eq!(record.content.title, "T");
        assert_eq!(record.content.blocks.len(), 1);
        assert_eq!(record.content.blocks[0].id.as_str(), "title-1");
    }

    #[test]
    fn test_empty_object_is_an_empty_page() {
        let record = PageRecord::from_json(json!({})).unwrap();
        assert_eq!(record, PageRecord::default());
    }

    #[test]
    fn test_non_object_response_is_invalid() {
        assert!(matches!(
            PageRecord::from_json(json!([1, 2])),
            Err(StoreError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_features_pass_through_untouched() {
        let features = json!({"highlight": true, "order": [3, 1, 2]});
        let record = PageRecord::from_json(json!({
            "content": {"title": "Turismo"},
            "features": features.clone(),
        }))
        .unwrap();

        let request = SavePageRequest::new(&record.content, record.features.clone());

        assert_eq!(request.features, Some(features.clone()));
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["features"], features);
    }

    #[test]
    fn test_request_without_features_omits_the_key() {
        let request = SavePageRequest::new(&PageContent::new("Maricultura", ""), None);
        let body = serde_json::to_value(&request).unwrap();

        assert!(body.get("features").is_none());
        assert_eq!(body["contentBlocks"], json!([]));
    }

    #[test]
    fn test_get_shape_reloads_to_the_same_record() {
        let record = PageRecord {
            content: PageContent::new("Quem Somos", "Nossa história").with_blocks(vec![
                Block::new(
                    "title-1".into(),
                    BlockData::Title(TitleData {
                        title: "Quem Somos".to_string(),
                    }),
                ),
                Block::new("team-2".into(), BlockData::default_for(BlockKind::Team)),
            ]),
            features: Some(json!({"menu": "main"})),
        };

        assert_eq!(PageRecord::from_json(record.to_json()).unwrap(), record);
    }

    #[test]
    fn test_save_request_becomes_the_loaded_record() {
        let content = PageContent::new("Socioambiental", "").with_blocks(vec![Block::new(
            "photo-1".into(),
            BlockData::default_for(BlockKind::Photo),
        )]);
        let request = SavePageRequest::new(&content, None);

        let record = request.into_record();

        assert_eq!(record.content, content);
        assert_eq!(record.features, None);
    }
}
