use regex::Regex;
use std::sync::LazyLock;

use super::model::{Block, BlockData};

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("valid regex"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

const SUMMARY_CHARS: usize = 80;

/// Visible text of an HTML fragment: tags stripped, entities decoded,
/// whitespace collapsed.
pub fn plain_text(html: &str) -> String {
    let without_tags = TAG.replace_all(html, " ");
    let decoded = html_escape::decode_html_entities(&without_tags);
    WHITESPACE.replace_all(decoded.trim(), " ").into_owned()
}

/// True when an HTML fragment shows nothing: no text and no images.
/// Rich-text widgets leave `<p><br></p>` behind when cleared.
pub fn is_blank_html(html: &str) -> bool {
    plain_text(html).is_empty() && !html.contains("<img")
}

/// One-line description of a block for the editor's block cards.
pub fn summary(block: &Block) -> String {
    let text = match &block.data {
        BlockData::Banner(data) => file_name(&data.image_url),
        BlockData::Title(data) => data.title.trim().to_string(),
        BlockData::Photo(data) => file_name(&data.image_url),
        BlockData::Description(data) => plain_text(&data.text),
        BlockData::Gallery(data) => count(data.images.len(), "imagem", "imagens"),
        BlockData::Logos(data) => file_name(&data.logo_url),
        BlockData::Logo(data) if !data.title.trim().is_empty() => format!(
            "{} · {}",
            data.title.trim(),
            count(data.logos.len(), "logo", "logos")
        ),
        BlockData::Logo(data) => count(data.logos.len(), "logo", "logos"),
        BlockData::Team(data) => count(data.members.len(), "membro", "membros"),
        BlockData::Accordion(data) => data.title.trim().to_string(),
        BlockData::Unknown { tag, .. } => format!("tipo \"{tag}\""),
    };
    if text.is_empty() {
        return "(vazio)".to_string();
    }
    truncate(&text, SUMMARY_CHARS)
}

fn file_name(url: &str) -> String {
    url.trim()
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .to_string()
}

fn count(n: usize, singular: &str, plural: &str) -> String {
    match n {
        0 => String::new(),
        1 => format!("1 {singular}"),
        n => format!("{n} {plural}"),
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars).collect();
    cut.push('…');
    cut
}
