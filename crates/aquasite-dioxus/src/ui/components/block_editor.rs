use aquasite_engine::blocks::{Block, BlockId, BlockKind};
use aquasite_engine::editing::EditCmd;
use dioxus::prelude::*;

use super::{BlockCard, BlockPalette, UploadRequest};

/// The editable block list with the palette below it.
#[component]
pub fn BlockEditor(
    blocks: Vec<Block>,
    /// Blocks with an upload in flight.
    #[props(default)]
    uploading: Vec<BlockId>,
    on_command: Callback<EditCmd>,
    on_upload: Callback<UploadRequest>,
) -> Element {
    let dragging = use_signal(|| None::<usize>);
    let count = blocks.len();

    rsx! {
        div {
            class: "block-editor",
            if blocks.is_empty() {
                div {
                    class: "empty-page",
                    p { "Esta página ainda não tem blocos." }
                    p { "Escolha um tipo de bloco abaixo para começar." }
                }
            }
            for (index, block) in blocks.iter().enumerate() {
                BlockCard {
                    key: "{block.id}",
                    index,
                    count,
                    uploading: uploading.contains(&block.id),
                    block: block.clone(),
                    dragging,
                    on_command,
                    on_upload,
                }
            }
            BlockPalette {
                on_add: move |kind: BlockKind| on_command.call(EditCmd::AddBlock { kind }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aquasite_engine::blocks::BlockData;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    fn render_editor(blocks: Vec<Block>) -> String {
        let mut dom = VirtualDom::new_with_props(
            BlockEditor,
            BlockEditorProps {
                blocks,
                uploading: Vec::new(),
                on_command: Callback::new(|_| {}),
                on_upload: Callback::new(|_| {}),
            },
        );
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_empty_page_invites_first_block() {
        let html = render_editor(Vec::new());

        assert!(html.contains("Esta página ainda não tem blocos."));
        assert!(html.contains("Adicionar bloco"));
    }

    #[test]
    fn test_cards_follow_block_order() {
        let blocks = vec![
            Block::new("x-2".into(), BlockData::default_for(BlockKind::Gallery)),
            Block::new("x-1".into(), BlockData::default_for(BlockKind::Title)),
        ];

        let html = render_editor(blocks);

        let second = html.find("block-x-2").unwrap();
        let first = html.find("block-x-1").unwrap();
        assert!(second < first);
        assert!(!html.contains("Esta página ainda não tem blocos."));
    }
}
