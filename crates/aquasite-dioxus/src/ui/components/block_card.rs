use aquasite_engine::blocks::{Block, BlockData, summary};
use aquasite_engine::editing::{AssetSlot, EditCmd};
use aquasite_engine::upload::AssetFile;
use dioxus::prelude::*;

use super::{BlockForm, UploadRequest};

/// One block in the editor list: header with ordering controls, then its form.
///
/// Cards are drag sources and drop targets. `dragging` holds the position of
/// the card being dragged, shared by every card in the list.
#[component]
pub fn BlockCard(
    index: usize,
    count: usize,
    block: Block,
    #[props(default)] uploading: bool,
    dragging: Signal<Option<usize>>,
    on_command: Callback<EditCmd>,
    on_upload: Callback<UploadRequest>,
) -> Element {
    let mut dragging = dragging;
    let mut collapsed = use_signal(|| false);
    let is_collapsed = collapsed();
    let is_dragged = dragging() == Some(index);
    let label = block.data.label();
    let preview_text = summary(&block);
    let dom_id = format!("block-{}", block.id);
    let card_class = if is_dragged {
        "block-card dragging"
    } else {
        "block-card"
    };

    rsx! {
        div {
            id: "{dom_id}",
            class: card_class,
            draggable: "true",
            ondragstart: move |_| dragging.set(Some(index)),
            ondragend: move |_| dragging.set(None),
            ondragover: move |event: Event<DragData>| event.prevent_default(),
            ondrop: move |event: Event<DragData>| {
                event.prevent_default();
                if let Some(from) = dragging.take()
                    && from != index
                {
                    on_command.call(EditCmd::Reorder { from, to: index });
                }
            },
            div {
                class: "block-card-header",
                span { class: "drag-handle", "aria-hidden": "true", "⠿" }
                button {
                    class: "block-card-toggle",
                    "aria-expanded": if is_collapsed { "false" } else { "true" },
                    onclick: move |_| collapsed.toggle(),
                    span { class: "block-card-label", "{label}" }
                    if is_collapsed {
                        span { class: "block-card-summary", "{preview_text}" }
                    }
                }
                if uploading {
                    span { class: "block-card-status", "Enviando…" }
                }
                div {
                    class: "block-card-actions",
                    button {
                        "aria-label": "Mover para cima",
                        disabled: index == 0,
                        onclick: move |_| {
                            if index > 0 {
                                on_command.call(EditCmd::Reorder { from: index, to: index - 1 });
                            }
                        },
                        "↑"
                    }
                    button {
                        "aria-label": "Mover para baixo",
                        disabled: index + 1 >= count,
                        onclick: move |_| {
                            if index + 1 < count {
                                on_command.call(EditCmd::Reorder { from: index, to: index + 1 });
                            }
                        },
                        "↓"
                    }
                    button {
                        class: "block-card-remove",
                        "aria-label": "Remover bloco",
                        onclick: {
                            let id = block.id.clone();
                            move |_| on_command.call(EditCmd::RemoveBlock { id: id.clone() })
                        },
                        "Remover"
                    }
                }
            }
            if !is_collapsed {
                BlockForm {
                    block: block.clone(),
                    uploading,
                    on_change: {
                        let id = block.id.clone();
                        move |data: BlockData| {
                            on_command.call(EditCmd::UpdateBlock { id: id.clone(), data });
                        }
                    },
                    on_upload: {
                        let block_id = block.id.clone();
                        Callback::new(move |(slot, files): (AssetSlot, Vec<AssetFile>)| {
                            on_upload.call(UploadRequest {
                                block_id: block_id.clone(),
                                slot,
                                files,
                            });
                        })
                    },
                }
            }
        }
    }
}
