use aquasite_engine::blocks::BlockKind;
use dioxus::prelude::*;

/// One button per block type, in palette order.
#[component]
pub fn BlockPalette(on_add: Callback<BlockKind>) -> Element {
    rsx! {
        div {
            class: "block-palette",
            h3 { "Adicionar bloco" }
            for kind in BlockKind::ALL {
                button {
                    key: "{kind}",
                    class: "palette-button",
                    "data-kind": kind.as_str(),
                    onclick: move |_| on_add.call(kind),
                    {kind.label()}
                }
            }
        }
    }
}
