use aquasite_engine::render::RenderPlan;
use dioxus::prelude::*;

use super::PageBlocks;

/// Page header followed by its planned blocks.
#[component]
pub fn PageView(plan: RenderPlan) -> Element {
    let RenderPlan {
        title,
        subtitle,
        blocks,
    } = plan;
    rsx! {
        article {
            class: "page-view",
            if !title.is_empty() || !subtitle.is_empty() {
                header {
                    class: "page-header",
                    if !title.is_empty() {
                        h1 { "{title}" }
                    }
                    if !subtitle.is_empty() {
                        p { class: "page-subtitle", "{subtitle}" }
                    }
                }
            }
            if blocks.is_empty() {
                p { class: "page-empty", "Nada para mostrar ainda." }
            } else {
                PageBlocks { blocks }
            }
        }
    }
}

/// Live preview beside the editor.
#[component]
pub fn PreviewRenderer(plan: RenderPlan) -> Element {
    rsx! {
        aside {
            class: "preview-pane",
            div { class: "preview-label", "Pré-visualização" }
            PageView { plan }
        }
    }
}
