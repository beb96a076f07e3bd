use aquasite_engine::render::RenderPlan;
use dioxus::prelude::*;

use super::PageView;

/// Read-only view of the page as the public sees it, over the editor.
#[component]
pub fn ReaderModal(plan: RenderPlan, on_close: Callback<()>) -> Element {
    rsx! {
        div {
            class: "reader-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "reader-modal",
                "role": "dialog",
                "aria-modal": "true",
                onclick: move |event: Event<MouseData>| event.stop_propagation(),
                button {
                    class: "reader-close",
                    "aria-label": "Fechar",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
                PageView { plan }
            }
        }
    }
}
