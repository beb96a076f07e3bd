use dioxus::prelude::*;

/// Full-window error, shown when a page cannot be loaded.
#[component]
pub fn ErrorScreen(
    title: String,
    message: String,
    details: Option<String>,
    on_retry: Option<Callback<()>>,
) -> Element {
    rsx! {
        div {
            class: "error-screen",
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 60vh; padding: 24px; text-align: center;",
            h1 {
                style: "color: #dc322f;",
                "{title}"
            }
            p { "{message}" }
            if let Some(ref detail_text) = details {
                pre {
                    style: "text-align: left; white-space: pre-wrap; word-break: break-word; margin-top: 16px;",
                    "{detail_text}"
                }
            }
            if let Some(on_retry) = on_retry {
                button {
                    class: "error-retry",
                    onclick: move |_| on_retry.call(()),
                    "Tentar novamente"
                }
            }
        }
    }
}
